use std::fmt;
use std::time::Duration;

/// Custom error type for cloud API operations
#[derive(Debug)]
pub enum CloudError {
    /// HTTP request failed (network, DNS, request timeout)
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Response body did not decode into the expected shape
    Json(String),
    /// A mutating call returned no task identifiers
    EmptyTaskList(String),
    /// Task reached a terminal state other than FINISHED
    TaskFailed {
        task_id: String,
        state: String,
        reason: Option<String>,
    },
    /// Task did not reach a terminal state within the attempt budget
    TaskTimeout {
        task_id: String,
        attempts: u32,
        waited: Duration,
    },
    /// A page after the first one failed to fetch or decode
    PageFetch {
        page: usize,
        source: Box<CloudError>,
    },
    /// Operation was cancelled by the caller
    Cancelled(String),
    /// Token not found in any source
    TokenNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// Configuration error
    Config(String),
    /// Caller supplied an invalid argument
    InvalidInput(String),
}

impl fmt::Display for CloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloudError::Http(e) => write!(f, "HTTP request failed: {}", e),
            CloudError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            CloudError::Json(msg) => write!(f, "JSON error: {}", msg),
            CloudError::EmptyTaskList(msg) => write!(f, "No task IDs returned: {}", msg),
            CloudError::TaskFailed {
                task_id,
                state,
                reason,
            } => {
                write!(f, "Task '{}' failed with state '{}'", task_id, state)?;
                if let Some(reason) = reason {
                    write!(f, ": {}", reason)?;
                }
                Ok(())
            }
            CloudError::TaskTimeout {
                task_id,
                attempts,
                waited,
            } => write!(
                f,
                "Task '{}' did not finish after {} polls ({}s)",
                task_id,
                attempts,
                waited.as_secs()
            ),
            CloudError::PageFetch { page, source } => {
                write!(f, "Failed to fetch page {}: {}", page, source)
            }
            CloudError::Cancelled(msg) => write!(f, "Cancelled: {}", msg),
            CloudError::TokenNotFound(msg) => write!(f, "{}", msg),
            CloudError::Credentials(msg) => write!(f, "{}", msg),
            CloudError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CloudError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for CloudError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CloudError::Http(e) => Some(e),
            CloudError::PageFetch { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CloudError {
    fn from(err: reqwest::Error) -> Self {
        CloudError::Http(err)
    }
}

impl From<serde_json::Error> for CloudError {
    fn from(err: serde_json::Error) -> Self {
        CloudError::Json(err.to_string())
    }
}

impl From<std::io::Error> for CloudError {
    fn from(err: std::io::Error) -> Self {
        CloudError::Credentials(err.to_string())
    }
}

impl CloudError {
    /// Whether this error carries a definitive task failure from the service
    pub fn is_task_failure(&self) -> bool {
        matches!(self, CloudError::TaskFailed { .. })
    }
}

/// Result type alias for cloud API operations
pub type Result<T> = std::result::Result<T, CloudError>;
