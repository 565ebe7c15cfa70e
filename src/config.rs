//! Configuration constants and the client configuration value

use std::time::Duration;

/// Configuration constants for the cloud API
pub mod api {
    /// Base path for the cloud API v1
    pub const BASE_PATH: &str = "/cloud/v1";

    /// Tasks endpoint
    pub const TASKS: &str = "tasks";

    /// Projects endpoint
    pub const PROJECTS: &str = "projects";

    /// Regions endpoint
    pub const REGIONS: &str = "regions";

    /// Volumes endpoint
    pub const VOLUMES: &str = "volumes";

    /// Stacks endpoint
    pub const STACKS: &str = "stacks";

    /// Key holding the record batch in listing responses
    pub const RESULTS_KEY: &str = "results";

    /// Link relation pointing at the next page
    pub const NEXT_REL: &str = "next";

    /// Default page size for listing requests
    pub const DEFAULT_PAGE_LIMIT: u32 = 100;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Path to the credentials file (relative to HOME)
    pub const FILE_PATH: &str = ".cloudctl/credentials.json";

    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["CLOUD_API_TOKEN", "CLOUD_TOKEN"];
}

/// Default values for CLI and client
pub mod defaults {
    /// Default API host
    pub const HOST: &str = "api.cloud.local";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Timeout for plain API requests (seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;

    /// Delay between task status polls (seconds)
    pub const TASK_POLL_INTERVAL_SECS: u64 = 5;

    /// Total wait budget for a task (seconds)
    pub const TASK_TIMEOUT_SECS: u64 = 180;
}

/// Client identifier sent with every request
pub fn client_id() -> String {
    format!("cloudctl/{}", env!("CARGO_PKG_VERSION"))
}

/// Connection settings handed to [`crate::cloud::CloudClient`]
///
/// Built once at startup and passed by value; nothing reads the environment
/// after this is constructed.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: String,
    pub token: String,
    pub request_timeout: Duration,
    pub client_id: String,
    /// Full base URL override (mock servers, on-prem gateways)
    pub base_url_override: Option<String>,
}

impl ClientConfig {
    pub fn new(host: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            token: token.into(),
            request_timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
            client_id: client_id(),
            base_url_override: None,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Base URL for API requests, without a trailing slash
    pub fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.trim_end_matches('/').to_string();
        }
        let host = self
            .host
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');
        format!("https://{}/{}", host, api::BASE_PATH.trim_start_matches('/'))
    }
}
