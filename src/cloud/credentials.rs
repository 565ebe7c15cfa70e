//! API token resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{CloudError, Result};

/// Credentials file structure
#[derive(Deserialize, Debug)]
struct CredentialsFile {
    credentials: HashMap<String, Credential>,
}

/// Single credential entry
#[derive(Deserialize, Debug)]
struct Credential {
    token: String,
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    host: String,
    credentials_path: Option<PathBuf>,
}

impl TokenResolver {
    /// Create a new token resolver for the given host
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
            credentials_path: Self::default_credentials_path(),
        }
    }

    /// Read credentials from a specific file instead of the default location
    pub fn with_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_path = Some(path.into());
        self
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (CLOUD_API_TOKEN, CLOUD_TOKEN - in order)
    /// 3. Credentials file (~/.cloudctl/credentials.json), keyed by host
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token.filter(|t| !t.is_empty()) {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        for env_var in credentials::TOKEN_ENV_VARS {
            if let Ok(token) = std::env::var(env_var) {
                if !token.is_empty() {
                    debug!("Using token from {} environment variable", env_var);
                    return Ok(token);
                }
            }
        }

        debug!(
            "No token found in environment variables {:?}, trying credentials file",
            credentials::TOKEN_ENV_VARS
        );
        self.read_from_credentials_file()
    }

    /// Read token from the credentials file
    fn read_from_credentials_file(&self) -> Result<String> {
        let credentials_path = self
            .credentials_path
            .as_deref()
            .ok_or_else(|| CloudError::TokenNotFound(self.token_not_found_message(None)))?;

        debug!(
            "Looking for credentials file at: {}",
            credentials_path.display()
        );

        let content = match fs::read_to_string(credentials_path) {
            Ok(content) => content,
            Err(_) => {
                return Err(CloudError::TokenNotFound(
                    self.token_not_found_message(Some(credentials_path)),
                ));
            }
        };

        let creds: CredentialsFile = serde_json::from_str(&content).map_err(|e| {
            CloudError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                credentials_path.display(),
                e
            ))
        })?;

        creds
            .credentials
            .get(&self.host)
            .map(|cred| {
                debug!(
                    "Using token from credentials file {} for host: {}",
                    credentials_path.display(),
                    self.host
                );
                cred.token.clone()
            })
            .ok_or_else(|| {
                CloudError::TokenNotFound(self.token_not_found_message(Some(credentials_path)))
            })
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self, credentials_path: Option<&Path>) -> String {
        let env_vars = credentials::TOKEN_ENV_VARS.join(", ");
        let creds_info = credentials_path
            .map(|p| format!(" or in credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No API token found for host '{}'. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      cloudctl --token <TOKEN>\n\
             2. Environment var:   export CLOUD_API_TOKEN=<TOKEN>  (also: CLOUD_TOKEN)\n\
             3. Credentials file:  ~/{} with {{\"credentials\": {{\"{}\": {{\"token\": \"...\"}}}}}}\n\
             \n\
             Checked: env vars [{}]{}",
            self.host,
            credentials::FILE_PATH,
            self.host,
            env_vars,
            creds_info
        )
    }

    fn default_credentials_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(credentials::FILE_PATH))
    }
}
