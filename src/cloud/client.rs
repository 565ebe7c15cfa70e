//! HTTP client for cloud API interactions

use log::debug;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::{api, ClientConfig};
use crate::error::{CloudError, Result};

/// Longest response excerpt carried into an API error message
const MAX_ERROR_BODY_LENGTH: usize = 200;

/// Cloud API client
///
/// Holds one pooled `reqwest::Client`; cloning the wrapper is cheap and
/// shares the pool.
#[derive(Clone)]
pub struct CloudClient {
    client: Client,
    config: ClientConfig,
}

impl CloudClient {
    /// Create a client from an explicit configuration value
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.client_id.clone())
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .connect_timeout(config.request_timeout)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a client against a custom base URL (mock servers, gateways)
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        Self::from_config(ClientConfig::new("localhost", token).with_base_url(base_url))
    }

    /// Build the base URL for API requests
    pub fn base_url(&self) -> String {
        self.config.base_url()
    }

    /// Build a full URL from path segments, percent-encoding each one
    pub fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    /// First-page URL of a listing endpoint
    pub fn listing_url(&self, segments: &[&str]) -> String {
        format!("{}?limit={}", self.url(segments), api::DEFAULT_PAGE_LIMIT)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .bearer_auth(&self.config.token)
            .header("Content-Type", "application/json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a request builder for an arbitrary method with standard headers
    pub(crate) fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.request(method, url))
    }

    /// Parse an API response, returning error for non-success status codes
    ///
    /// Transport failures while reading the body surface as `Http`; a body
    /// that does not match `T` surfaces as `Json`.
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, error_context, &body));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            CloudError::Json(format!("Failed to parse {}: {}", error_context, e))
        })
    }

    /// GET a URL and decode the body as JSON
    pub async fn fetch_json<T>(&self, url: &str, error_context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("Fetching {} from: {}", error_context, url);
        let response = self.get(url).send().await?;
        self.parse_api_response(response, error_context).await
    }

    /// Fetch a single resource by full URL
    ///
    /// The get-one endpoints return the bare resource object. A 404 maps to
    /// `Ok(None)`; other non-success codes are errors.
    pub async fn fetch_resource<T>(&self, url: &str, resource_label: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("{} not found", resource_label);
            return Ok(None);
        }

        self.parse_api_response(response, resource_label)
            .await
            .map(Some)
    }
}

/// Build an `Api` error carrying a truncated excerpt of the response body
fn api_error(status: StatusCode, error_context: &str, body: &str) -> CloudError {
    let body = body.trim();
    let message = if body.is_empty() {
        format!("Failed to fetch {}", error_context)
    } else if body.len() > MAX_ERROR_BODY_LENGTH {
        let cut = (0..=MAX_ERROR_BODY_LENGTH)
            .rev()
            .find(|i| body.is_char_boundary(*i))
            .unwrap_or(0);
        format!("Failed to fetch {}: {}...", error_context, &body[..cut])
    } else {
        format!("Failed to fetch {}: {}", error_context, body)
    };

    CloudError::Api {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
impl CloudClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url("test-token", base_url).expect("test client builds")
    }
}
