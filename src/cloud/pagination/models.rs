//! Listing page data models

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::api;
use crate::error::{CloudError, Result};

/// Hypermedia link attached to a listing response
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

/// One fetched page of a listing
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// 1-based position in fetch order
    pub number: usize,
    /// URL the page was fetched from
    pub url: String,
    pub records: Vec<T>,
    /// Absolute URL of the next page, if any
    pub next: Option<String>,
    /// Total record count reported by the service
    pub count: Option<u64>,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Decode one designated key of an already-fetched body
///
/// Shared by single-page calls and by the per-page decoding in the pager.
pub fn extract_into<T: DeserializeOwned>(body: &Value, key: &str) -> Result<T> {
    let payload = body
        .get(key)
        .ok_or_else(|| CloudError::Json(format!("missing '{}' in response", key)))?;

    T::deserialize(payload).map_err(|e| CloudError::Json(format!("invalid '{}': {}", key, e)))
}

/// Default page decoder: the record batch under `results`
pub fn decode_results<T: DeserializeOwned>(body: &Value) -> Result<Vec<T>> {
    extract_into(body, api::RESULTS_KEY)
}

/// Links of a listing body; absent or null means none
pub fn links(body: &Value) -> Result<Vec<Link>> {
    match body.get("links") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(_) => extract_into(body, "links"),
    }
}

/// `href` of the `next` link, if present and non-empty
pub fn next_link(links: &[Link]) -> Option<&str> {
    links
        .iter()
        .find(|link| link.rel == api::NEXT_REL)
        .map(|link| link.href.as_str())
        .filter(|href| !href.is_empty())
}
