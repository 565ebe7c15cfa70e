//! JSON and YAML output formatters

use serde::Serialize;

use crate::error::{CloudError, Result};

/// Pretty-printed JSON
pub(super) fn to_json<S: Serialize + ?Sized>(value: &S) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// YAML document without the trailing newline
pub(super) fn to_yaml<S: Serialize + ?Sized>(value: &S) -> Result<String> {
    serde_yml::to_string(value)
        .map(|s| s.trim_end().to_string())
        .map_err(|e| CloudError::Json(format!("Failed to serialize YAML: {}", e)))
}
