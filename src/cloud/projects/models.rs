//! Project data models

use serde::{Deserialize, Serialize};

use crate::cloud::traits::CloudResource;

/// Project as returned by the projects listing and get-one endpoints
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl CloudResource for Project {
    fn resource_id(&self) -> String {
        self.id.to_string()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Project {
    /// Get the project description
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn state(&self) -> &str {
        self.state.as_deref().unwrap_or("")
    }

    pub fn is_default(&self) -> bool {
        self.is_default.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_deserialize_minimal() {
        let prj: Project = serde_json::from_value(json!({"id": 1, "name": "default"})).unwrap();
        assert_eq!(prj.id, 1);
        assert_eq!(prj.description(), "");
        assert!(!prj.is_default());
    }

    #[test]
    fn test_project_deserialize_full() {
        let prj: Project = serde_json::from_value(json!({
            "id": 42,
            "name": "analytics",
            "description": "Data team",
            "state": "ACTIVE",
            "is_default": true,
            "client_id": 7,
            "created_at": "2024-02-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(prj.state(), "ACTIVE");
        assert!(prj.is_default());
        assert_eq!(prj.client_id, Some(7));
    }

    #[test]
    fn test_project_matches_by_id_and_name() {
        let prj: Project = serde_json::from_value(json!({"id": 42, "name": "analytics"})).unwrap();
        assert!(prj.matches("42"));
        assert!(prj.matches("analytics"));
        assert!(!prj.matches("4"));
    }

    #[test]
    fn test_project_serialize_skips_absent_fields() {
        let prj: Project = serde_json::from_value(json!({"id": 1, "name": "default"})).unwrap();
        let value = serde_json::to_value(&prj).unwrap();
        assert_eq!(value, json!({"id": 1, "name": "default"}));
    }
}
