//! Stack data models

use serde::{Deserialize, Serialize};

use crate::cloud::traits::CloudResource;

/// Orchestration stack
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Stack {
    pub id: String,
    #[serde(default)]
    pub stack_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_status_reason: Option<String>,
}

impl CloudResource for Stack {
    fn resource_id(&self) -> String {
        self.id.clone()
    }

    fn name(&self) -> &str {
        &self.stack_name
    }
}
