//! Region data models

use serde::{Deserialize, Serialize};

use crate::cloud::traits::CloudResource;

/// Region as returned by the regions endpoints
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Region {
    pub id: u64,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keystone_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_type: Option<String>,
}

impl CloudResource for Region {
    fn resource_id(&self) -> String {
        self.id.to_string()
    }

    fn name(&self) -> &str {
        &self.display_name
    }

    /// Regions are also addressed by their keystone name
    fn matches(&self, input: &str) -> bool {
        self.resource_id() == input
            || self.display_name == input
            || self.keystone_name.as_deref() == Some(input)
    }
}
