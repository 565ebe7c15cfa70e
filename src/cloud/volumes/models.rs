//! Volume data models

use serde::{Deserialize, Serialize};

use crate::cloud::traits::CloudResource;

/// Server attachment of a volume
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct VolumeAttachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<String>,
}

/// Block storage volume
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Volume {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Size in GiB
    #[serde(default)]
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<VolumeAttachment>,
}

impl CloudResource for Volume {
    fn resource_id(&self) -> String {
        self.id.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Volume {
    /// IDs of servers the volume is attached to
    pub fn attached_servers(&self) -> Vec<&str> {
        self.attachments
            .iter()
            .filter_map(|a| a.server_id.as_deref())
            .collect()
    }

    pub fn is_attached(&self) -> bool {
        !self.attachments.is_empty()
    }
}
