//! Volume API operations

use reqwest::Method;
use serde_json::Value;

use crate::cloud::pagination::Pager;
use crate::cloud::tasks::TaskIdList;
use crate::cloud::CloudClient;
use crate::config::api;
use crate::error::Result;

use super::models::Volume;

impl CloudClient {
    /// Pager over the volumes of one project and region
    pub fn volumes_pager(&self, project_id: u64, region_id: u64) -> Pager<'_, Volume> {
        let (project, region) = (project_id.to_string(), region_id.to_string());
        Pager::new(self, self.listing_url(&[api::VOLUMES, &project, &region])).with_context(
            format!("volumes in project {} region {}", project_id, region_id),
        )
    }

    /// Get all volumes of one project and region
    pub async fn get_volumes(&self, project_id: u64, region_id: u64) -> Result<Vec<Volume>> {
        self.volumes_pager(project_id, region_id).all_pages().await
    }

    /// Get a single volume by ID
    pub async fn get_volume(
        &self,
        project_id: u64,
        region_id: u64,
        volume_id: &str,
    ) -> Result<Option<Volume>> {
        let (project, region) = (project_id.to_string(), region_id.to_string());
        let url = self.url(&[api::VOLUMES, &project, &region, volume_id]);
        self.fetch_resource(&url, &format!("volume '{}'", volume_id))
            .await
    }

    /// Request volume creation; the body is sent as given
    pub async fn create_volume(
        &self,
        project_id: u64,
        region_id: u64,
        body: &Value,
    ) -> Result<TaskIdList> {
        let (project, region) = (project_id.to_string(), region_id.to_string());
        let url = self.url(&[api::VOLUMES, &project, &region]);
        self.submit(Method::POST, &url, Some(body), "volume creation")
            .await
    }

    /// Request volume deletion
    pub async fn delete_volume(
        &self,
        project_id: u64,
        region_id: u64,
        volume_id: &str,
    ) -> Result<TaskIdList> {
        let (project, region) = (project_id.to_string(), region_id.to_string());
        let url = self.url(&[api::VOLUMES, &project, &region, volume_id]);
        self.submit(
            Method::DELETE,
            &url,
            None,
            &format!("deletion of volume '{}'", volume_id),
        )
        .await
    }
}
