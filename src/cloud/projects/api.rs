//! Project API operations

use crate::cloud::pagination::Pager;
use crate::cloud::CloudClient;
use crate::config::api;
use crate::error::Result;

use super::models::Project;

impl CloudClient {
    /// Pager over all projects visible to the token
    pub fn projects_pager(&self) -> Pager<'_, Project> {
        Pager::new(self, self.listing_url(&[api::PROJECTS])).with_context("projects")
    }

    /// Get all projects (every page, in listing order)
    pub async fn get_projects(&self) -> Result<Vec<Project>> {
        self.projects_pager().all_pages().await
    }

    /// Get a single project by ID
    pub async fn get_project(&self, project_id: u64) -> Result<Option<Project>> {
        let id = project_id.to_string();
        let url = self.url(&[api::PROJECTS, &id]);
        self.fetch_resource(&url, &format!("project '{}'", project_id))
            .await
    }
}
