//! Stack API operations

use reqwest::Method;

use crate::cloud::pagination::Pager;
use crate::cloud::tasks::TaskIdList;
use crate::cloud::CloudClient;
use crate::config::api;
use crate::error::Result;

use super::models::Stack;

impl CloudClient {
    /// Pager over the stacks of one project and region
    pub fn stacks_pager(&self, project_id: u64, region_id: u64) -> Pager<'_, Stack> {
        let (project, region) = (project_id.to_string(), region_id.to_string());
        Pager::new(self, self.listing_url(&[api::STACKS, &project, &region])).with_context(
            format!("stacks in project {} region {}", project_id, region_id),
        )
    }

    /// Get all stacks of one project and region
    pub async fn get_stacks(&self, project_id: u64, region_id: u64) -> Result<Vec<Stack>> {
        self.stacks_pager(project_id, region_id).all_pages().await
    }

    /// Get a single stack by ID
    pub async fn get_stack(
        &self,
        project_id: u64,
        region_id: u64,
        stack_id: &str,
    ) -> Result<Option<Stack>> {
        let (project, region) = (project_id.to_string(), region_id.to_string());
        let url = self.url(&[api::STACKS, &project, &region, stack_id]);
        self.fetch_resource(&url, &format!("stack '{}'", stack_id))
            .await
    }

    /// Request stack deletion
    pub async fn delete_stack(
        &self,
        project_id: u64,
        region_id: u64,
        stack_id: &str,
    ) -> Result<TaskIdList> {
        let (project, region) = (project_id.to_string(), region_id.to_string());
        let url = self.url(&[api::STACKS, &project, &region, stack_id]);
        self.submit(
            Method::DELETE,
            &url,
            None,
            &format!("deletion of stack '{}'", stack_id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CloudError;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_stack() {
        let mock_server = MockServer::start().await;
        let client = CloudClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/stacks/1/76/st-1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "st-1", "stack_name": "web-tier"})),
            )
            .mount(&mock_server)
            .await;

        let stack = client.get_stack(1, 76, "st-1").await.unwrap().unwrap();
        assert_eq!(stack.stack_name, "web-tier");
    }

    #[tokio::test]
    async fn test_delete_stack_empty_task_list() {
        let mock_server = MockServer::start().await;
        let client = CloudClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/stacks/1/76/st-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tasks": []})))
            .mount(&mock_server)
            .await;

        let tasks = client.delete_stack(1, 76, "st-1").await.unwrap();
        assert!(matches!(
            tasks.first("deletion of stack 'st-1'"),
            Err(CloudError::EmptyTaskList(_))
        ));
    }
}
