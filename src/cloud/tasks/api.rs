//! Task API operations

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Method;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::config::api;
use crate::error::Result;
use crate::cloud::CloudClient;

use super::models::{CreatedResources, Task, TaskIdList};
use super::tracker::{TaskStatusFetcher, TaskTracker, TaskWaitOptions};

impl CloudClient {
    /// Get the current status of a task
    pub async fn get_task(&self, task_id: &str) -> Result<Task> {
        let url = self.url(&[api::TASKS, task_id]);
        self.fetch_json(&url, &format!("task '{}'", task_id)).await
    }

    /// Send a mutating request and decode the task IDs it started
    ///
    /// `body` is sent verbatim; resource-specific payloads are the caller's
    /// business.
    pub async fn submit(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
        error_context: &str,
    ) -> Result<TaskIdList> {
        debug!("{} {} ({})", method, url, error_context);

        let mut request = self.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let tasks: TaskIdList = self.parse_api_response(response, error_context).await?;

        debug!(
            "{} started {} task(s): {:?}",
            error_context,
            tasks.len(),
            tasks.tasks
        );
        Ok(tasks)
    }

    /// Send a mutating request and wait for the first task it started
    pub async fn submit_and_wait(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
        error_context: &str,
        options: TaskWaitOptions,
        cancel: Option<CancellationToken>,
    ) -> Result<Option<CreatedResources>> {
        let tasks = self.submit(method, url, body, error_context).await?;
        let task_id = tasks.first(error_context)?;
        if tasks.len() > 1 {
            warn!(
                "{} started {} tasks, tracking only {}",
                error_context,
                tasks.len(),
                task_id
            );
        }

        let mut tracker = TaskTracker::new(self, options);
        if let Some(token) = cancel {
            tracker = tracker.with_cancellation(token);
        }
        tracker.await_task(task_id).await
    }

    /// POST a creation body and wait for the resources it creates
    pub async fn create_and_wait(
        &self,
        url: &str,
        body: &Value,
        options: TaskWaitOptions,
    ) -> Result<Option<CreatedResources>> {
        self.submit_and_wait(Method::POST, url, Some(body), "creation", options, None)
            .await
    }

    /// DELETE a resource and wait for the deletion task
    pub async fn delete_and_wait(
        &self,
        url: &str,
        options: TaskWaitOptions,
    ) -> Result<Option<CreatedResources>> {
        self.submit_and_wait(Method::DELETE, url, None, "deletion", options, None)
            .await
    }
}

#[async_trait]
impl TaskStatusFetcher for CloudClient {
    async fn fetch_task(&self, task_id: &str) -> Result<Task> {
        self.get_task(task_id).await
    }
}
