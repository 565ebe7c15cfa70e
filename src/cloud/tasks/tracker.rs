//! Task completion tracking
//!
//! Polls a task until it reaches a terminal state or the attempt budget
//! (`timeout / poll_interval`) runs out. Only NEW and RUNNING lead to another
//! poll; a failed fetch or an unknown state ends the wait immediately.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use log::{debug, info, warn};
use tokio::time::{sleep, Instant};
use tokio_util::sync::CancellationToken;

use crate::config::defaults;
use crate::error::{CloudError, Result};

use super::models::{CreatedResources, Task, TaskState};

/// Source of task status snapshots
#[async_trait]
pub trait TaskStatusFetcher: Send + Sync {
    /// Fetch the current status of a task
    async fn fetch_task(&self, task_id: &str) -> Result<Task>;
}

/// What to do when the attempt budget runs out without a terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeoutPolicy {
    /// Succeed with no payload (the service's historical contract)
    #[default]
    ReturnEmpty,
    /// Fail with `CloudError::TaskTimeout`
    Fail,
}

/// Polling parameters for [`TaskTracker`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskWaitOptions {
    pub poll_interval: Duration,
    pub timeout: Duration,
    pub on_timeout: TimeoutPolicy,
}

impl Default for TaskWaitOptions {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(defaults::TASK_POLL_INTERVAL_SECS),
            timeout: Duration::from_secs(defaults::TASK_TIMEOUT_SECS),
            on_timeout: TimeoutPolicy::default(),
        }
    }
}

impl TaskWaitOptions {
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_timeout_policy(mut self, policy: TimeoutPolicy) -> Self {
        self.on_timeout = policy;
        self
    }

    /// Number of polls allowed: `floor(timeout / poll_interval)`
    pub fn max_attempts(&self) -> Result<u32> {
        if self.poll_interval.is_zero() {
            return Err(CloudError::Config(
                "task poll interval must be greater than zero".to_string(),
            ));
        }
        let attempts = self.timeout.as_nanos() / self.poll_interval.as_nanos();
        Ok(u32::try_from(attempts).unwrap_or(u32::MAX))
    }
}

/// Progress observation emitted for each non-terminal poll
#[derive(Debug, Clone)]
pub struct TaskProgress<'a> {
    pub task_id: &'a str,
    pub state: &'a TaskState,
    pub attempt: u32,
    pub max_attempts: u32,
}

type ProgressHook<'a> = Box<dyn Fn(&TaskProgress<'_>) + Send + Sync + 'a>;

/// Waits for tasks to reach a terminal state
///
/// One `await_task` call tracks one task; polls for that task never overlap.
/// Separate calls share nothing but the fetcher, so several tasks can be
/// tracked concurrently (see [`TaskTracker::await_tasks`]).
pub struct TaskTracker<'a, F: ?Sized> {
    fetcher: &'a F,
    options: TaskWaitOptions,
    cancel: Option<CancellationToken>,
    on_progress: Option<ProgressHook<'a>>,
}

impl<'a, F> TaskTracker<'a, F>
where
    F: TaskStatusFetcher + ?Sized,
{
    pub fn new(fetcher: &'a F, options: TaskWaitOptions) -> Self {
        Self {
            fetcher,
            options,
            cancel: None,
            on_progress: None,
        }
    }

    /// Abort waits when `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Observe each non-terminal poll
    pub fn on_progress(mut self, hook: impl Fn(&TaskProgress<'_>) + Send + Sync + 'a) -> Self {
        self.on_progress = Some(Box::new(hook));
        self
    }

    /// Wait for `task_id` to finish and return its created resources
    ///
    /// Returns `Ok(None)` when the task finished without a payload, or when
    /// the budget ran out under [`TimeoutPolicy::ReturnEmpty`].
    pub async fn await_task(&self, task_id: &str) -> Result<Option<CreatedResources>> {
        if task_id.is_empty() {
            return Err(CloudError::InvalidInput(
                "task ID must not be empty".to_string(),
            ));
        }

        let max_attempts = self.options.max_attempts()?;
        let started = Instant::now();

        debug!(
            "Waiting for task '{}' (interval {:?}, up to {} polls)",
            task_id, self.options.poll_interval, max_attempts
        );

        for attempt in 1..=max_attempts {
            let task = self
                .cancellable(task_id, self.fetcher.fetch_task(task_id))
                .await?;

            match task.state {
                TaskState::Finished => {
                    info!("Task '{}' finished after {} poll(s)", task_id, attempt);
                    return Ok(task.created_resources);
                }
                TaskState::New | TaskState::Running => {
                    info!(
                        "Task '{}' is {} (poll {}/{})",
                        task_id, task.state, attempt, max_attempts
                    );
                    if let Some(hook) = &self.on_progress {
                        hook(&TaskProgress {
                            task_id,
                            state: &task.state,
                            attempt,
                            max_attempts,
                        });
                    }
                    if attempt < max_attempts {
                        self.cancellable(task_id, async {
                            sleep(self.options.poll_interval).await;
                            Ok(())
                        })
                        .await?;
                    }
                }
                TaskState::Other(state) => {
                    debug!("Task '{}' ended in state '{}'", task_id, state);
                    return Err(CloudError::TaskFailed {
                        task_id: task_id.to_string(),
                        state,
                        reason: task.error,
                    });
                }
            }
        }

        let waited = started.elapsed();
        match self.options.on_timeout {
            TimeoutPolicy::ReturnEmpty => {
                warn!(
                    "Task '{}' still in progress after {} polls; returning without result",
                    task_id, max_attempts
                );
                Ok(None)
            }
            TimeoutPolicy::Fail => Err(CloudError::TaskTimeout {
                task_id: task_id.to_string(),
                attempts: max_attempts,
                waited,
            }),
        }
    }

    /// Track several tasks concurrently, one independent wait per ID
    ///
    /// Outcomes are returned in the order of `task_ids`.
    pub async fn await_tasks(&self, task_ids: &[String]) -> Vec<Result<Option<CreatedResources>>> {
        join_all(task_ids.iter().map(|id| self.await_task(id))).await
    }

    /// Race `fut` against the cancellation token, if any
    async fn cancellable<T>(&self, task_id: &str, fut: impl Future<Output = Result<T>>) -> Result<T> {
        match &self.cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(CloudError::Cancelled(format!(
                        "stopped waiting for task '{}'",
                        task_id
                    ))),
                    result = fut => result,
                }
            }
            None => fut.await,
        }
    }
}
