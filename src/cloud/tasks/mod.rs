//! Task module
//!
//! Mutating calls answer with task IDs; the resources they create only exist
//! once the task finishes. This module extracts those IDs and waits on them.

mod api;
mod commands;
mod models;
pub mod tracker;

pub use commands::{run_task_get_command, run_task_wait_command};
pub(crate) use commands::{print_created_ids, wait_or_report, WaitOutcome};
pub use models::{CreatedResources, ResourceKind, Task, TaskIdList, TaskState};
pub use tracker::{
    TaskProgress, TaskStatusFetcher, TaskTracker, TaskWaitOptions, TimeoutPolicy,
};
