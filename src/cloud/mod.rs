//! Cloud API client module
//!
//! HTTP client, token resolution, the task tracker, the page walker and one
//! submodule per resource (models, API calls and command handlers).

mod client;
mod credentials;
pub mod helpers;
pub mod pagination;
pub mod projects;
pub mod regions;
pub mod stacks;
pub mod tasks;
pub mod traits;
pub mod volumes;

pub use client::CloudClient;
pub use credentials::TokenResolver;
pub use pagination::{extract_into, EmptyPagePolicy, Link, Page, PageDecoder, Pager};
pub use projects::{run_project_command, Project};
pub use regions::{run_region_command, Region};
pub use stacks::{run_delete_stack_command, run_stack_command, Stack};
pub use tasks::{
    run_task_get_command, run_task_wait_command, CreatedResources, ResourceKind, Task,
    TaskIdList, TaskProgress, TaskState, TaskStatusFetcher, TaskTracker, TaskWaitOptions,
    TimeoutPolicy,
};
pub use traits::{apply_name_filter, CloudResource};
pub use volumes::{
    run_create_volume_command, run_delete_volume_command, run_volume_command, Volume,
    VolumeAttachment,
};
