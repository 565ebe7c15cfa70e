//! cloudctl - client for a cloud control-plane API
//!
//! Lists projects, regions, volumes and stacks, and turns the asynchronous
//! task IDs returned by mutating calls into the resources they create.
//!
//! # Features
//!
//! - Bounded-retry task tracking with configurable timeout policy
//! - Lazy pagination over `next` links (pages, stream, or all records)
//! - Multiple output formats (table, CSV, JSON, YAML)
//! - Explicit client configuration, no global state
//!
//! # Example
//!
//! ```bash
//! # List volumes of project 1 in region 76
//! cloudctl get volumes -p 1 -r 76
//!
//! # Create volumes and wait for them
//! cloudctl create volume -p 1 -r 76 --body volumes.json
//!
//! # Wait for a task started elsewhere
//! cloudctl wait task 94b6fff4 --timeout 300 --fail-on-timeout
//! ```

pub mod cli;
pub mod cloud;
pub mod config;
pub mod error;
pub mod output;
pub mod ui;

pub use cli::{Cli, Command, OutputFormat};
pub use cloud::{
    extract_into, CloudClient, CloudResource, CreatedResources, EmptyPagePolicy, Page, Pager,
    ResourceKind, Task, TaskIdList, TaskState, TaskStatusFetcher, TaskTracker, TaskWaitOptions,
    TimeoutPolicy, TokenResolver,
};
pub use config::ClientConfig;
pub use error::{CloudError, Result};
