//! Wait command definitions and arguments

use clap::{Parser, Subcommand};
use std::time::Duration;

use super::common::OutputFormat;
use super::enums::KindArg;
use crate::cloud::{TaskWaitOptions, TimeoutPolicy};
use crate::config::defaults;

/// Resource types for the 'wait' command
#[derive(Subcommand, Debug)]
pub enum WaitResource {
    /// Poll a task until it finishes, fails or runs out of time
    #[command(visible_alias = "tasks")]
    Task(WaitTaskArgs),
}

/// Polling knobs shared by every command that waits on a task
#[derive(Parser, Debug, Clone, Copy)]
pub struct WaitArgs {
    /// Seconds between status polls
    #[arg(long, default_value_t = defaults::TASK_POLL_INTERVAL_SECS)]
    pub interval: u64,

    /// Total seconds to wait before giving up
    #[arg(long, default_value_t = defaults::TASK_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Exit with an error when the task is still running at the timeout
    #[arg(long, default_value_t = false)]
    pub fail_on_timeout: bool,
}

impl WaitArgs {
    /// Tracker options for these flags
    pub fn to_options(&self) -> TaskWaitOptions {
        let policy = if self.fail_on_timeout {
            TimeoutPolicy::Fail
        } else {
            TimeoutPolicy::ReturnEmpty
        };

        TaskWaitOptions::default()
            .with_poll_interval(Duration::from_secs(self.interval))
            .with_timeout(Duration::from_secs(self.timeout))
            .with_timeout_policy(policy)
    }
}

/// Arguments for 'wait task' subcommand
#[derive(Parser, Debug)]
pub struct WaitTaskArgs {
    /// Task ID
    pub id: String,

    #[command(flatten)]
    pub wait: WaitArgs,

    /// Only print IDs of this resource kind
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
