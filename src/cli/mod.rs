//! CLI argument parsing

mod common;
mod create;
mod delete;
mod enums;
mod get;
mod wait;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::OutputFormat;
pub use create::{CreateResource, CreateVolumeArgs};
pub use delete::{DeleteResource, DeleteStackArgs, DeleteVolumeArgs};
pub use enums::KindArg;
pub use get::{
    GetResource, GetTaskArgs, ProjectArgs, RegionArgs, ScopeArgs, StackArgs, VolumeArgs,
};
pub use wait::{WaitArgs, WaitResource, WaitTaskArgs};

/// Cloud control-plane CLI
#[derive(Parser, Debug)]
#[command(name = "cloudctl")]
#[command(version)]
#[command(
    about = "Explore cloud projects, regions, volumes and stacks, and wait on the tasks that create them",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// API host (without scheme)
    #[arg(short = 'H', long, global = true, env = "CLOUD_API_HOST", default_value = defaults::HOST)]
    pub host: String,

    /// Full API base URL, overriding --host (gateways, test servers)
    #[arg(long, global = true, env = "CLOUD_API_URL")]
    pub base_url: Option<String>,

    /// API token (overrides env vars and credentials file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Timeout for a single API request, in seconds
    #[arg(long, global = true, default_value_t = defaults::REQUEST_TIMEOUT_SECS)]
    pub request_timeout: u64,

    /// Batch mode: no spinners, plain output for scripting
    #[arg(short, long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Omit table and CSV headers
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show resources (list, or a single one by ID or name)
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Wait for an asynchronous task to finish
    Wait {
        #[command(subcommand)]
        resource: WaitResource,
    },

    /// Create resources from a JSON request body
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },

    /// Delete resources
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },
}
