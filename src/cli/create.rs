//! Create command resource definitions and arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::get::ScopeArgs;
use super::wait::WaitArgs;

/// Resource types for the 'create' command
#[derive(Subcommand, Debug)]
pub enum CreateResource {
    /// Create volumes from a JSON request body
    #[command(visible_alias = "vol", visible_alias = "volumes")]
    Volume(CreateVolumeArgs),
}

/// Arguments for 'create volume' subcommand
#[derive(Parser, Debug)]
pub struct CreateVolumeArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Path to the JSON request body (use '-' for stdin)
    #[arg(long, value_name = "FILE")]
    pub body: PathBuf,

    /// Print the task ID and return without waiting
    #[arg(long, default_value_t = false)]
    pub no_wait: bool,

    #[command(flatten)]
    pub wait: WaitArgs,
}
