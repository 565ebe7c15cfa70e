//! Delete command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::get::ScopeArgs;
use super::wait::WaitArgs;

/// Resource types for the 'delete' command
#[derive(Subcommand, Debug)]
pub enum DeleteResource {
    /// Delete a volume
    #[command(visible_alias = "vol", visible_alias = "volumes")]
    Volume(DeleteVolumeArgs),

    /// Delete a stack
    #[command(visible_alias = "stacks")]
    Stack(DeleteStackArgs),
}

/// Arguments for 'delete volume' subcommand
#[derive(Parser, Debug)]
pub struct DeleteVolumeArgs {
    /// Volume ID
    pub id: String,

    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Print the task ID and return without waiting
    #[arg(long, default_value_t = false)]
    pub no_wait: bool,

    #[command(flatten)]
    pub wait: WaitArgs,
}

/// Arguments for 'delete stack' subcommand
#[derive(Parser, Debug)]
pub struct DeleteStackArgs {
    /// Stack ID
    pub id: String,

    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Print the task ID and return without waiting
    #[arg(long, default_value_t = false)]
    pub no_wait: bool,

    #[command(flatten)]
    pub wait: WaitArgs,
}
