//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get projects
    #[command(visible_alias = "prj", visible_alias = "projects")]
    Project(ProjectArgs),

    /// Get regions
    #[command(visible_alias = "regions")]
    Region(RegionArgs),

    /// Get volumes in a project and region
    #[command(visible_alias = "vol", visible_alias = "volumes")]
    Volume(VolumeArgs),

    /// Get stacks in a project and region
    #[command(visible_alias = "stacks")]
    Stack(StackArgs),

    /// Get the current status of a task
    #[command(visible_alias = "tasks")]
    Task(GetTaskArgs),
}

/// Project and region a scoped resource lives in
#[derive(Parser, Debug, Clone, Copy)]
pub struct ScopeArgs {
    /// Project ID
    #[arg(short = 'p', long, env = "CLOUD_PROJECT_ID")]
    pub project: u64,

    /// Region ID
    #[arg(short = 'r', long, env = "CLOUD_REGION_ID")]
    pub region: u64,
}

/// Arguments for 'get project' subcommand
#[derive(Parser, Debug)]
pub struct ProjectArgs {
    /// Project ID or name (if specified, shows only that project)
    pub name: Option<String>,

    /// Filter projects by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get region' subcommand
#[derive(Parser, Debug)]
pub struct RegionArgs {
    /// Region ID or display name (if specified, shows only that region)
    pub name: Option<String>,

    /// Filter regions by display name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get volume' subcommand
#[derive(Parser, Debug)]
pub struct VolumeArgs {
    /// Volume ID or name (if specified, shows only that volume)
    pub id: Option<String>,

    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Filter volumes by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get stack' subcommand
#[derive(Parser, Debug)]
pub struct StackArgs {
    /// Stack ID or name (if specified, shows only that stack)
    pub id: Option<String>,

    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Filter stacks by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get task' subcommand
#[derive(Parser, Debug)]
pub struct GetTaskArgs {
    /// Task ID
    pub id: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
