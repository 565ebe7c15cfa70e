//! Region module

mod api;
mod commands;
mod models;

pub use commands::run_region_command;
pub use models::Region;
