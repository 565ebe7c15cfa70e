//! Volume module

mod api;
mod commands;
mod models;

pub use commands::{run_create_volume_command, run_delete_volume_command, run_volume_command};
pub use models::{Volume, VolumeAttachment};
