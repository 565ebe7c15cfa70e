//! Stack module

mod api;
mod commands;
mod models;

pub use commands::{run_delete_stack_command, run_stack_command};
pub use models::Stack;
