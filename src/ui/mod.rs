//! UI utilities for terminal output

mod spinner;

pub use spinner::{
    create_spinner, finish_spinner, finish_spinner_and_clear, listing_progress, task_progress,
    update_spinner,
};
