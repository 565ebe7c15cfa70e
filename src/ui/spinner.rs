//! Progress spinner utilities

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner on stderr with the given message
///
/// Returns `None` in batch mode.
pub fn create_spinner(message: &str, quiet: bool) -> Option<ProgressBar> {
    if quiet {
        return None;
    }
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

/// Finish spinner with a message
pub fn finish_spinner(spinner: Option<ProgressBar>, message: &str) {
    if let Some(s) = spinner {
        s.finish_with_message(message.to_string());
    }
}

/// Replace the spinner message, if a spinner is shown
pub fn update_spinner(spinner: &Option<ProgressBar>, message: impl Into<String>) {
    if let Some(s) = spinner {
        s.set_message(message.into());
    }
}

/// Spinner text while a listing is being paged through
pub fn listing_progress(fetched: usize, total: Option<u64>, pages: usize) -> String {
    match total {
        Some(total) => format!("Fetched {}/{} records ({} page(s))...", fetched, total, pages),
        None => format!("Fetched {} records ({} page(s))...", fetched, pages),
    }
}

/// Spinner text for a task that has not reached a terminal state
pub fn task_progress(task_id: &str, state: &str, attempt: u32, max_attempts: u32) -> String {
    format!(
        "Task '{}' is {} (poll {}/{})",
        task_id, state, attempt, max_attempts
    )
}

/// Remove the spinner line entirely (errors are printed by the caller)
pub fn finish_spinner_and_clear(spinner: Option<ProgressBar>) {
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
}
