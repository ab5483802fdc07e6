//! Logging, progress and console output helpers

pub mod console;
pub mod log;
pub mod progress;

pub use log::{log_operation_complete, log_operation_start, log_validation_issues, log_warning};
pub use progress::{create_main_progress_bar, create_spinner, finish_and_clear, finish_progress_bar};
