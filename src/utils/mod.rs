//! Shared helpers for the ingestion pipeline

pub mod logging;

use std::path::Path;

use crate::error::Result;

pub use logging::{
    create_main_progress_bar, create_spinner, finish_and_clear, finish_progress_bar,
    log_operation_complete, log_operation_start, log_validation_issues, log_warning,
};

/// Validates that a directory exists and is a directory
///
/// # Errors
/// Returns an `Io` error with kind `NotFound` otherwise
pub fn validate_directory(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Directory does not exist: {}", dir.display()),
        )
        .into());
    }
    Ok(())
}

/// Truncate `text` to at most `max_chars` characters, on a char boundary
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("Montréal", 6), "Montré");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_validate_directory() {
        assert!(validate_directory(Path::new("/definitely/not/here")).is_err());
        assert!(validate_directory(&std::env::temp_dir()).is_ok());
    }
}
