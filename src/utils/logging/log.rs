//! Log lines for directory operations and per-filing value issues

use std::path::Path;
use std::time::Duration;

use itertools::Itertools;

use crate::ingest::validate::ValidationIssue;

/// Log the start of an operation on a file or directory
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log the completion of an operation
///
/// # Arguments
/// * `operation` - Past-tense verb, e.g. "Ingested"
/// * `path` - File or directory operated on
/// * `count` - Number of things processed
/// * `unit` - What was counted, e.g. "returns"
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    path: &Path,
    count: usize,
    unit: &str,
    elapsed: Option<Duration>,
) {
    match elapsed {
        Some(duration) => log::info!(
            "{operation} {count} {unit} from {} in {duration:?}",
            path.display()
        ),
        None => log::info!("{operation} {count} {unit} from {}", path.display()),
    }
}

/// Log a warning, optionally about a path
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{}: {}", message, path.display()),
        None => log::warn!("{message}"),
    }
}

/// Log the values of one filing that did not fit their columns
///
/// One summary line naming the affected columns, then each issue at debug
/// level.
pub fn log_validation_issues(object_id: &str, issues: &[ValidationIssue]) {
    if issues.is_empty() {
        return;
    }
    let columns = issues
        .iter()
        .map(|issue| format!("{}.{}", issue.table, issue.column))
        .unique()
        .join(", ");
    log::info!(
        "Filing {object_id}: {} values did not fit their columns ({columns})",
        issues.len()
    );
    for issue in issues {
        log::debug!("Filing {object_id}: {issue}");
    }
}
