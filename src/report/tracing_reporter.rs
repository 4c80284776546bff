//! Reporter backed by `tracing`
//!
//! Row errors get kind-specific wording for the two value errors (amount
//! and date) and a generic line-oriented message for everything else.

use super::Reporter;
use crate::types::{FileError, FormatError, RowError, RowErrorKind};
use tracing::{error, warn};

/// Emits diagnostics as `tracing` events
///
/// Where the events end up is decided by the installed subscriber; the
/// binary sends them to stderr so stdout only carries the statement.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        TracingReporter
    }
}

/// Human-readable message for a row error
pub(crate) fn row_error_message(error: &RowError) -> String {
    match error.kind {
        RowErrorKind::InvalidAmount => format!(
            "AMOUNT ERROR | Line {}: check the formatting of {:?}",
            error.line, error.value
        ),
        RowErrorKind::InvalidDate => format!(
            "DATE ERROR | Line {}: incompatible date found: {:?}",
            error.line, error.value
        ),
        _ => format!("ROW ERROR | {}", error),
    }
}

pub(crate) fn file_error_message(error: &FileError) -> String {
    format!(
        "FATAL FILE ERROR | path: {} | reason: {}",
        error.path.display(),
        error.kind
    )
}

impl Reporter for TracingReporter {
    fn report_row_error(&self, row_error: &RowError) {
        error!(line = row_error.line, "{}", row_error_message(row_error));
    }

    fn report_file_error(&self, file_error: &FileError) {
        error!("{}", file_error_message(file_error));
    }

    fn report_process_warning(&self, message: &str) {
        warn!("PROCESSOR WARNING | {}", message);
    }

    fn report_format_error(&self, format_error: &FormatError) {
        error!("FORMATTER ERROR | failed to generate output: {}", format_error);
    }
}
