//! In-memory reporter
//!
//! Keeps every diagnostic in order so tests (and embedding callers) can
//! assert on what was reported without capturing process output.

use super::Reporter;
use crate::types::{FileError, FormatError, RowError};
use std::cell::RefCell;

/// A single recorded diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    RowError(RowError),
    FileError(FileError),
    ProcessWarning(String),
    FormatError(FormatError),
}

/// Records diagnostics instead of emitting them
#[derive(Debug, Default)]
pub struct MemoryReporter {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far, oldest first
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Only the process warnings, in order
    pub fn warnings(&self) -> Vec<String> {
        self.diagnostics
            .borrow()
            .iter()
            .filter_map(|d| match d {
                Diagnostic::ProcessWarning(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    fn push(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

impl Reporter for MemoryReporter {
    fn report_row_error(&self, error: &RowError) {
        self.push(Diagnostic::RowError(error.clone()));
    }

    fn report_file_error(&self, error: &FileError) {
        self.push(Diagnostic::FileError(error.clone()));
    }

    fn report_process_warning(&self, message: &str) {
        self.push(Diagnostic::ProcessWarning(message.to_string()));
    }

    fn report_format_error(&self, error: &FormatError) {
        self.push(Diagnostic::FormatError(error.clone()));
    }
}
