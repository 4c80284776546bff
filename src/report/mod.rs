//! Diagnostic reporting
//!
//! The parser, processor and formatter never write to the console. They
//! report through the [`Reporter`] capability they are constructed with,
//! and the caller chooses the sink:
//!
//! - [`TracingReporter`] - emits `tracing` events (used by the binary)
//! - [`MemoryReporter`] - records diagnostics for later inspection

pub mod memory;
pub mod tracing_reporter;

pub use memory::{Diagnostic, MemoryReporter};
pub use tracing_reporter::TracingReporter;

use crate::types::{FileError, FormatError, RowError};

/// Sink for pipeline diagnostics
///
/// Errors are reported right before they are returned to the caller, so a
/// reporter sees exactly one error per failed run.
pub trait Reporter {
    /// A data record failed validation
    fn report_row_error(&self, error: &RowError);

    /// The input file could not be used
    fn report_file_error(&self, error: &FileError);

    /// Non-fatal condition noticed while processing
    fn report_process_warning(&self, message: &str);

    /// The statement could not be serialized
    fn report_format_error(&self, error: &FormatError);
}
