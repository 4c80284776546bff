//! Statement pipeline
//!
//! Orchestrates one run by coordinating the three stages:
//! - CSV parsing to `CsvParser`
//! - Period filtering and totals to `LedgerProcessor`
//! - JSON output to `JsonFormatter`
//!
//! All stages share the caller's reporter. The first error stops the run
//! and is returned as-is; no partial output is produced.

use crate::core::{LedgerProcessor, StatementFormatter, StatementProcessor, TransactionParser};
use crate::io::{CsvParser, JsonFormatter, ParserConfig};
use crate::report::Reporter;
use crate::types::LedgerError;
use std::path::Path;

/// Parse `path`, build the statement for `period` and render it as JSON
///
/// # Examples
///
/// ```no_run
/// use ledger_statement::io::ParserConfig;
/// use ledger_statement::pipeline::generate_statement;
/// use ledger_statement::report::TracingReporter;
/// use std::path::Path;
///
/// let reporter = TracingReporter::new();
/// let json = generate_statement(
///     Path::new("transactions.csv"),
///     "202601",
///     &ParserConfig::default(),
///     &reporter,
/// )
/// .expect("statement generation failed");
/// println!("{}", String::from_utf8_lossy(&json));
/// ```
pub fn generate_statement(
    path: &Path,
    period: &str,
    config: &ParserConfig,
    reporter: &dyn Reporter,
) -> Result<Vec<u8>, LedgerError> {
    let transactions = CsvParser::with_config(reporter, *config).parse(path)?;
    let statement = LedgerProcessor::new(reporter).process(&transactions, period)?;
    JsonFormatter::new(reporter).format(&statement)
}
