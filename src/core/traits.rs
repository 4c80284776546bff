//! Core traits for the three pipeline stages
//!
//! Each stage sits behind a trait so a different input format, filtering
//! policy or output representation can replace the default one without
//! touching the others. Stages only share the data model in [`crate::types`].

use crate::types::{LedgerError, Statement, Transaction};
use std::path::Path;

/// Reads and validates an input file into typed transactions
pub trait TransactionParser {
    /// Parse every data row of the file at `path`, in file order
    ///
    /// The first invalid row or file problem aborts the parse; no partial
    /// result is returned.
    fn parse(&self, path: &Path) -> Result<Vec<Transaction>, LedgerError>;
}

/// Filters and aggregates transactions for one period
pub trait StatementProcessor {
    /// Build the statement for `period` (formatted as `YYYYMM`)
    fn process(&self, transactions: &[Transaction], period: &str)
        -> Result<Statement, LedgerError>;
}

/// Renders a statement into its output representation
pub trait StatementFormatter {
    fn format(&self, statement: &Statement) -> Result<Vec<u8>, LedgerError>;
}
