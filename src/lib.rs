//! Ledger Statement Library
//! # Overview
//!
//! This library turns a CSV transaction file into a monthly statement:
//! parse, process, format, in that order.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, Period, Statement, errors)
//! - [`cli`] - CLI arguments parsing and diagnostics setup
//! - [`core`] - Business logic components:
//!   - [`core::traits`] - One trait per pipeline stage
//!   - [`core::processor`] - Period filtering, totals and ordering
//! - [`io`] - CSV parsing and JSON output
//! - [`report`] - Diagnostic reporting capability and its sinks
//! - [`pipeline`] - Runs the three stages end to end
//!
//! # Input
//!
//! A CSV file with the header `date,amount,content` (case-insensitive) and
//! rows such as `2026/01/15,1000,Salary`. Amounts are integers in minor
//! currency units. Blank rows are ignored.
//!
//! # Statement
//!
//! For a target period `YYYYMM` the statement holds:
//! - `period`: the month as `YYYY/MM`
//! - `total_income`: sum of positive amounts in the month
//! - `total_expenditure`: sum of zero and negative amounts in the month
//! - `transactions`: the month's transactions, most recent first
//!
//! # Errors
//!
//! Processing is fail-fast: the first file, row, period or format error
//! aborts the run and is returned as a [`LedgerError`] after being passed
//! to the [`Reporter`].

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod report;
pub mod types;

pub use crate::core::{LedgerProcessor, StatementFormatter, StatementProcessor, TransactionParser};
pub use io::{CsvParser, JsonFormatter, ParserConfig};
pub use pipeline::generate_statement;
pub use report::{MemoryReporter, Reporter, TracingReporter};
pub use types::{
    FileError, FileErrorKind, FormatError, LedgerError, Period, RowError, RowErrorKind, Statement,
    Transaction,
};
