//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Transactions and the raw CSV record they are built from
//! - `statement`: Periods and the aggregated statement
//! - `error`: Error taxonomy for the pipeline

pub mod error;
pub mod statement;
pub mod transaction;

pub use error::{FileError, FileErrorKind, FormatError, LedgerError, RowError, RowErrorKind};
pub use statement::{Period, Statement};
pub use transaction::{Amount, RawTransactionRecord, Transaction};
