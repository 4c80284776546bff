//! Core business logic module
//!
//! This module contains the pipeline stage abstractions and the statement logic:
//! - `traits` - One trait per pipeline stage (parse, process, format)
//! - `processor` - Period filtering, totals and ordering

pub mod processor;
pub mod traits;

pub use processor::LedgerProcessor;
pub use traits::{StatementFormatter, StatementProcessor, TransactionParser};
