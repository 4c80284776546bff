//! I/O module
//!
//! Handles CSV parsing and statement output.
//!
//! # Components
//!
//! - `csv_format` - CSV schema handling (header and row validation, record conversion)
//! - `csv_parser` - Reads a transaction file into typed transactions
//! - `json_format` - Renders a statement as pretty-printed JSON

pub mod csv_format;
pub mod csv_parser;
pub mod json_format;

pub use csv_parser::{CsvParser, ParserConfig};
pub use json_format::{JsonFormatter, JsonStatement, JsonTransaction};
