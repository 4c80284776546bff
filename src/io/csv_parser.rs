//! CSV transaction parser
//!
//! Reads a `date,amount,content` file into typed transactions, delegating
//! schema checks and conversion to the csv_format module.
//!
//! # Design
//!
//! The CsvParser reads the whole file, reads the header by hand (so an
//! empty file and a bad header can be told apart), then walks the
//! remaining records one at a time with a record counter. Fields are
//! trimmed by the schema checks, not by the reader, and the raw bytes of
//! each record are checked for stray quotes. The first failing record
//! stops the parse.
//!
//! ```no_run
//! use ledger_statement::core::TransactionParser;
//! use ledger_statement::io::CsvParser;
//! use ledger_statement::report::TracingReporter;
//! use std::path::Path;
//!
//! let reporter = TracingReporter::new();
//! let parser = CsvParser::new(&reporter);
//! let transactions = parser.parse(Path::new("transactions.csv")).unwrap();
//! println!("Parsed {} transactions", transactions.len());
//! ```
//!
//! # Error Handling
//!
//! - File errors (not found, empty, bad header) abort before any row is read
//! - Row errors carry the record number, the header being line 1
//! - Every error is passed to the reporter before it is returned

use crate::core::TransactionParser;
use crate::io::csv_format::{
    check_quoting, convert_raw_record, is_empty_record, to_raw_record, validate_header,
    validate_row,
};
use crate::report::Reporter;
use crate::types::{FileError, FileErrorKind, LedgerError, RowError, RowErrorKind, Transaction};
use csv::{Reader, ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Parser configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Reject data rows with more than three fields
    ///
    /// Off by default: extra trailing fields are tolerated (though they
    /// still must not be blank) and only the first three are mapped.
    pub strict_columns: bool,
}

impl ParserConfig {
    pub fn new(strict_columns: bool) -> Self {
        Self { strict_columns }
    }
}

/// CSV parser reporting through an injected [`Reporter`]
pub struct CsvParser<'r> {
    reporter: &'r dyn Reporter,
    config: ParserConfig,
}

impl<'r> CsvParser<'r> {
    /// Create a parser with the default (relaxed) configuration
    pub fn new(reporter: &'r dyn Reporter) -> Self {
        Self::with_config(reporter, ParserConfig::default())
    }

    pub fn with_config(reporter: &'r dyn Reporter, config: ParserConfig) -> Self {
        Self { reporter, config }
    }

    fn file_error(&self, error: FileError) -> LedgerError {
        self.reporter.report_file_error(&error);
        error.into()
    }

    fn row_error(&self, error: RowError) -> LedgerError {
        self.reporter.report_row_error(&error);
        error.into()
    }
}

impl TransactionParser for CsvParser<'_> {
    /// Parse transactions from the CSV file at `path`
    ///
    /// # Errors
    ///
    /// Returns a `LedgerError::File` if:
    /// - The file cannot be opened
    /// - The file has no records at all
    /// - The header is not `date,amount,content`
    ///
    /// Returns a `LedgerError::Row` for the first data row that has missing
    /// or blank columns, stray quotes, an invalid date or an invalid amount.
    fn parse(&self, path: &Path) -> Result<Vec<Transaction>, LedgerError> {
        let mut file = File::open(path).map_err(|_| self.file_error(FileError::not_found(path)))?;

        let mut input = Vec::new();
        file.read_to_end(&mut input).map_err(|e| {
            self.file_error(FileError::new(
                path,
                FileErrorKind::Unreadable {
                    message: e.to_string(),
                },
            ))
        })?;

        // The header is read as an ordinary record; shape and quote checks are ours.
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(input.as_slice());

        let mut record = StringRecord::new();
        let mut line: u64 = 1;

        let header_check = match read_raw_record(&mut reader, &input, &mut record) {
            Ok(Some(raw)) => check_quoting(raw),
            Ok(None) => return Err(self.file_error(FileError::empty_file(path))),
            Err(e) => Err(e.to_string()),
        };

        if let Err(message) = header_check {
            return Err(self.file_error(FileError::new(
                path,
                FileErrorKind::Unreadable { message },
            )));
        }

        if let Err(detail) = validate_header(&record) {
            return Err(self.file_error(FileError::invalid_header(path, detail)));
        }

        let mut transactions = Vec::new();

        loop {
            line += 1;

            let raw = match read_raw_record(&mut reader, &input, &mut record) {
                Ok(Some(raw)) => raw,
                Ok(None) => break,
                Err(e) => return Err(self.row_error(malformed(line, e.to_string(), b""))),
            };

            if let Err(message) = check_quoting(raw) {
                return Err(self.row_error(malformed(line, message, raw)));
            }

            if is_empty_record(&record) {
                continue;
            }

            validate_row(line, &record, self.config.strict_columns)
                .map_err(|e| self.row_error(e))?;

            let transaction =
                convert_raw_record(line, to_raw_record(&record)).map_err(|e| self.row_error(e))?;

            transactions.push(transaction);
        }

        debug!(
            path = %path.display(),
            count = transactions.len(),
            "parsed transactions"
        );

        Ok(transactions)
    }
}

/// Read the next record along with the bytes it was decoded from
///
/// Blank lines skipped by the reader before the record are included.
fn read_raw_record<'a>(
    reader: &mut Reader<&'a [u8]>,
    input: &'a [u8],
    record: &mut StringRecord,
) -> csv::Result<Option<&'a [u8]>> {
    let start = reader.position().byte() as usize;
    if !reader.read_record(record)? {
        return Ok(None);
    }
    let end = reader.position().byte() as usize;

    Ok(Some(input.get(start..end).unwrap_or_default()))
}

fn malformed(line: u64, message: String, raw: &[u8]) -> RowError {
    let value = String::from_utf8_lossy(raw);
    RowError::new(
        line,
        RowErrorKind::Malformed { message },
        value.trim_matches(|c| c == '\r' || c == '\n'),
    )
}
