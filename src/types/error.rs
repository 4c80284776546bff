//! Error types for the ledger statement pipeline
//!
//! Every failure the pipeline can produce is a tagged variant carrying its
//! context (path, line, raw value), so callers can branch on the kind
//! without parsing messages.
//!
//! # Error Categories
//!
//! - **File Errors**: file not found, empty file, bad header, unreadable header
//! - **Row Errors**: missing or empty columns, bad date, bad amount, malformed record
//! - **Period Errors**: the target period is not a valid `YYYYMM`
//! - **Format Errors**: the statement could not be serialized
//!
//! All of them are fatal: the first one aborts the pipeline.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for the ledger pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The input file as a whole is unusable
    #[error(transparent)]
    File(#[from] FileError),

    /// A single data record failed validation
    #[error(transparent)]
    Row(#[from] RowError),

    /// The requested period is not a valid `YYYYMM`
    #[error("the period must be in yyyymm format (e.g., 202601), got '{period}'")]
    InvalidPeriod {
        /// The period string as given by the caller
        period: String,
    },

    /// The statement could not be rendered
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Reason a file-level error occurred
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileErrorKind {
    #[error("the specified file could not be found")]
    NotFound,

    #[error("the file contains no data")]
    EmptyFile,

    /// Header column count or names do not match `date,amount,content`
    #[error("the file header does not match the expected schema: {detail}")]
    InvalidHeader {
        /// Which part of the header mismatched
        detail: String,
    },

    /// The header record could not be read at all
    #[error("the file header could not be read: {message}")]
    Unreadable { message: String },
}

/// Failure tied to the input file as a whole
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("file error: {kind} (path: {})", .path.display())]
pub struct FileError {
    /// Path of the input file
    pub path: PathBuf,
    /// What went wrong
    pub kind: FileErrorKind,
}

/// Reason a row-level error occurred
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowErrorKind {
    #[error("row has fewer columns than expected")]
    InsufficientColumns,

    /// Only raised when strict column checking is enabled
    #[error("row has {found} columns, expected exactly {expected}")]
    UnexpectedColumns { expected: usize, found: usize },

    /// `column` is 1-based
    #[error("a required column is empty (column {column})")]
    EmptyColumn { column: usize },

    #[error("date is not in the required YYYY/MM/DD format")]
    InvalidDate,

    #[error("amount must be a valid integer")]
    InvalidAmount,

    /// The CSV reader could not decode the record
    #[error("record could not be read: {message}")]
    Malformed { message: String },
}

/// Failure tied to one data record of the input file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct RowError {
    /// 1-based record number, the header being line 1
    pub line: u64,
    /// What went wrong
    pub kind: RowErrorKind,
    /// The offending raw value (a field, or the whole row joined with `,`)
    pub value: String,
}

/// Failure to serialize a statement
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to format the statement output: {message}")]
pub struct FormatError {
    pub message: String,
}

impl From<serde_json::Error> for FormatError {
    fn from(error: serde_json::Error) -> Self {
        FormatError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl FileError {
    /// Create a file error for the given path
    pub fn new(path: &Path, kind: FileErrorKind) -> Self {
        FileError {
            path: path.to_path_buf(),
            kind,
        }
    }

    /// Create a NotFound error
    pub fn not_found(path: &Path) -> Self {
        Self::new(path, FileErrorKind::NotFound)
    }

    /// Create an EmptyFile error
    pub fn empty_file(path: &Path) -> Self {
        Self::new(path, FileErrorKind::EmptyFile)
    }

    /// Create an InvalidHeader error
    pub fn invalid_header(path: &Path, detail: impl Into<String>) -> Self {
        Self::new(
            path,
            FileErrorKind::InvalidHeader {
                detail: detail.into(),
            },
        )
    }
}

impl RowError {
    /// Create a row error at the given line
    pub fn new(line: u64, kind: RowErrorKind, value: impl Into<String>) -> Self {
        RowError {
            line,
            kind,
            value: value.into(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(line: u64, value: &str) -> Self {
        Self::new(line, RowErrorKind::InvalidDate, value)
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(line: u64, value: &str) -> Self {
        Self::new(line, RowErrorKind::InvalidAmount, value)
    }
}

impl LedgerError {
    /// Create an InvalidPeriod error
    pub fn invalid_period(period: &str) -> Self {
        LedgerError::InvalidPeriod {
            period: period.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        LedgerError::File(FileError::not_found(Path::new("missing.csv"))),
        "file error: the specified file could not be found (path: missing.csv)"
    )]
    #[case::empty_file(
        LedgerError::File(FileError::empty_file(Path::new("empty.csv"))),
        "file error: the file contains no data (path: empty.csv)"
    )]
    #[case::invalid_header(
        LedgerError::File(FileError::invalid_header(Path::new("in.csv"), "expected 3 columns, got 2")),
        "file error: the file header does not match the expected schema: expected 3 columns, got 2 (path: in.csv)"
    )]
    #[case::insufficient_columns(
        LedgerError::Row(RowError::new(4, RowErrorKind::InsufficientColumns, "2026/01/01,100")),
        "line 4: row has fewer columns than expected"
    )]
    #[case::empty_column(
        LedgerError::Row(RowError::new(2, RowErrorKind::EmptyColumn { column: 3 }, "2026/01/01,100,")),
        "line 2: a required column is empty (column 3)"
    )]
    #[case::unexpected_columns(
        LedgerError::Row(RowError::new(7, RowErrorKind::UnexpectedColumns { expected: 3, found: 5 }, "")),
        "line 7: row has 5 columns, expected exactly 3"
    )]
    #[case::invalid_date(
        LedgerError::Row(RowError::invalid_date(3, "2026-01-01")),
        "line 3: date is not in the required YYYY/MM/DD format"
    )]
    #[case::invalid_amount(
        LedgerError::Row(RowError::invalid_amount(5, "abc")),
        "line 5: amount must be a valid integer"
    )]
    #[case::invalid_period(
        LedgerError::invalid_period("202613"),
        "the period must be in yyyymm format (e.g., 202601), got '202613'"
    )]
    #[case::format(
        LedgerError::Format(FormatError { message: "boom".to_string() }),
        "failed to format the statement output: boom"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::not_found(
        FileError::not_found(Path::new("a.csv")),
        FileError { path: PathBuf::from("a.csv"), kind: FileErrorKind::NotFound }
    )]
    #[case::invalid_header(
        FileError::invalid_header(Path::new("a.csv"), "x"),
        FileError { path: PathBuf::from("a.csv"), kind: FileErrorKind::InvalidHeader { detail: "x".to_string() } }
    )]
    fn test_file_error_helpers(#[case] result: FileError, #[case] expected: FileError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_row_error_converts_into_ledger_error() {
        let error: LedgerError = RowError::invalid_amount(2, "abc").into();
        assert!(matches!(
            error,
            LedgerError::Row(RowError {
                line: 2,
                kind: RowErrorKind::InvalidAmount,
                ..
            })
        ));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<u32>("not json").unwrap_err();
        let error: FormatError = json_error.into();
        assert!(!error.message.is_empty());
    }
}
