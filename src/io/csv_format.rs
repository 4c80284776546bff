//! CSV format handling for transaction records
//!
//! This module centralizes all CSV schema concerns, providing:
//! - Quote validation on the raw bytes of each record
//! - Header validation against `date,amount,content`
//! - Row shape validation (empty rows, missing or empty columns)
//! - Conversion from raw records to typed transactions
//!
//! All functions are pure (no I/O) for easy testing. Errors come back
//! without a path or a report; the parser adds both.

use crate::types::{RawTransactionRecord, RowError, RowErrorKind, Transaction};
use chrono::NaiveDate;
use csv::StringRecord;

pub const COLUMN_DATE: &str = "date";
pub const COLUMN_AMOUNT: &str = "amount";
pub const COLUMN_CONTENT: &str = "content";

/// Required header columns, in order
pub const EXPECTED_COLUMNS: [&str; 3] = [COLUMN_DATE, COLUMN_AMOUNT, COLUMN_CONTENT];

/// Date layout used in both input and output
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Check the header record against [`EXPECTED_COLUMNS`]
///
/// Column names are compared trimmed and case-insensitively. Returns a
/// human-readable mismatch detail on failure, quoting the column untrimmed.
pub fn validate_header(header: &StringRecord) -> Result<(), String> {
    if header.len() != EXPECTED_COLUMNS.len() {
        return Err(format!(
            "expected {} columns, got {}",
            EXPECTED_COLUMNS.len(),
            header.len()
        ));
    }

    for (i, (expected, actual)) in EXPECTED_COLUMNS.iter().zip(header.iter()).enumerate() {
        if actual.trim().to_lowercase() != *expected {
            return Err(format!(
                "expected column {} to be '{}' but got '{}'",
                i + 1,
                expected,
                actual
            ));
        }
    }

    Ok(())
}

/// A row with no fields, or a single blank field, carries no data
pub fn is_empty_record(record: &StringRecord) -> bool {
    match record.len() {
        0 => true,
        1 => record[0].trim().is_empty(),
        _ => false,
    }
}

/// Validate the shape of a non-empty data row
///
/// Checks, in order: at least three columns, at most three when
/// `strict_columns` is set, and no blank field anywhere in the row.
pub fn validate_row(
    line: u64,
    record: &StringRecord,
    strict_columns: bool,
) -> Result<(), RowError> {
    let expected = EXPECTED_COLUMNS.len();

    if record.len() < expected {
        return Err(RowError::new(
            line,
            RowErrorKind::InsufficientColumns,
            join_record(record),
        ));
    }

    if strict_columns && record.len() > expected {
        return Err(RowError::new(
            line,
            RowErrorKind::UnexpectedColumns {
                expected,
                found: record.len(),
            },
            join_record(record),
        ));
    }

    if let Some(i) = record.iter().position(|field| field.trim().is_empty()) {
        return Err(RowError::new(
            line,
            RowErrorKind::EmptyColumn { column: i + 1 },
            join_record(record),
        ));
    }

    Ok(())
}

/// Trim the first three fields of a validated row into a raw record
pub fn to_raw_record(record: &StringRecord) -> RawTransactionRecord {
    let field = |i: usize| record.get(i).unwrap_or_default().trim().to_string();

    RawTransactionRecord {
        date: field(0),
        amount: field(1),
        content: field(2),
    }
}

/// Convert a raw record into a Transaction
///
/// The date must be exactly `YYYY/MM/DD` and a real calendar day; the
/// amount must be a base-10 integer with an optional sign.
pub fn convert_raw_record(line: u64, raw: RawTransactionRecord) -> Result<Transaction, RowError> {
    let date = parse_date(&raw.date).ok_or_else(|| RowError::invalid_date(line, &raw.date))?;

    let amount = raw
        .amount
        .parse::<i64>()
        .map_err(|_| RowError::invalid_amount(line, &raw.amount))?;

    Ok(Transaction::new(date, amount, raw.content))
}

/// Parse a `YYYY/MM/DD` date
///
/// chrono accepts unpadded or signed numbers for `%Y/%m/%d`, so the
/// 4-2-2 digit layout is checked before handing the value to chrono.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'/',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return None;
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

#[derive(Clone, Copy)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Check the quoting of one raw record, terminators included
///
/// The csv reader is lenient about quotes: a `"` after leading spaces or
/// in the middle of a field is kept as text, which splits a field like
/// ` "a, b"` in two. A field is quoted only when its first byte is `"`;
/// anywhere else a `"` is rejected, and inside a quoted field a `"` must
/// be doubled or close the field.
pub fn check_quoting(raw: &[u8]) -> Result<(), String> {
    use QuoteState::*;

    let mut state = FieldStart;
    for &b in raw {
        state = match (state, b) {
            (FieldStart, b'"') => Quoted,
            (FieldStart | Unquoted, b',' | b'\r' | b'\n') => FieldStart,
            (FieldStart | Unquoted, b'"') => {
                return Err("bare \" in non-quoted field".to_string())
            }
            (FieldStart | Unquoted, _) => Unquoted,
            (Quoted, b'"') => QuoteInQuoted,
            (Quoted, _) => Quoted,
            (QuoteInQuoted, b'"') => Quoted,
            (QuoteInQuoted, b',' | b'\r' | b'\n') => FieldStart,
            (QuoteInQuoted, _) => {
                return Err("extraneous or missing \" in quoted field".to_string())
            }
        };
    }

    match state {
        Quoted => Err("extraneous or missing \" in quoted field".to_string()),
        _ => Ok(()),
    }
}

fn join_record(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}
