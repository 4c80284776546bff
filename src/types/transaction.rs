//! Transaction-related types for the ledger
//!
//! This module defines the typed transaction produced by the parser and the
//! raw textual record it is built from.

use chrono::NaiveDate;

/// Amount in minor currency units (e.g. cents)
pub type Amount = i64;

/// A validated ledger transaction
///
/// Immutable once constructed. The sign of the amount decides how it is
/// totalled: positive amounts are income, zero and negative amounts are
/// expenditure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    date: NaiveDate,
    amount: Amount,
    content: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(date: NaiveDate, amount: Amount, content: impl Into<String>) -> Self {
        Transaction {
            date,
            amount,
            content: content.into(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether this transaction counts towards income (amount > 0)
    pub fn is_income(&self) -> bool {
        self.amount > 0
    }
}

/// Input transaction record as read from the CSV file
///
/// Holds the first three fields of a data row, already trimmed, before
/// any type validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransactionRecord {
    pub date: String,
    pub amount: String,
    pub content: String,
}
