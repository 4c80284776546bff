//! Statement and period types
//!
//! A [`Period`] is the calendar month a statement covers; a [`Statement`]
//! is the filtered, totalled and sorted result for that month.

use super::error::LedgerError;
use super::transaction::{Amount, Transaction};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A calendar year-month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period, returning `None` when `month` is outside 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Period { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Whether `date` falls in this year and month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl FromStr for Period {
    type Err = LedgerError;

    /// Parse a `YYYYMM` period: exactly six ASCII digits with month 01-12
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LedgerError::invalid_period(s));
        }

        let year = s[..4]
            .parse::<i32>()
            .map_err(|_| LedgerError::invalid_period(s))?;
        let month = s[4..]
            .parse::<u32>()
            .map_err(|_| LedgerError::invalid_period(s))?;

        Period::new(year, month).ok_or_else(|| LedgerError::invalid_period(s))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}", self.year, self.month)
    }
}

/// Aggregated statement for a single period
///
/// Built only by the processor, which guarantees that every transaction
/// lies in `period`, that the list is sorted by date descending, and that
/// the totals are the sums of the positive and non-positive amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    period: Period,
    total_income: Amount,
    total_expenditure: Amount,
    transactions: Vec<Transaction>,
}

impl Statement {
    pub(crate) fn new(
        period: Period,
        total_income: Amount,
        total_expenditure: Amount,
        transactions: Vec<Transaction>,
    ) -> Self {
        Statement {
            period,
            total_income,
            total_expenditure,
            transactions,
        }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Period rendered as `YYYY/MM`
    pub fn period_label(&self) -> String {
        self.period.to_string()
    }

    pub fn total_income(&self) -> Amount {
        self.total_income
    }

    /// Sum of the non-positive amounts, so usually `<= 0`
    pub fn total_expenditure(&self) -> Amount {
        self.total_expenditure
    }

    /// Transactions ordered most recent first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}
