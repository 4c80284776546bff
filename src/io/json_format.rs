//! JSON output for statements
//!
//! Maps a [`Statement`] onto display DTOs (dates as `YYYY/MM/DD`, amounts
//! as decimal strings) and serializes them with two-space indentation.
//! Field order follows the struct declaration order.

use crate::core::StatementFormatter;
use crate::io::csv_format::DATE_FORMAT;
use crate::report::Reporter;
use crate::types::{Amount, FormatError, LedgerError, Statement, Transaction};
use serde::Serialize;

/// Output shape of a single transaction
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct JsonTransaction<'a> {
    pub date: String,
    /// Rendered as a string, sign preserved
    pub amount: String,
    pub content: &'a str,
}

impl<'a> From<&'a Transaction> for JsonTransaction<'a> {
    fn from(transaction: &'a Transaction) -> Self {
        JsonTransaction {
            date: transaction.date().format(DATE_FORMAT).to_string(),
            amount: transaction.amount().to_string(),
            content: transaction.content(),
        }
    }
}

/// Output shape of the statement document
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct JsonStatement<'a> {
    pub period: String,
    pub total_income: Amount,
    pub total_expenditure: Amount,
    pub transactions: Vec<JsonTransaction<'a>>,
}

impl<'a> From<&'a Statement> for JsonStatement<'a> {
    fn from(statement: &'a Statement) -> Self {
        JsonStatement {
            period: statement.period_label(),
            total_income: statement.total_income(),
            total_expenditure: statement.total_expenditure(),
            transactions: statement
                .transactions()
                .iter()
                .map(JsonTransaction::from)
                .collect(),
        }
    }
}

/// Pretty JSON formatter reporting through an injected [`Reporter`]
pub struct JsonFormatter<'r> {
    reporter: &'r dyn Reporter,
}

impl<'r> JsonFormatter<'r> {
    pub fn new(reporter: &'r dyn Reporter) -> Self {
        JsonFormatter { reporter }
    }

    fn format_error(&self, error: serde_json::Error) -> LedgerError {
        let error = FormatError::from(error);
        self.reporter.report_format_error(&error);
        error.into()
    }
}

impl StatementFormatter for JsonFormatter<'_> {
    fn format(&self, statement: &Statement) -> Result<Vec<u8>, LedgerError> {
        let output = JsonStatement::from(statement);

        // Strings and integers only, so this does not fail in practice.
        serde_json::to_vec_pretty(&output).map_err(|e| self.format_error(e))
    }
}
