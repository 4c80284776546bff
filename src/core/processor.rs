//! Statement processor
//!
//! This module provides the LedgerProcessor that turns a parsed transaction
//! list into the statement for a single period.
//!
//! The processor enforces the statement invariants:
//! - Only transactions dated in the target year and month are kept
//! - Positive amounts are income, zero and negative amounts are expenditure
//! - Output is ordered most recent first, equal dates keeping input order

use crate::core::traits::StatementProcessor;
use crate::report::Reporter;
use crate::types::{Amount, LedgerError, Period, Statement, Transaction};
use tracing::debug;

/// Filters, totals and sorts transactions for one period
pub struct LedgerProcessor<'r> {
    reporter: &'r dyn Reporter,
}

impl<'r> LedgerProcessor<'r> {
    pub fn new(reporter: &'r dyn Reporter) -> Self {
        LedgerProcessor { reporter }
    }
}

impl StatementProcessor for LedgerProcessor<'_> {
    /// Build the statement for `period`
    ///
    /// # Arguments
    ///
    /// * `transactions` - Parsed transactions, in file order
    /// * `period` - Target month as `YYYYMM`
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidPeriod` if `period` is not six digits
    /// with a month between 01 and 12. Nothing else can fail.
    fn process(
        &self,
        transactions: &[Transaction],
        period: &str,
    ) -> Result<Statement, LedgerError> {
        let target: Period = period.parse()?;

        let mut filtered: Vec<Transaction> = transactions
            .iter()
            .filter(|t| target.contains(t.date()))
            .cloned()
            .collect();

        let totals = totals(&filtered);

        if totals.saturated {
            self.reporter.report_process_warning(&format!(
                "totals for period {} exceed the amount range and were capped",
                period
            ));
        }

        if filtered.is_empty() && !transactions.is_empty() {
            self.reporter.report_process_warning(&format!(
                "no transactions found for period {} (checked {} records)",
                period,
                transactions.len()
            ));
        }

        // sort_by is stable: equal dates stay in file order
        filtered.sort_by(|a, b| b.date().cmp(&a.date()));

        debug!(
            period = %target,
            matched = filtered.len(),
            total = transactions.len(),
            "built statement"
        );

        Ok(Statement::new(
            target,
            totals.income,
            totals.expenditure,
            filtered,
        ))
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Totals {
    income: Amount,
    expenditure: Amount,
    /// Set once either sum hit an `i64` bound
    saturated: bool,
}

/// Sum positive amounts into income and the rest into expenditure
///
/// Sums saturate at the `i64` bounds.
fn totals(transactions: &[Transaction]) -> Totals {
    transactions.iter().fold(Totals::default(), |mut acc, t| {
        let sum = if t.is_income() {
            &mut acc.income
        } else {
            &mut acc.expenditure
        };

        match sum.checked_add(t.amount()) {
            Some(value) => *sum = value,
            None => {
                *sum = sum.saturating_add(t.amount());
                acc.saturated = true;
            }
        }

        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Diagnostic, MemoryReporter};
    use chrono::NaiveDate;
    use rstest::rstest;

    fn tx(date: &str, amount: Amount, content: &str) -> Transaction {
        let date = NaiveDate::parse_from_str(date, "%Y/%m/%d").unwrap();
        Transaction::new(date, amount, content)
    }

    fn dates(statement: &Statement) -> Vec<String> {
        statement
            .transactions()
            .iter()
            .map(|t| t.date().format("%Y/%m/%d").to_string())
            .collect()
    }

    #[test]
    fn test_salary_and_groceries_scenario() {
        let reporter = MemoryReporter::new();
        let processor = LedgerProcessor::new(&reporter);
        let transactions = vec![
            tx("2026/01/15", 1000, "Salary"),
            tx("2026/01/20", -200, "Groceries"),
        ];

        let statement = processor.process(&transactions, "202601").unwrap();

        assert_eq!(statement.period_label(), "2026/01");
        assert_eq!(statement.total_income(), 1000);
        assert_eq!(statement.total_expenditure(), -200);
        assert_eq!(dates(&statement), vec!["2026/01/20", "2026/01/15"]);
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_filters_out_other_months_and_years() {
        let reporter = MemoryReporter::new();
        let transactions = vec![
            tx("2025/12/31", 10, "Last year"),
            tx("2026/01/01", 20, "In period"),
            tx("2026/02/01", 30, "Next month"),
            tx("2025/01/15", 40, "Same month, other year"),
        ];

        let statement = LedgerProcessor::new(&reporter)
            .process(&transactions, "202601")
            .unwrap();

        assert_eq!(statement.transactions().len(), 1);
        assert_eq!(statement.transactions()[0].content(), "In period");
        assert!(statement
            .transactions()
            .iter()
            .all(|t| statement.period().contains(t.date())));
    }

    #[test]
    fn test_zero_amount_counts_as_expenditure() {
        let reporter = MemoryReporter::new();
        let transactions = vec![
            tx("2026/03/01", 0, "Free sample"),
            tx("2026/03/02", 500, "Refund"),
            tx("2026/03/03", -125, "Coffee"),
        ];

        let statement = LedgerProcessor::new(&reporter)
            .process(&transactions, "202603")
            .unwrap();

        assert_eq!(statement.total_income(), 500);
        assert_eq!(statement.total_expenditure(), -125);
        let sum: Amount = statement.transactions().iter().map(|t| t.amount()).sum();
        assert_eq!(statement.total_income() + statement.total_expenditure(), sum);
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let reporter = MemoryReporter::new();
        let transactions = vec![
            tx("2026/01/10", 1, "first"),
            tx("2026/01/12", 2, "latest"),
            tx("2026/01/10", 3, "second"),
            tx("2026/01/10", 4, "third"),
        ];

        let statement = LedgerProcessor::new(&reporter)
            .process(&transactions, "202601")
            .unwrap();

        let contents: Vec<&str> = statement.transactions().iter().map(|t| t.content()).collect();
        assert_eq!(contents, vec!["latest", "first", "second", "third"]);
    }

    #[test]
    fn test_output_sorted_descending() {
        let reporter = MemoryReporter::new();
        let transactions = vec![
            tx("2026/05/03", 1, "a"),
            tx("2026/05/28", 1, "b"),
            tx("2026/05/01", 1, "c"),
            tx("2026/05/15", 1, "d"),
        ];

        let statement = LedgerProcessor::new(&reporter)
            .process(&transactions, "202605")
            .unwrap();

        assert!(statement
            .transactions()
            .windows(2)
            .all(|pair| pair[0].date() >= pair[1].date()));
    }

    #[test]
    fn test_no_match_warns_and_returns_empty_statement() {
        let reporter = MemoryReporter::new();
        let transactions = vec![tx("2026/01/15", 1000, "Salary")];

        let statement = LedgerProcessor::new(&reporter)
            .process(&transactions, "202602")
            .unwrap();

        assert_eq!(statement.period_label(), "2026/02");
        assert!(statement.transactions().is_empty());
        assert_eq!(statement.total_income(), 0);
        assert_eq!(statement.total_expenditure(), 0);
        assert_eq!(
            reporter.diagnostics(),
            vec![Diagnostic::ProcessWarning(
                "no transactions found for period 202602 (checked 1 records)".to_string()
            )]
        );
    }

    #[test]
    fn test_empty_input_does_not_warn() {
        let reporter = MemoryReporter::new();
        let statement = LedgerProcessor::new(&reporter).process(&[], "202601").unwrap();

        assert!(statement.transactions().is_empty());
        assert!(reporter.is_empty());
    }

    #[rstest]
    #[case::month_thirteen("202613")]
    #[case::month_zero("202600")]
    #[case::short("2026")]
    #[case::letters("abcdef")]
    #[case::dashed("2026-01")]
    fn test_invalid_period(#[case] period: &str) {
        let reporter = MemoryReporter::new();
        let transactions = vec![tx("2026/01/15", 1000, "Salary")];

        let result = LedgerProcessor::new(&reporter).process(&transactions, period);

        assert_eq!(result, Err(LedgerError::invalid_period(period)));
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_totals_saturate() {
        let transactions = vec![
            tx("2026/01/01", i64::MAX, "a"),
            tx("2026/01/02", 1, "b"),
            tx("2026/01/03", i64::MIN, "c"),
            tx("2026/01/04", -1, "d"),
        ];
        assert_eq!(
            totals(&transactions),
            Totals {
                income: i64::MAX,
                expenditure: i64::MIN,
                saturated: true,
            }
        );
    }

    #[test]
    fn test_totals_in_range_are_not_saturated() {
        let transactions = vec![tx("2026/01/01", i64::MAX, "a"), tx("2026/01/02", -5, "b")];
        assert!(!totals(&transactions).saturated);
    }

    #[test]
    fn test_capped_totals_are_reported() {
        let reporter = MemoryReporter::new();
        let transactions = vec![
            tx("2026/01/01", i64::MAX, "a"),
            tx("2026/01/02", 10, "b"),
        ];

        let statement = LedgerProcessor::new(&reporter)
            .process(&transactions, "202601")
            .unwrap();

        assert_eq!(statement.total_income(), i64::MAX);
        assert_eq!(
            reporter.warnings(),
            vec!["totals for period 202601 exceed the amount range and were capped"]
        );
    }
}
