//! The validated transaction record every aggregation consumes.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One row of an uploaded statement after validation.
///
/// Reducers borrow slices of these and never mutate them; a session holds
/// one `Vec<Transaction>` that is replaced wholesale on a new upload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// `None` means the upstream row had no parseable date. Such records are
    /// skipped by date-keyed reducers rather than rejected.
    pub date: Option<NaiveDate>,
    /// Merchant / payee free text, matched case-insensitively
    pub merchant: String,
    /// Bank-assigned category label, matched case-insensitively
    pub category: String,
    /// Positive = income/credit, negative = spend/debit
    pub amount: f64,
    /// Source account label (carried through, unused by current aggregations)
    pub account: String,
}

impl Transaction {
    pub fn new(
        date: Option<NaiveDate>,
        merchant: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        account: impl Into<String>,
    ) -> Self {
        Self {
            date,
            merchant: merchant.into(),
            category: category.into(),
            amount,
            account: account.into(),
        }
    }

    /// Returns true if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// Returns true if this is spend (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }

    /// Zero-padded `YYYY-MM` grouping key, or `None` for undated records.
    pub fn month_key(&self) -> Option<String> {
        self.date
            .map(|d| format!("{:04}-{:02}", d.year(), d.month()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key_is_zero_padded() {
        let txn = Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, 5),
            "Verizon",
            "Utilities",
            -80.0,
            "Checking",
        );
        assert_eq!(txn.month_key(), Some("2024-03".to_string()));
    }

    #[test]
    fn test_undated_record_has_no_month_key() {
        let txn = Transaction::new(None, "Shell", "Gas", -40.0, "Credit");
        assert_eq!(txn.month_key(), None);
    }

    #[test]
    fn test_income_and_expense_predicates() {
        let income = Transaction::new(None, "Payroll", "Income", 2500.0, "Checking");
        let spend = Transaction::new(None, "HEB", "Groceries", -62.15, "Credit");
        assert!(income.is_income() && !income.is_expense());
        assert!(spend.is_expense() && !spend.is_income());
        assert_eq!(spend.abs_amount(), 62.15);
    }
}
