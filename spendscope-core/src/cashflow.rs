//! Monthly income vs. spend reducer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Transaction;

/// One month of the income/spend chart. Both sides are unrounded sums;
/// display formatting is the presentation layer's job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyFlow {
    pub month: String,
    pub income: f64,
    pub spend: f64,
}

/// Sum income (amount > 0) and spend (|amount| for amount <= 0) per month.
///
/// Records without a date are silently skipped. Output is sorted ascending
/// by the `YYYY-MM` key, which is also chronological order.
pub fn monthly_cash_flow(txns: &[Transaction]) -> Vec<MonthlyFlow> {
    let mut months: BTreeMap<String, (f64, f64)> = BTreeMap::new();

    for txn in txns {
        let Some(key) = txn.month_key() else {
            continue;
        };
        let entry = months.entry(key).or_insert((0.0, 0.0));
        if txn.amount > 0.0 {
            entry.0 += txn.amount;
        } else {
            entry.1 += -txn.amount;
        }
    }

    months
        .into_iter()
        .map(|(month, (income, spend))| MonthlyFlow {
            month,
            income,
            spend,
        })
        .collect()
}
