//! Recurring-cost heuristic: surface a habitual expense hiding inside a
//! broader category by thresholding amount and denylisting merchants whose
//! large charges mean something else.
//!
//! The default config estimates tobacco spend from gas-station statements:
//! category contains "gas", charge of $100 or more, with fuel-only brands
//! denylisted since a $100+ charge there is almost certainly fuel.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::money::round_cents;
use crate::Transaction;

/// Static configuration for the heuristic. Tuning it is a redeploy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeuristicConfig {
    /// Case-insensitive substring the category label must contain
    pub category_contains: String,
    /// Survivors satisfy `amount <= max_amount` (a negative threshold)
    pub max_amount: f64,
    /// Merchant substrings that disqualify a record, lowercased both sides
    pub merchant_denylist: Vec<String>,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            category_contains: "gas".to_string(),
            max_amount: -100.0,
            merchant_denylist: vec![
                "shell".to_string(),
                "chevron".to_string(),
                "exxon".to_string(),
                "valero".to_string(),
                "marathon".to_string(),
                "speedway".to_string(),
            ],
        }
    }
}

/// One month of surviving spend, rounded to cents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringMonth {
    pub month: String,
    pub total: f64,
}

/// Heuristic output: monthly series, grand total, and how many
/// transactions survived the filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringReport {
    pub series: Vec<RecurringMonth>,
    pub total: f64,
    pub count: usize,
}

/// Run the heuristic over the full transaction list.
///
/// A record survives when its category contains the configured substring,
/// its amount is at or below the threshold, and its merchant matches no
/// denylist entry. Undated records are excluded (the series is month-keyed).
/// The grand total re-rounds the sum of the already-rounded monthly totals.
pub fn recurring_costs(txns: &[Transaction], config: &HeuristicConfig) -> RecurringReport {
    let needle = config.category_contains.to_lowercase();
    let denylist: Vec<String> = config
        .merchant_denylist
        .iter()
        .map(|m| m.to_lowercase())
        .collect();

    let mut months: BTreeMap<String, f64> = BTreeMap::new();
    let mut count = 0usize;

    for txn in txns {
        if txn.amount > config.max_amount {
            continue;
        }
        if !txn.category.to_lowercase().contains(&needle) {
            continue;
        }
        let merchant = txn.merchant.to_lowercase();
        if denylist.iter().any(|d| merchant.contains(d.as_str())) {
            continue;
        }
        let Some(key) = txn.month_key() else {
            continue;
        };
        *months.entry(key).or_insert(0.0) += -txn.amount;
        count += 1;
    }

    let series: Vec<RecurringMonth> = months
        .into_iter()
        .map(|(month, total)| RecurringMonth {
            month,
            total: round_cents(total),
        })
        .collect();

    let total = round_cents(series.iter().map(|m| m.total).sum());

    RecurringReport {
        series,
        total,
        count,
    }
}
