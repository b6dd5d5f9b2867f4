//! Large-transaction pattern reducers: spike counts per month and a dense
//! day-of-month histogram.
//!
//! Both share one exclusion set: account-shuffling categories that produce
//! large amounts without representing real spending.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Transaction;

/// Categories whose large debits are money movement, not spend.
const EXCLUDED_CATEGORIES: [&str; 3] = ["transfer", "loan repayment", "credit card payment"];

/// Spike threshold: debits of $1000 or more.
const SPIKE_THRESHOLD: f64 = -1000.0;

/// Day-pattern threshold: debits of $500 or more.
const DAY_PATTERN_THRESHOLD: f64 = -500.0;

fn is_excluded(category: &str) -> bool {
    let category = category.trim().to_lowercase();
    EXCLUDED_CATEGORIES.contains(&category.as_str())
}

/// Count of qualifying spikes in one month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpikeMonth {
    pub month: String,
    pub count: u32,
}

/// Count of qualifying debits on one calendar day-of-month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPattern {
    pub day: u32,
    pub count: u32,
}

/// Count debits of $1000+ per month, excluding money-movement categories.
///
/// Output is sorted ascending by month key and sparse: months with no
/// qualifying transaction are omitted.
pub fn spike_months(txns: &[Transaction]) -> Vec<SpikeMonth> {
    let mut months: BTreeMap<String, u32> = BTreeMap::new();

    for txn in txns {
        if txn.amount > SPIKE_THRESHOLD || is_excluded(&txn.category) {
            continue;
        }
        let Some(key) = txn.month_key() else {
            continue;
        };
        *months.entry(key).or_insert(0) += 1;
    }

    months
        .into_iter()
        .map(|(month, count)| SpikeMonth { month, count })
        .collect()
}

/// Count debits of $500+ per calendar day-of-month across all months.
///
/// Always returns exactly 31 entries, days 1..=31 in order, zero counts
/// included: the chart is a full-month cyclical histogram and must never
/// be sparse.
pub fn day_pattern(txns: &[Transaction]) -> Vec<DayPattern> {
    use chrono::Datelike;

    let mut counts = [0u32; 31];

    for txn in txns {
        if txn.amount > DAY_PATTERN_THRESHOLD || is_excluded(&txn.category) {
            continue;
        }
        let Some(date) = txn.date else {
            continue;
        };
        counts[date.day() as usize - 1] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| DayPattern {
            day: i as u32 + 1,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(y: i32, m: u32, d: u32, category: &str, amount: f64) -> Transaction {
        Transaction::new(NaiveDate::from_ymd_opt(y, m, d), "merchant", category, amount, "Checking")
    }

    #[test]
    fn test_spikes_count_not_sum() {
        let txns = vec![
            txn(2024, 1, 2, "Rent", -1800.0),
            txn(2024, 1, 15, "Medical", -1000.0),
            txn(2024, 3, 1, "Rent", -1800.0),
        ];
        let spikes = spike_months(&txns);
        assert_eq!(
            spikes,
            vec![
                SpikeMonth { month: "2024-01".into(), count: 2 },
                SpikeMonth { month: "2024-03".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_spike_threshold_and_exclusions() {
        let txns = vec![
            txn(2024, 1, 2, "Rent", -999.99),
            txn(2024, 1, 3, "Transfer", -5000.0),
            txn(2024, 1, 4, "Loan Repayment", -2000.0),
            txn(2024, 1, 5, "CREDIT CARD PAYMENT", -1500.0),
            txn(2024, 1, 6, "Income", 3000.0),
        ];
        assert!(spike_months(&txns).is_empty());
    }

    #[test]
    fn test_exclusion_is_exact_match_only() {
        // "wire transfer" is not in the exclusion set; matching is exact,
        // not substring.
        let txns = vec![txn(2024, 1, 2, "Wire Transfer", -2500.0)];
        assert_eq!(spike_months(&txns).len(), 1);
    }

    #[test]
    fn test_day_pattern_is_always_dense() {
        let histogram = day_pattern(&[]);
        assert_eq!(histogram.len(), 31);
        for (i, entry) in histogram.iter().enumerate() {
            assert_eq!(entry.day, i as u32 + 1);
            assert_eq!(entry.count, 0);
        }
    }

    #[test]
    fn test_day_pattern_folds_months_together() {
        let txns = vec![
            txn(2024, 1, 1, "Rent", -1800.0),
            txn(2024, 2, 1, "Rent", -1800.0),
            txn(2023, 12, 1, "Rent", -1750.0),
            txn(2024, 1, 15, "Medical", -600.0),
            // below the $500 line
            txn(2024, 1, 15, "Groceries", -120.0),
        ];
        let histogram = day_pattern(&txns);
        assert_eq!(histogram[0], DayPattern { day: 1, count: 3 });
        assert_eq!(histogram[14], DayPattern { day: 15, count: 1 });
        let total: u32 = histogram.iter().map(|e| e.count).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_day_31_is_reachable() {
        let txns = vec![txn(2024, 1, 31, "Rent", -1800.0)];
        let histogram = day_pattern(&txns);
        assert_eq!(histogram[30], DayPattern { day: 31, count: 1 });
    }
}
