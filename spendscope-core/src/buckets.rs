//! Card-bucket spend totals driven by an ordered [`RuleTable`].

use serde::{Deserialize, Serialize};

use crate::money::round_cents;
use crate::rules::{OTHER_BUCKET, RuleTable};
use crate::Transaction;

/// Total spend attributed to one bucket, rounded to cents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BucketTotal {
    pub bucket: String,
    pub total_spend: f64,
}

/// Attribute each record's spend to the first bucket that claims it.
///
/// Positive and zero amounts still classify (they occupy a bucket with a
/// zero contribution); only negative amounts add `|amount|`. Output carries
/// every bucket, zeros included, in declared rule order with
/// [`OTHER_BUCKET`] last.
pub fn bucket_totals(txns: &[Transaction], rules: &RuleTable) -> Vec<BucketTotal> {
    // Last slot is the implicit "Other" bucket.
    let mut totals = vec![0.0_f64; rules.rules().len() + 1];

    for txn in txns {
        let spend = if txn.amount < 0.0 { -txn.amount } else { 0.0 };
        let slot = rules.match_index(txn).unwrap_or(rules.rules().len());
        totals[slot] += spend;
    }

    rules
        .rules()
        .iter()
        .map(|rule| rule.bucket.as_str())
        .chain(std::iter::once(OTHER_BUCKET))
        .zip(totals)
        .map(|(bucket, total)| BucketTotal {
            bucket: bucket.to_string(),
            total_spend: round_cents(total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::BucketRule;
    use chrono::NaiveDate;

    fn txn(merchant: &str, category: &str, amount: f64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, 5),
            merchant,
            category,
            amount,
            "Credit",
        )
    }

    #[test]
    fn test_verizon_lands_fully_in_connectivity() {
        let table = RuleTable::card_map();
        let totals = bucket_totals(&[txn("Verizon", "Utilities", -80.0)], &table);

        for entry in &totals {
            if entry.bucket == "Connectivity & Utilities" {
                assert_eq!(entry.total_spend, 80.0);
            } else {
                assert_eq!(entry.total_spend, 0.0, "{} should be empty", entry.bucket);
            }
        }
    }

    #[test]
    fn test_every_bucket_present_and_other_last() {
        let table = RuleTable::card_map();
        let totals = bucket_totals(&[], &table);
        assert_eq!(totals.len(), table.rules().len() + 1);
        assert_eq!(totals.last().unwrap().bucket, OTHER_BUCKET);
        let names: Vec<&str> = totals.iter().map(|t| t.bucket.as_str()).collect();
        let declared: Vec<&str> = table.rules().iter().map(|r| r.bucket.as_str()).collect();
        assert_eq!(&names[..declared.len()], &declared[..]);
    }

    #[test]
    fn test_positive_amount_contributes_zero_spend() {
        let table = RuleTable::new(vec![BucketRule::new("Refunds", &["amazon"])]);
        let totals = bucket_totals(
            &[txn("AMAZON MKTPL", "", 45.0), txn("AMAZON MKTPL", "", -30.0)],
            &table,
        );
        assert_eq!(totals[0].total_spend, 30.0);
    }

    #[test]
    fn test_unmatched_spend_accumulates_in_other() {
        let table = RuleTable::new(vec![BucketRule::new("Coffee", &["espresso"])]);
        let totals = bucket_totals(
            &[txn("ACME ANVILS", "Misc", -12.34), txn("ACME ANVILS", "Misc", -7.66)],
            &table,
        );
        assert_eq!(totals[1].bucket, OTHER_BUCKET);
        assert_eq!(totals[1].total_spend, 20.0);
    }

    #[test]
    fn test_json_field_names_match_dashboard_contract() {
        let entry = BucketTotal { bucket: "Other".into(), total_spend: 1.5 };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["bucket"], "Other");
        assert_eq!(json["totalSpend"], 1.5);
    }

    #[test]
    fn test_bucket_sum_matches_negative_amount_sum() {
        let table = RuleTable::card_map();
        let txns = vec![
            txn("Verizon", "Utilities", -80.01),
            txn("HEB #12", "Groceries", -55.49),
            txn("Payroll", "Income", 2000.0),
            txn("Mystery Shop", "", -13.37),
        ];
        let totals = bucket_totals(&txns, &table);

        let bucket_sum: f64 = totals.iter().map(|t| t.total_spend).sum();
        let spend_sum: f64 = txns
            .iter()
            .filter(|t| t.amount < 0.0)
            .map(|t| -t.amount)
            .sum();
        // one cent of slack per bucket
        let tolerance = 0.01 * totals.len() as f64;
        assert!((bucket_sum - spend_sum).abs() <= tolerance);
    }
}
