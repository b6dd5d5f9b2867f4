//! Priority-ordered keyword rules mapping transactions to card buckets.
//!
//! No scoring or ML — an ordered scan where the first matching rule wins
//! covers a personal statement well, and stays trivially auditable.

use crate::Transaction;

/// Catch-all bucket for records no rule claims. Always rendered last.
pub const OTHER_BUCKET: &str = "Other";

/// One bucket and the keywords that claim a transaction for it.
///
/// A rule matches when the record's category OR merchant contains any
/// keyword as a case-insensitive substring.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketRule {
    pub bucket: String,
    pub keywords: Vec<String>,
}

impl BucketRule {
    pub fn new(bucket: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            bucket: bucket.into(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    fn matches(&self, category_lower: &str, merchant_lower: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| category_lower.contains(k.as_str()) || merchant_lower.contains(k.as_str()))
    }
}

/// Ordered rule table. Declaration order is evaluation order AND display
/// order; there is no fall-through past the first match.
///
/// Passed explicitly into the reducers so alternative tables can be tested
/// side by side without touching shared state.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    rules: Vec<BucketRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<BucketRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[BucketRule] {
        &self.rules
    }

    /// Index of the first rule matching this record, or `None` when it
    /// falls to [`OTHER_BUCKET`].
    pub fn match_index(&self, txn: &Transaction) -> Option<usize> {
        let category = txn.category.to_lowercase();
        let merchant = txn.merchant.to_lowercase();
        self.rules
            .iter()
            .position(|rule| rule.matches(&category, &merchant))
    }

    /// Bucket name this record lands in.
    pub fn bucket_for(&self, txn: &Transaction) -> &str {
        match self.match_index(txn) {
            Some(i) => &self.rules[i].bucket,
            None => OTHER_BUCKET,
        }
    }

    /// The default card map used by the dashboard. Edit here to re-tune
    /// classification; changing buckets is a redeploy, not a runtime input.
    pub fn card_map() -> Self {
        Self::new(vec![
            BucketRule::new(
                "Dining & Groceries",
                &[
                    "restaurant", "grocery", "groceries", "doordash", "uber eats", "grubhub",
                    "cafe", "coffee", "dining", "bakery", "heb", "kroger", "trader joe",
                ],
            ),
            BucketRule::new(
                "Travel & Transit",
                &[
                    "airline", "airways", "hotel", "airbnb", "uber", "lyft", "transit",
                    "parking", "toll", "travel", "amtrak", "rental car",
                ],
            ),
            BucketRule::new(
                "Connectivity & Utilities",
                &[
                    "verizon", "t-mobile", "at&t", "comcast", "xfinity", "spectrum",
                    "internet", "wireless", "utilities", "electric", "water", "energy",
                ],
            ),
            BucketRule::new(
                "Subscriptions & Streaming",
                &[
                    "netflix", "spotify", "hulu", "youtube", "apple.com/bill", "icloud",
                    "subscription", "streaming", "patreon", "audible",
                ],
            ),
            BucketRule::new(
                "Fuel & Auto",
                &[
                    "gas", "fuel", "shell", "chevron", "exxon", "valero", "autozone",
                    "car wash", "oil change", "automotive",
                ],
            ),
            BucketRule::new(
                "Shopping",
                &[
                    "amazon", "target", "walmart", "costco", "best buy", "shopping",
                    "department", "retail", "clothing",
                ],
            ),
        ])
    }
}
