//! spendscope-core: the transaction-classification and aggregation engine
//! behind the dashboard.
//!
//! Everything here is a pure function over an immutable `&[Transaction]`:
//! five independent reducers producing chart-ready datasets, plus the
//! debt-payoff simulator. No I/O, no shared mutable state, no error
//! conditions — the engine degrades (skips undated records, routes
//! unmatched spend to "Other", caps the payoff loop) instead of failing.

pub mod buckets;
pub mod cashflow;
pub mod money;
pub mod payoff;
pub mod recurring;
pub mod rules;
pub mod spikes;
pub mod transaction;

pub use buckets::{BucketTotal, bucket_totals};
pub use cashflow::{MonthlyFlow, monthly_cash_flow};
pub use money::round_cents;
pub use payoff::{PAYOFF_MONTH_CAP, PayoffInputs, PayoffResult, payoff};
pub use recurring::{HeuristicConfig, RecurringMonth, RecurringReport, recurring_costs};
pub use rules::{BucketRule, OTHER_BUCKET, RuleTable};
pub use spikes::{DayPattern, SpikeMonth, day_pattern, spike_months};
pub use transaction::Transaction;
