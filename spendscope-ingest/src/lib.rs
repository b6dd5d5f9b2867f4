//! spendscope-ingest: the record validator. Turns uploaded CSV exports of
//! bank transactions into validated [`spendscope_core::Transaction`]s.

pub mod csv_export;

pub use csv_export::{parse_transactions, parse_transactions_csv};
