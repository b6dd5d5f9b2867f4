//! Parse a generic transaction CSV export into validated records.
//!
//! Expected header (any order, case-insensitive):
//! `Date,Merchant,Category,Amount,Account` — `Description` is accepted as
//! an alias for `Merchant`. `Category` and `Account` are optional columns.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use regex::Regex;
use spendscope_core::Transaction;
use std::io::Read;
use std::path::Path;

struct ColumnMap {
    date: usize,
    merchant: usize,
    amount: usize,
    category: Option<usize>,
    account: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &csv::StringRecord) -> Result<Self> {
        let mut date = None;
        let mut merchant = None;
        let mut amount = None;
        let mut category = None;
        let mut account = None;

        for (i, name) in header.iter().enumerate() {
            match name.trim().to_lowercase().as_str() {
                "date" => date = Some(i),
                "merchant" | "description" => merchant = Some(i),
                "amount" => amount = Some(i),
                "category" => category = Some(i),
                "account" => account = Some(i),
                _ => {}
            }
        }

        let (Some(date), Some(merchant), Some(amount)) = (date, merchant, amount) else {
            bail!("header must contain date, merchant/description, and amount columns");
        };

        Ok(Self {
            date,
            merchant,
            amount,
            category,
            account,
        })
    }
}

/// Accepted date formats, tried in order. Anything else yields `None` and
/// the record is kept; date-keyed reducers skip it downstream.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .ok()
}

/// Normalize a money cell: strip `$`, thousands separators, and spaces;
/// read `(123.45)` as `-123.45`.
fn parse_amount(raw: &str, strip: &Regex) -> Option<f64> {
    let raw = raw.trim();
    let (raw, negate) = match raw.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        Some(inner) => (inner, true),
        None => (raw, false),
    };
    let cleaned = strip.replace_all(raw, "");
    let value: f64 = cleaned.parse().ok()?;
    Some(if negate { -value } else { value })
}

/// Parse a CSV export from any reader. Rows without a parseable amount are
/// skipped; rows without a parseable date are kept with `date = None`.
pub fn parse_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnMap::from_header(rdr.headers().context("reading CSV header")?)?;
    let strip = Regex::new(r"[$,\s]")?;

    let mut txns = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let Some(amount) = record
            .get(columns.amount)
            .and_then(|a| parse_amount(a, &strip))
        else {
            continue;
        };

        let cell = |i: Option<usize>| {
            i.and_then(|i| record.get(i))
                .map(|s| s.trim().to_string())
                .unwrap_or_default()
        };

        txns.push(Transaction {
            date: record.get(columns.date).and_then(parse_date),
            merchant: cell(Some(columns.merchant)),
            category: cell(columns.category),
            amount,
            account: cell(columns.account),
        });
    }

    Ok(txns)
}

/// Parse a CSV export from disk.
pub fn parse_transactions_csv(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let file = std::fs::File::open(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    parse_transactions(file)
}
