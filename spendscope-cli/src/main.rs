use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use spendscope_core::{
    BucketTotal, DayPattern, HeuristicConfig, MonthlyFlow, PayoffInputs, PayoffResult,
    RecurringReport, RuleTable, SpikeMonth, Transaction, bucket_totals, day_pattern,
    monthly_cash_flow, payoff, recurring_costs, spike_months,
};
use spendscope_ingest::parse_transactions_csv;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spendscope", version, about = "Personal-finance dashboard engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full dashboard payload: all five datasets plus a default payoff run
    Report {
        /// Path to a transaction CSV export
        #[arg(long)]
        csv: PathBuf,
    },

    /// Monthly income vs. spend
    Cashflow {
        #[arg(long)]
        csv: PathBuf,
    },

    /// Spend per card bucket under the default card map
    Buckets {
        #[arg(long)]
        csv: PathBuf,
    },

    /// Recurring-cost heuristic (default config)
    Recurring {
        #[arg(long)]
        csv: PathBuf,
    },

    /// Count of $1000+ debits per month
    Spikes {
        #[arg(long)]
        csv: PathBuf,
    },

    /// Day-of-month histogram of $500+ debits
    Days {
        #[arg(long)]
        csv: PathBuf,
    },

    /// Debt-payoff simulator
    Payoff {
        /// Starting balance
        #[arg(long, default_value_t = PayoffInputs::default().balance)]
        balance: f64,

        /// Annual rate as a percent (20 = 20%/yr)
        #[arg(long, default_value_t = PayoffInputs::default().apr_percent)]
        apr: f64,

        /// Minimum monthly payment
        #[arg(long, default_value_t = PayoffInputs::default().min_payment)]
        min_payment: f64,

        /// Extra monthly payment on top of the minimum
        #[arg(long, default_value_t = PayoffInputs::default().extra_payment)]
        extra_payment: f64,
    },
}

/// The JSON document a dashboard renders directly.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardReport {
    monthly_cash_flow: Vec<MonthlyFlow>,
    bucket_totals: Vec<BucketTotal>,
    recurring_costs: RecurringReport,
    spike_months: Vec<SpikeMonth>,
    day_pattern: Vec<DayPattern>,
    payoff: PayoffResult,
}

fn build_report(txns: &[Transaction]) -> DashboardReport {
    DashboardReport {
        monthly_cash_flow: monthly_cash_flow(txns),
        bucket_totals: bucket_totals(txns, &RuleTable::card_map()),
        recurring_costs: recurring_costs(txns, &HeuristicConfig::default()),
        spike_months: spike_months(txns),
        day_pattern: day_pattern(txns),
        payoff: payoff(&PayoffInputs::default()),
    }
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Report { csv } => {
            let txns = parse_transactions_csv(csv)?;
            print_json(&build_report(&txns))?;
        }

        Command::Cashflow { csv } => {
            let txns = parse_transactions_csv(csv)?;
            print_json(&monthly_cash_flow(&txns))?;
        }

        Command::Buckets { csv } => {
            let txns = parse_transactions_csv(csv)?;
            print_json(&bucket_totals(&txns, &RuleTable::card_map()))?;
        }

        Command::Recurring { csv } => {
            let txns = parse_transactions_csv(csv)?;
            print_json(&recurring_costs(&txns, &HeuristicConfig::default()))?;
        }

        Command::Spikes { csv } => {
            let txns = parse_transactions_csv(csv)?;
            print_json(&spike_months(&txns))?;
        }

        Command::Days { csv } => {
            let txns = parse_transactions_csv(csv)?;
            print_json(&day_pattern(&txns))?;
        }

        Command::Payoff {
            balance,
            apr,
            min_payment,
            extra_payment,
        } => {
            let inputs = PayoffInputs {
                balance,
                apr_percent: apr,
                min_payment,
                extra_payment,
            };
            print_json(&payoff(&inputs))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(y: i32, m: u32, d: u32, merchant: &str, category: &str, amount: f64) -> Transaction {
        Transaction::new(NaiveDate::from_ymd_opt(y, m, d), merchant, category, amount, "Checking")
    }

    #[test]
    fn test_report_serializes_all_six_sections() {
        let txns = vec![
            txn(2024, 1, 5, "Payroll Inc", "Income", 2500.0),
            txn(2024, 1, 9, "Verizon", "Utilities", -80.0),
            txn(2024, 1, 2, "Landlord LLC", "Rent", -1800.0),
        ];
        let report = build_report(&txns);
        let json = serde_json::to_value(&report).unwrap();

        for key in [
            "monthlyCashFlow",
            "bucketTotals",
            "recurringCosts",
            "spikeMonths",
            "dayPattern",
            "payoff",
        ] {
            assert!(json.get(key).is_some(), "missing section {key}");
        }
        assert_eq!(json["dayPattern"].as_array().unwrap().len(), 31);
        assert_eq!(json["spikeMonths"][0]["month"], "2024-01");
        assert!(json["payoff"]["totalInterest"].as_f64().unwrap() >= 0.0);
    }
}
