//! Debt-payoff amortization simulator.
//!
//! Pure function of four scalars, re-run in full on every input change.
//! No schedule is materialized; the dashboard only needs the endpoint.

use serde::{Deserialize, Serialize};

use crate::money::round_cents;

/// Hard iteration cap (20 years). Guarantees termination when the payment
/// never covers accruing interest; the result then reports the cap itself.
pub const PAYOFF_MONTH_CAP: u32 = 240;

/// The four user-editable simulator inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayoffInputs {
    /// Starting balance, >= 0
    pub balance: f64,
    /// Annual rate as a percent: 20 means 20%/yr
    pub apr_percent: f64,
    /// Minimum monthly payment, >= 0
    pub min_payment: f64,
    /// Extra monthly payment on top of the minimum, >= 0
    pub extra_payment: f64,
}

impl Default for PayoffInputs {
    fn default() -> Self {
        Self {
            balance: 5000.0,
            apr_percent: 22.0,
            min_payment: 150.0,
            extra_payment: 0.0,
        }
    }
}

/// Simulator output: months to payoff and total interest paid (cents).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayoffResult {
    pub months: u32,
    pub total_interest: f64,
}

/// Iterate month by month until the balance clears or the cap is hit.
///
/// Each month accrues `balance * r` interest (monthly periodic rate), then
/// pays `min(balance + interest, min_payment + extra_payment)` so the final
/// payment never overshoots into a negative balance.
pub fn payoff(inputs: &PayoffInputs) -> PayoffResult {
    let rate = (inputs.apr_percent / 100.0) / 12.0;
    let monthly_payment = inputs.min_payment + inputs.extra_payment;

    let mut balance = inputs.balance;
    let mut total_interest = 0.0;
    let mut months = 0u32;

    while balance > 0.0 && months < PAYOFF_MONTH_CAP {
        let interest = balance * rate;
        total_interest += interest;
        let payment = (balance + interest).min(monthly_payment);
        balance += interest - payment;
        months += 1;
    }

    PayoffResult {
        months,
        total_interest: round_cents(total_interest),
    }
}
