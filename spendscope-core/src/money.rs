//! Rounding for display-bound totals.

/// Round to two decimals, half away from zero (`f64::round` semantics).
///
/// Sums accumulate in f64 and only pass through here where an output
/// contract calls for cent precision.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
