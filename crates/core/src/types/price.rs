//! Monetary amounts.
//!
//! Amounts travel as IEEE doubles, exactly as the content store hands them
//! out. Rounding to two digits happens at display time only; sums carry the
//! usual floating-point error in the least significant bits.

/// Format an amount in US dollars for display, e.g. `$19.99`.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Whether an amount is usable in arithmetic: finite and not negative.
#[must_use]
pub fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount >= 0.0
}
