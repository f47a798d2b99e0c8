//! Display formatting for monetary values.
//!
//! Prices and totals are kept as exact `Decimal` sums internally; rounding
//! to two digits happens here, at presentation time only.

use rust_decimal::Decimal;

/// Formats a value the way the shop shows it: `R$` plus two decimals.
pub fn format_brl(value: Decimal) -> String {
    format!("R${:.2}", value.round_dp(2))
}
