//! Rupiah display rounding and formatting.
//!
//! Monetary values are `Decimal` and accumulate unrounded; rounding
//! happens exactly once, at display, half-up to the whole rupiah. The
//! two functions here are the only place that policy lives.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round a monetary amount to the nearest whole rupiah, half-up.
pub fn round_rupiah(amount: Decimal) -> i64 {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(i64::MAX)
}

/// Format an amount the way the ledger pages show it: `Rp` prefix and
/// dot thousands separators (id-ID locale), rounded half-up.
pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = round_rupiah(amount);
    let negative = rounded < 0;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("Rp -{grouped}")
    } else {
        format!("Rp {grouped}")
    }
}
