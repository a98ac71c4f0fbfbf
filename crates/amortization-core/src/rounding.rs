//! Presentation rounding for monetary values.
//!
//! The engine accumulates at full `Decimal` precision; these helpers are only
//! applied to values on their way out to a reader.

use rust_decimal::RoundingStrategy;

use crate::types::Money;

/// Decimal places shown for currency amounts.
pub const CURRENCY_DP: u32 = 2;

/// Round to cents, half-up (midpoint away from zero). The result always
/// carries two decimal places, so `100` becomes `100.00`.
pub fn round_currency(value: Money) -> Money {
    let mut rounded =
        value.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.rescale(CURRENCY_DP);
    rounded
}

/// Render an amount with thousands separators and exactly two decimals,
/// e.g. `1234567.891` becomes `1,234,567.89`.
pub fn format_currency(value: Money) -> String {
    let mut rounded = round_currency(value);
    let negative = rounded.is_sign_negative();
    rounded.set_sign_positive(true);

    let text = rounded.to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped}.{frac_part}")
    } else {
        format!("{grouped}.{frac_part}")
    }
}
