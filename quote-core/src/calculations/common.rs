//! Common utility functions for quote calculations.
//!
//! This module provides shared functionality used across the quote
//! calculations, including rounding and the coercing parsers that turn raw
//! editor input into safe numeric values.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::warn;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Normalizes raw numeric input: trims whitespace, strips a leading dollar
/// sign and comma thousands separators.
fn normalize_numeric_input(s: &str) -> String {
    s.trim().trim_start_matches('$').replace(',', "")
}

/// Parses a monetary amount typed into the quote editor.
///
/// Empty input is 0. Non-numeric and negative input also coerce to 0 so a
/// half-typed field can never poison a line total; a warning is logged when
/// a non-empty value is discarded.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::coerce_money;
///
/// assert_eq!(coerce_money("1,234.50"), dec!(1234.50));
/// assert_eq!(coerce_money("$750"), dec!(750));
/// assert_eq!(coerce_money(""), dec!(0));
/// assert_eq!(coerce_money("abc"), dec!(0));
/// assert_eq!(coerce_money("-20"), dec!(0));
/// ```
pub fn coerce_money(raw: &str) -> Decimal {
    let normalized = normalize_numeric_input(raw);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    match normalized.parse::<Decimal>() {
        Ok(value) if value.is_sign_negative() => {
            warn!(input = %raw, "negative amount coerced to zero");
            Decimal::ZERO
        }
        Ok(value) => value,
        Err(error) => {
            warn!(input = %raw, "invalid amount coerced to zero: {}", error);
            Decimal::ZERO
        }
    }
}

/// Parses a quantity typed into the quote editor.
///
/// Same coercion rules as [`coerce_money`]; fractional input keeps only the
/// whole units (`"2.7"` parses as 2).
///
/// # Examples
///
/// ```
/// use quote_core::calculations::common::coerce_quantity;
///
/// assert_eq!(coerce_quantity("4"), 4);
/// assert_eq!(coerce_quantity("2.7"), 2);
/// assert_eq!(coerce_quantity("-3"), 0);
/// assert_eq!(coerce_quantity("many"), 0);
/// ```
pub fn coerce_quantity(raw: &str) -> u32 {
    coerce_money(raw).trunc().to_u32().unwrap_or(0)
}
