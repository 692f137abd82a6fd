//! Money calculation utilities using rust_decimal for precision
//!
//! Wire models carry `f64`; sums and comparisons are done in `Decimal` and
//! rounded to cents.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal, rounded to cents. Non-finite input maps to zero.
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value)
        .unwrap_or_default()
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64 for serialization
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Sum a sequence of prices
pub fn sum<I: IntoIterator<Item = f64>>(prices: I) -> Decimal {
    prices.into_iter().map(to_decimal).sum()
}

/// Whether two amounts differ by less than [`MONEY_TOLERANCE`]
pub fn approx_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < MONEY_TOLERANCE
}
