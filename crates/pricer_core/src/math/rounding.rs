//! Decimal rounding of reported prices.
//!
//! Prices are quoted to a fixed number of decimals. Rounding is decided on the
//! exact binary value of the input, so a literal such as `2.675` (stored as
//! `2.67499999999999982236431605997495353221893310546875`) rounds down to
//! `2.67`. The decision is taken on the formatter's exact decimal expansion,
//! never on `value * 10^n`.

/// Number of decimals used for quoted option prices.
pub const PRICE_DECIMALS: usize = 2;

/// Rounds `value` to `decimals` decimal places.
///
/// Non-finite values are returned unchanged.
///
/// # Examples
/// ```
/// use pricer_core::math::round_to_decimals;
///
/// assert_eq!(round_to_decimals(7.285227414695337, 2), 7.29);
/// assert_eq!(round_to_decimals(2.675, 2), 2.67);
/// assert_eq!(round_to_decimals(-1.234, 1), -1.2);
/// ```
pub fn round_to_decimals(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // The formatter always yields a parseable literal for finite input
    format!("{:.*}", decimals, value)
        .parse::<f64>()
        .unwrap_or(value)
}

/// Rounds a price to [`PRICE_DECIMALS`] decimal places.
#[inline]
pub fn round_to_cents(value: f64) -> f64 {
    round_to_decimals(value, PRICE_DECIMALS)
}
