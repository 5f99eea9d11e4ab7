//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod demo;
pub mod price;

use std::io::Write;

use pricer_models::instruments::OptionType;

/// Writes one report line in the `European <Type> Price (1-step): $<value>` form.
///
/// The price is printed by [`format_price`].
pub(crate) fn write_price_line<W: Write>(
    out: &mut W,
    option_type: OptionType,
    price: f64,
) -> std::io::Result<()> {
    writeln!(
        out,
        "European {} Price (1-step): ${}",
        option_type.label(),
        format_price(price)
    )
}

/// Shortest round-trip form of a price (`12.16`, `7.3`, `0.0`).
///
/// Exponents are written signed and at least two digits wide, so very large
/// prices read `1.0000000000000002e+17`.
pub(crate) fn format_price(price: f64) -> String {
    let text = format!("{:?}", price);
    match text.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) if exp < 0 => format!("{}e-{:02}", mantissa, -exp),
            Ok(exp) => format!("{}e+{:02}", mantissa, exp),
            Err(_) => text,
        },
        None => text,
    }
}
