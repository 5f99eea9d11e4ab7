//! Demo command implementation
//!
//! Prices the configured demo contract (by default spot=100, strike=100,
//! T=1, r=0.05, sigma=0.2) as a call and as a put.
//!
//! # Expected Output
//!
//! ```text
//! European Call Price (1-step): $12.16
//! European Put Price (1-step): $7.29
//! ```

use std::io::Write;

use pricer_models::instruments::OptionType;
use pricer_models::lattice::price;
use tracing::{debug, info, warn};

use super::write_price_line;
use crate::config::DemoContract;
use crate::Result;

/// Run the demo command, writing one line per option type to `out`.
///
/// Both prices are computed before anything is written, so a failure
/// leaves `out` untouched.
pub fn run<W: Write>(contract: &DemoContract, out: &mut W) -> Result<()> {
    info!("Pricing demo contract");
    debug!(
        spot = contract.spot,
        strike = contract.strike,
        time_to_expiry = contract.time_to_expiry,
        risk_free_rate = contract.risk_free_rate,
        volatility = contract.volatility,
        "Demo contract"
    );

    let mut prices = Vec::with_capacity(OptionType::ALL.len());
    for option_type in OptionType::ALL {
        let input = contract.to_input(option_type)?;
        let value = price(&input).inspect_err(|err| {
            warn!(option_type = %option_type, error = %err, "Demo pricing failed");
        })?;
        prices.push((option_type, value));
    }

    for (option_type, value) in prices {
        write_price_line(out, option_type, value)?;
    }

    info!("Demo complete");
    Ok(())
}
