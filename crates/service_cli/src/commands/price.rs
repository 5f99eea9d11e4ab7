//! Price command implementation
//!
//! Prices a single European option from command-line values.

use std::io::Write;

use pricer_models::instruments::{OptionType, PricingInput};
use pricer_models::lattice::evaluate;
use tracing::{debug, info, warn};

use super::write_price_line;
use crate::{CliError, Result};

/// Contract values as given on the command line
#[derive(Debug, Clone)]
pub struct PriceArgs {
    pub spot: f64,
    pub strike: f64,
    pub expiry: f64,
    pub rate: f64,
    pub volatility: f64,
    pub option_type: String,
}

/// Run the price command
pub fn run<W: Write>(args: &PriceArgs, format: &str, out: &mut W) -> Result<()> {
    info!("Starting pricing...");
    info!("  Option type: {}", args.option_type);
    info!("  Output format: {}", format);

    // Reject an unknown format before doing any work
    if !matches!(format, "table" | "json") {
        return Err(CliError::InvalidArgument(format!(
            "Unknown format: {}. Supported: table, json",
            format
        )));
    }

    let option_type: OptionType = args.option_type.parse()?;
    let input = PricingInput::new(
        args.spot,
        args.strike,
        args.expiry,
        args.rate,
        args.volatility,
        option_type,
    )?;

    let valuation = evaluate(&input).inspect_err(|err| {
        warn!(error = %err, "Pricing failed");
    })?;
    debug!(
        up = valuation.up,
        down = valuation.down,
        probability = valuation.probability,
        value = valuation.value,
        "Tree evaluated"
    );

    match format {
        "json" => {
            serde_json::to_writer_pretty(&mut *out, &valuation)?;
            writeln!(out)?;
        }
        _ => write_price_line(out, option_type, valuation.price)?,
    }

    info!("Pricing complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::PricingError;

    fn args(option_type: &str) -> PriceArgs {
        PriceArgs {
            spot: 100.0,
            strike: 100.0,
            expiry: 1.0,
            rate: 0.05,
            volatility: 0.2,
            option_type: option_type.to_string(),
        }
    }

    fn run_to_string(args: &PriceArgs, format: &str) -> Result<String> {
        let mut out = Vec::new();
        run(args, format, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_table_output() {
        assert_eq!(
            run_to_string(&args("call"), "table").unwrap(),
            "European Call Price (1-step): $12.16\n"
        );
        assert_eq!(
            run_to_string(&args("PUT"), "table").unwrap(),
            "European Put Price (1-step): $7.29\n"
        );
    }

    #[test]
    fn test_json_output() {
        let output = run_to_string(&args("call"), "json").unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["price"], 12.16);
        assert_eq!(json["input"]["spot"], 100.0);
        assert_eq!(json["down_payoff"], 0.0);
    }

    #[test]
    fn test_unknown_format() {
        assert!(matches!(
            run_to_string(&args("call"), "csv"),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_unknown_option_type() {
        assert!(matches!(
            run_to_string(&args("straddle"), "table"),
            Err(CliError::Pricing(PricingError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_degenerate_model() {
        let mut degenerate = args("put");
        degenerate.volatility = 1e-17;
        assert!(matches!(
            run_to_string(&degenerate, "table"),
            Err(CliError::Pricing(PricingError::DegenerateModel { .. }))
        ));
    }

    #[test]
    fn test_negative_strike() {
        let mut bad = args("call");
        bad.strike = -100.0;
        assert!(matches!(
            run_to_string(&bad, "table"),
            Err(CliError::Pricing(PricingError::InvalidArgument(_)))
        ));
    }
}
