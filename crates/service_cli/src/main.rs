//! OneStep CLI - One-Step Binomial Option Pricing
//!
//! # Commands
//!
//! - `onestep` / `onestep demo` - Price the demo contract as a call and a put
//! - `onestep price --spot .. --strike .. --expiry .. --rate .. --volatility .. --option-type call`
//!   - Price a single contract (`--format table|json`)
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires configuration and
//! logging around the pricer_models lattice. Results go to stdout, logs to
//! stderr.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::price::PriceArgs;
use config::CliArgs;

/// One-step binomial European option pricer
#[derive(Parser)]
#[command(name = "onestep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "ONESTEP_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the demo contract as a call and a put (default)
    Demo,

    /// Price a single European option
    Price {
        /// Spot price of the underlying
        #[arg(long, allow_negative_numbers = true)]
        spot: f64,

        /// Strike price
        #[arg(short = 'k', long, allow_negative_numbers = true)]
        strike: f64,

        /// Time to expiry in years
        #[arg(short = 't', long, alias = "time-to-expiry", allow_negative_numbers = true)]
        expiry: f64,

        /// Continuously compounded risk-free rate
        #[arg(short, long, alias = "risk-free-rate", allow_negative_numbers = true)]
        rate: f64,

        /// Annualised volatility
        #[arg(short = 's', long, alias = "sigma", allow_negative_numbers = true)]
        volatility: f64,

        /// Option type (call, put)
        #[arg(short = 'o', long, default_value = "call")]
        option_type: String,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            verbose: self.verbose,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::build_config(&cli.config_args())?;

    init_tracing(config.log_level.as_filter_str());

    info!("OneStep pricer v{}", env!("CARGO_PKG_VERSION"));
    debug!(log_level = %config.log_level, "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => commands::demo::run(&config.demo, &mut out)?,
        Commands::Price {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
            format,
        } => {
            let args = PriceArgs {
                spot,
                strike,
                expiry,
                rate,
                volatility,
                option_type,
            };
            commands::price::run(&args, &format, &mut out)?
        }
    }

    out.flush()?;
    Ok(())
}
