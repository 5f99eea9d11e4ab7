//! CLI configuration management
//!
//! Loads the optional TOML file and merges command-line overrides.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (`--log-level`, `--verbose`)
//! 2. Environment (`ONESTEP_LOG_LEVEL`, read by clap into the same flag)
//! 3. Config file
//! 4. Default values

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use pricer_core::types::PricingError;
use pricer_models::instruments::{OptionType, PricingInput};
use serde::Deserialize;
use thiserror::Error;

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "onestep.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted in the config file and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Tracing filter directive for this level
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LogLevel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Contract priced by the `demo` command.
///
/// Validation is deferred to [`PricingInput::new`] so a bad value in the
/// file surfaces as the same `InvalidArgument` the pricer would raise.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoContract {
    pub spot: f64,
    pub strike: f64,
    pub time_to_expiry: f64,
    pub risk_free_rate: f64,
    pub volatility: f64,
}

impl Default for DemoContract {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            time_to_expiry: 1.0,
            risk_free_rate: 0.05,
            volatility: 0.2,
        }
    }
}

impl DemoContract {
    /// Pricing inputs for this contract and option type
    pub fn to_input(&self, option_type: OptionType) -> Result<PricingInput, PricingError> {
        PricingInput::new(
            self.spot,
            self.strike,
            self.time_to_expiry,
            self.risk_free_rate,
            self.volatility,
            option_type,
        )
    }
}

/// Resolved CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Demo contract
    pub demo: DemoContract,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        Ok(())
    }
}

/// Configuration-relevant CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Explicit config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Verbose flag (forces debug logging)
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// An explicit `--config` file must exist; the default file is optional.
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.merge_with_cli(cli)?;

    Ok(config)
}
