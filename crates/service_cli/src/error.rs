//! Error types for the CLI.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Pricing failed (invalid input, degenerate model, arbitrage)
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the CLI
pub type Result<T> = std::result::Result<T, CliError>;
