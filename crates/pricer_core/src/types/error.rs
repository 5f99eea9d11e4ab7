//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every failure is detected before a price is produced and propagates
/// straight to the caller. There is no partial result.
///
/// # Variants
/// - `InvalidArgument`: Unknown option type, or a non-positive / non-finite input
/// - `DegenerateModel`: Up and down factors coincide, so the tree cannot be solved
/// - `ArbitrageViolation`: Implied risk-neutral probability lies outside `[0, 1]`
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidArgument("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid argument: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid option type or numeric input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Up and down factors are equal.
    #[error("Degenerate model: up factor {up} equals down factor {down}")]
    DegenerateModel {
        /// Up-move multiplier
        up: f64,
        /// Down-move multiplier
        down: f64,
    },

    /// Risk-neutral probability outside `[0, 1]`.
    #[error("No-arbitrage condition violated: p = {probability} is outside [0, 1]")]
    ArbitrageViolation {
        /// The implied risk-neutral probability
        probability: f64,
    },
}

impl PricingError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Returns whether this error was caused by the caller's inputs
    /// rather than by the model.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PricingError::InvalidArgument(_))
    }
}
