//! Trait for priceable contracts.

use crate::types::PricingError;

/// Trait for entities that can be priced.
///
/// # Invariants
/// - A returned price is non-negative (no arbitrage)
/// - `price` is pure: deterministic, no side effects
///
/// # Examples
/// ```
/// use pricer_core::traits::Priceable;
/// use pricer_core::types::PricingError;
///
/// struct Forward {
///     spot: f64,
///     discounted_strike: f64,
/// }
///
/// impl Priceable for Forward {
///     fn price(&self) -> Result<f64, PricingError> {
///         if self.spot <= 0.0 {
///             return Err(PricingError::invalid_argument("spot must be positive"));
///         }
///         Ok((self.spot - self.discounted_strike).max(0.0))
///     }
/// }
///
/// let fwd = Forward { spot: 100.0, discounted_strike: 95.0 };
/// assert_eq!(fwd.price().unwrap(), 5.0);
/// ```
pub trait Priceable {
    /// Calculate the present value.
    ///
    /// # Errors
    /// Any [`PricingError`] raised while validating or evaluating the contract.
    fn price(&self) -> Result<f64, PricingError>;
}
