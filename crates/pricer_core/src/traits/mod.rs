//! Core traits for priceable instruments.
//!
//! This module defines:
//! - Generic floating-point operations (`Float` trait)
//! - Price calculation (`Priceable` trait)
//!
//! Traits are meant for static dispatch; pricing inputs are small `Copy`
//! values and never need boxing.

/// Generic floating-point trait for numeric computations.
///
/// Re-exported so model crates can be generic over `f64` and `f32`
/// without naming num-traits directly.
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn compute_discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let discount_f64: f64 = compute_discount(0.05, 1.0);
/// assert!((discount_f64 - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;

pub mod priceable;

pub use priceable::Priceable;
