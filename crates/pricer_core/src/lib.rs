//! # pricer_core: Foundation for the One-Step Binomial Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Error taxonomy: `PricingError` (`types::error`)
//! - Decimal rounding of reported prices (`math::rounding`)
//! - The `Priceable` trait and the `Float` re-export (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::round_to_decimals;
//! use pricer_core::types::PricingError;
//!
//! assert_eq!(round_to_decimals(12.162284964623943, 2), 12.16);
//!
//! let err = PricingError::invalid_argument("spot must be positive");
//! assert_eq!(err.to_string(), "Invalid argument: spot must be positive");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `PricingError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
