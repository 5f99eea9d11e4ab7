//! Option contract definitions.
//!
//! This module provides:
//! - [`OptionType`]: call or put, with terminal payoff evaluation
//! - [`PricingInput`]: validated market and contract parameters
//! - [`PricingInputBuilder`]: keyword-style construction of [`PricingInput`]

pub mod option_type;
pub mod params;

pub use option_type::OptionType;
pub use params::{PricingInput, PricingInputBuilder};
