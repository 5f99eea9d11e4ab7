//! # Pricer Models (L2: Business Logic)
//!
//! European option inputs and the one-step binomial lattice.
//!
//! This crate provides:
//! - Option type and validated pricing inputs (`instruments`)
//! - The one-step binomial tree and the `price` entry point (`lattice`)
//!
//! ## Design Principles
//!
//! - **Validated construction**: a `PricingInput` that exists satisfies its invariants
//! - **Generic over `T: Float`** for the lattice arithmetic
//! - **Builder pattern** for keyword-style construction in any order
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::{OptionType, PricingInput};
//! use pricer_models::lattice::price;
//!
//! let call = PricingInput::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//! assert_eq!(price(&call).unwrap(), 12.16);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod instruments;
pub mod lattice;
