//! Mathematical helpers shared by the pricing layers.
//!
//! This module provides:
//! - `rounding`: Decimal rounding of reported prices

pub mod rounding;

pub use rounding::{round_to_cents, round_to_decimals};
