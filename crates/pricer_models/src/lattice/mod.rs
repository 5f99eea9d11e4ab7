//! Binomial lattice pricing for European options.
//!
//! This module provides:
//! - [`OneStepBinomial`]: up/down factors, growth and discount for a single period
//! - [`TreeValuation`]: every intermediate quantity of one evaluation
//! - [`price`], [`evaluate`], [`price_raw`]: the pricing entry points
//!
//! ## Algorithm
//!
//! With `u = e^(σ√T)`, `d = e^(-σ√T)` and `p = (e^(rT) - d) / (u - d)`:
//!
//! **Price** = round(e^(-rT) · (p·f(S·u) + (1-p)·f(S·d)), 2)
//!
//! where `f` is the call or put payoff. Validation gates, in order:
//! non-positive or non-finite input, `u == d`, `p ∉ [0, 1]`.

pub mod one_step;

pub use one_step::{evaluate, price, price_raw, OneStepBinomial, TreeValuation};
