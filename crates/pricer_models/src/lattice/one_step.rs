//! One-step binomial tree.
//!
//! The underlying moves once, to `S·u` or `S·d`, with `u·d = 1`. The option
//! value is the discounted risk-neutral expectation of the two terminal
//! payoffs, rounded to cents.

use pricer_core::math::round_to_cents;
use pricer_core::traits::Float;
use pricer_core::types::PricingError;

use crate::instruments::{OptionType, PricingInput};

/// One-period binomial model.
///
/// Holds the up/down multipliers together with the growth `e^(rT)` and
/// discount `e^(-rT)` factors for a single period.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
/// use pricer_models::lattice::OneStepBinomial;
///
/// let tree = OneStepBinomial::new(0.2_f64, 1.0, 0.05).unwrap();
/// assert!((tree.up() * tree.down() - 1.0).abs() < 1e-15);
///
/// let p = tree.risk_neutral_probability().unwrap();
/// assert!(p > 0.0 && p < 1.0);
///
/// let value = tree.value(100.0, 100.0, OptionType::Call).unwrap();
/// assert!((value - 12.162284964623943).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneStepBinomial<T: Float> {
    up: T,
    down: T,
    growth: T,
    discount: T,
}

impl<T: Float> OneStepBinomial<T> {
    /// Builds the tree for one period of length `time_to_expiry`.
    ///
    /// # Arguments
    /// * `volatility` - Annualised volatility (must be positive)
    /// * `time_to_expiry` - Period length in years (must be positive)
    /// * `risk_free_rate` - Continuously compounded annual rate
    ///
    /// # Errors
    /// - `PricingError::InvalidArgument` if volatility or time is non-positive or non-finite,
    ///   or if `u = e^(σ√T)` overflows
    /// - `PricingError::DegenerateModel` if the up and down factors are equal
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::PricingError;
    /// use pricer_models::lattice::OneStepBinomial;
    ///
    /// // σ√T too small to move exp() away from 1.0
    /// let result = OneStepBinomial::new(1e-17_f64, 1.0, 0.05);
    /// assert!(matches!(result, Err(PricingError::DegenerateModel { .. })));
    /// ```
    pub fn new(volatility: T, time_to_expiry: T, risk_free_rate: T) -> Result<Self, PricingError> {
        let zero = T::zero();

        if !volatility.is_finite() || volatility <= zero {
            return Err(PricingError::invalid_argument(format!(
                "volatility must be positive and finite, got {}",
                to_f64(volatility)
            )));
        }

        if !time_to_expiry.is_finite() || time_to_expiry <= zero {
            return Err(PricingError::invalid_argument(format!(
                "time_to_expiry must be positive and finite, got {}",
                to_f64(time_to_expiry)
            )));
        }

        let spread = volatility * time_to_expiry.sqrt();
        let up = spread.exp();
        let down = (-spread).exp();

        if !up.is_finite() {
            return Err(PricingError::invalid_argument(format!(
                "volatility * sqrt(time_to_expiry) = {} overflows the tree",
                to_f64(spread)
            )));
        }

        if up == down {
            return Err(PricingError::DegenerateModel {
                up: to_f64(up),
                down: to_f64(down),
            });
        }

        let drift = risk_free_rate * time_to_expiry;

        Ok(Self {
            up,
            down,
            growth: drift.exp(),
            discount: (-drift).exp(),
        })
    }

    /// Returns the up-move multiplier `u`.
    #[inline]
    pub fn up(&self) -> T {
        self.up
    }

    /// Returns the down-move multiplier `d`.
    #[inline]
    pub fn down(&self) -> T {
        self.down
    }

    /// Returns the growth factor `e^(rT)`.
    #[inline]
    pub fn growth(&self) -> T {
        self.growth
    }

    /// Returns the discount factor `e^(-rT)`.
    #[inline]
    pub fn discount(&self) -> T {
        self.discount
    }

    /// Risk-neutral probability of the up move.
    ///
    /// p = (e^(rT) - d) / (u - d)
    ///
    /// # Errors
    /// `PricingError::ArbitrageViolation` if `p` lies outside `[0, 1]`.
    pub fn risk_neutral_probability(&self) -> Result<T, PricingError> {
        let p = (self.growth - self.down) / (self.up - self.down);

        if !(p >= T::zero() && p <= T::one()) {
            return Err(PricingError::ArbitrageViolation {
                probability: to_f64(p),
            });
        }

        Ok(p)
    }

    /// Unrounded present value of a European option on this tree.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price (S)
    /// * `strike` - Strike price (K)
    /// * `option_type` - Call or put
    ///
    /// # Errors
    /// `PricingError::ArbitrageViolation` from [`Self::risk_neutral_probability`].
    pub fn value(&self, spot: T, strike: T, option_type: OptionType) -> Result<T, PricingError> {
        let up_payoff = option_type.payoff(spot * self.up, strike);
        let down_payoff = option_type.payoff(spot * self.down, strike);
        let p = self.risk_neutral_probability()?;

        Ok(self.discount * (p * up_payoff + (T::one() - p) * down_payoff))
    }
}

/// Intermediate quantities of one tree evaluation.
///
/// `price` is `value` rounded to cents; all other fields are unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeValuation {
    /// Inputs that were priced
    pub input: PricingInput,
    /// Up-move multiplier `u`
    pub up: f64,
    /// Down-move multiplier `d`
    pub down: f64,
    /// Terminal underlying price after the up move, `S·u`
    pub up_price: f64,
    /// Terminal underlying price after the down move, `S·d`
    pub down_price: f64,
    /// Payoff in the up state
    pub up_payoff: f64,
    /// Payoff in the down state
    pub down_payoff: f64,
    /// Risk-neutral probability of the up move
    pub probability: f64,
    /// Discount factor `e^(-rT)`
    pub discount: f64,
    /// Discounted expected payoff before rounding
    pub value: f64,
    /// Reported price, `value` rounded to two decimals
    pub price: f64,
}

/// Evaluates the tree and returns every intermediate quantity.
///
/// # Errors
/// - `PricingError::InvalidArgument` if the tree or the discounted payoff overflows
/// - `PricingError::DegenerateModel` if `u == d`
/// - `PricingError::ArbitrageViolation` if `p ∉ [0, 1]`
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionType, PricingInput};
/// use pricer_models::lattice::evaluate;
///
/// let input = PricingInput::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
/// let valuation = evaluate(&input).unwrap();
/// assert_eq!(valuation.up_payoff, 0.0);
/// assert_eq!(valuation.price, 7.29);
/// ```
pub fn evaluate(input: &PricingInput) -> Result<TreeValuation, PricingError> {
    let tree = OneStepBinomial::new(
        input.volatility(),
        input.time_to_expiry(),
        input.risk_free_rate(),
    )?;

    let option_type = input.option_type();
    let up_price = input.spot() * tree.up();
    let down_price = input.spot() * tree.down();
    let up_payoff = option_type.payoff(up_price, input.strike());
    let down_payoff = option_type.payoff(down_price, input.strike());

    let probability = tree.risk_neutral_probability()?;
    let discount = tree.discount();
    let value = discount * (probability * up_payoff + (1.0 - probability) * down_payoff);

    if !value.is_finite() {
        return Err(PricingError::invalid_argument(format!(
            "option value is not finite for spot {} and strike {}",
            input.spot(),
            input.strike()
        )));
    }

    Ok(TreeValuation {
        input: *input,
        up: tree.up(),
        down: tree.down(),
        up_price,
        down_price,
        up_payoff,
        down_payoff,
        probability,
        discount,
        value,
        price: round_to_cents(value),
    })
}

/// Prices a European option on the one-step tree, rounded to cents.
///
/// # Errors
/// - `PricingError::DegenerateModel` if `u == d`
/// - `PricingError::ArbitrageViolation` if `p ∉ [0, 1]`
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionType, PricingInput};
/// use pricer_models::lattice::price;
///
/// let call = PricingInput::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let put = call.with_option_type(OptionType::Put);
/// assert_eq!(price(&call).unwrap(), 12.16);
/// assert_eq!(price(&put).unwrap(), 7.29);
/// ```
pub fn price(input: &PricingInput) -> Result<f64, PricingError> {
    Ok(evaluate(input)?.price)
}

/// Prices from loose values with the option type given as text.
///
/// The option type is parsed first, so `"straddle"` fails with
/// `InvalidArgument` whatever the numeric inputs are.
///
/// # Errors
/// - `PricingError::InvalidArgument` for an unknown option type or invalid numbers
/// - `PricingError::DegenerateModel` / `PricingError::ArbitrageViolation` from [`price`]
///
/// # Examples
/// ```
/// use pricer_models::lattice::price_raw;
///
/// assert_eq!(price_raw(100.0, 100.0, 1.0, 0.05, 0.2, "call").unwrap(), 12.16);
/// assert!(price_raw(100.0, 100.0, 1.0, 0.05, 0.2, "straddle").is_err());
/// ```
pub fn price_raw(
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
    option_type: &str,
) -> Result<f64, PricingError> {
    let option_type: OptionType = option_type.parse()?;
    let input = PricingInput::new(
        spot,
        strike,
        time_to_expiry,
        risk_free_rate,
        volatility,
        option_type,
    )?;
    price(&input)
}

#[inline]
fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn demo(option_type: OptionType) -> PricingInput {
        PricingInput::new(100.0, 100.0, 1.0, 0.05, 0.2, option_type).unwrap()
    }

    // ==========================================================
    // Tree construction
    // ==========================================================

    #[test]
    fn test_factors_are_reciprocal() {
        let tree = OneStepBinomial::new(0.2_f64, 1.0, 0.05).unwrap();
        assert_relative_eq!(tree.up(), 0.2_f64.exp(), epsilon = 1e-15);
        assert_relative_eq!(tree.down(), (-0.2_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(tree.up() * tree.down(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_growth_and_discount() {
        let tree = OneStepBinomial::new(0.2_f64, 2.0, 0.03).unwrap();
        assert_relative_eq!(tree.growth(), 0.06_f64.exp(), epsilon = 1e-15);
        assert_relative_eq!(tree.discount(), (-0.06_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_spread_scales_with_sqrt_time() {
        let tree = OneStepBinomial::new(0.2_f64, 0.25, 0.0).unwrap();
        // σ√T = 0.2 * 0.5
        assert_relative_eq!(tree.up(), 0.1_f64.exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_invalid_volatility() {
        assert!(matches!(
            OneStepBinomial::new(0.0_f64, 1.0, 0.05),
            Err(PricingError::InvalidArgument(_))
        ));
        assert!(matches!(
            OneStepBinomial::new(f64::NAN, 1.0, 0.05),
            Err(PricingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_invalid_time() {
        assert!(matches!(
            OneStepBinomial::new(0.2_f64, -1.0, 0.05),
            Err(PricingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_degenerate_model() {
        match OneStepBinomial::new(1e-17_f64, 1.0, 0.05) {
            Err(PricingError::DegenerateModel { up, down }) => {
                assert_eq!(up, 1.0);
                assert_eq!(down, 1.0);
            }
            other => panic!("Expected DegenerateModel, got {:?}", other),
        }
    }

    // ==========================================================
    // Risk-neutral probability
    // ==========================================================

    #[test]
    fn test_overflowing_spread() {
        match OneStepBinomial::new(1000.0_f64, 1.0, 0.05) {
            Err(PricingError::InvalidArgument(msg)) => assert!(msg.contains("overflows")),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }

        // e^700 is still representable
        let tree = OneStepBinomial::new(700.0_f64, 1.0, 0.05).unwrap();
        assert!(tree.up().is_finite());
    }

    #[test]
    fn test_probability_demo_contract() {
        let tree = OneStepBinomial::new(0.2_f64, 1.0, 0.05).unwrap();
        let p = tree.risk_neutral_probability().unwrap();
        assert_relative_eq!(p, 0.5774931963561243, epsilon = 1e-12);
    }

    #[test]
    fn test_probability_zero_rate_is_interior() {
        let tree = OneStepBinomial::new(0.2_f64, 1.0, 0.0).unwrap();
        let p = tree.risk_neutral_probability().unwrap();
        // (1 - d) / (u - d) = 1 / (1 + u)
        assert_relative_eq!(p, 1.0 / (1.0 + 0.2_f64.exp()), epsilon = 1e-12);
    }

    #[test]
    fn test_probability_above_one() {
        let tree = OneStepBinomial::new(0.2_f64, 1.0, 0.5).unwrap();
        match tree.risk_neutral_probability() {
            Err(PricingError::ArbitrageViolation { probability }) => {
                assert_relative_eq!(probability, 2.0612074024186007, epsilon = 1e-9);
            }
            other => panic!("Expected ArbitrageViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_probability_below_zero() {
        let tree = OneStepBinomial::new(0.2_f64, 1.0, -0.5).unwrap();
        match tree.risk_neutral_probability() {
            Err(PricingError::ArbitrageViolation { probability }) => {
                assert!(probability < 0.0);
            }
            other => panic!("Expected ArbitrageViolation, got {:?}", other),
        }
    }

    // ==========================================================
    // Valuation
    // ==========================================================

    #[test]
    fn test_demo_call_fixture() {
        let valuation = evaluate(&demo(OptionType::Call)).unwrap();
        assert_relative_eq!(valuation.value, 12.162284964623943, epsilon = 1e-10);
        assert_eq!(valuation.price, 12.16);
        assert_eq!(valuation.down_payoff, 0.0);
    }

    #[test]
    fn test_demo_put_fixture() {
        let valuation = evaluate(&demo(OptionType::Put)).unwrap();
        assert_relative_eq!(valuation.value, 7.285227414695337, epsilon = 1e-10);
        assert_eq!(valuation.price, 7.29);
        assert_eq!(valuation.up_payoff, 0.0);
    }

    #[test]
    fn test_evaluate_terminal_prices() {
        let valuation = evaluate(&demo(OptionType::Call)).unwrap();
        assert_relative_eq!(valuation.up_price, 122.14027581601699, epsilon = 1e-10);
        assert_relative_eq!(valuation.down_price, 81.87307530779818, epsilon = 1e-10);
        assert_relative_eq!(valuation.up_payoff, 22.14027581601699, epsilon = 1e-10);
    }

    #[test]
    fn test_evaluate_matches_generic_value() {
        let input = demo(OptionType::Put);
        let tree = OneStepBinomial::new(0.2_f64, 1.0, 0.05).unwrap();
        let value = tree.value(100.0, 100.0, OptionType::Put).unwrap();
        assert_eq!(evaluate(&input).unwrap().value, value);
    }

    #[test]
    fn test_price_rounds_value() {
        let valuation = evaluate(&demo(OptionType::Call)).unwrap();
        assert_eq!(valuation.price, round_to_cents(valuation.value));
        assert_eq!(price(&demo(OptionType::Call)).unwrap(), valuation.price);
    }

    #[test]
    fn test_price_arbitrage_violation() {
        let input = PricingInput::new(100.0, 100.0, 1.0, 0.5, 0.2, OptionType::Call).unwrap();
        assert!(matches!(
            price(&input),
            Err(PricingError::ArbitrageViolation { .. })
        ));
    }

    #[test]
    fn test_price_degenerate_model() {
        let input = PricingInput::new(100.0, 100.0, 1.0, 0.05, 1e-17, OptionType::Put).unwrap();
        assert!(matches!(
            price(&input),
            Err(PricingError::DegenerateModel { .. })
        ));
    }

    #[test]
    fn test_degenerate_checked_before_arbitrage() {
        // Both gates would fire; the factor check comes first
        let input = PricingInput::new(100.0, 100.0, 1.0, 0.5, 1e-17, OptionType::Call).unwrap();
        assert!(matches!(
            price(&input),
            Err(PricingError::DegenerateModel { .. })
        ));
    }

    #[test]
    fn test_price_high_volatility_call() {
        let call = PricingInput::new(100.0, 100.0, 1.0, 0.05, 1000.0, OptionType::Call).unwrap();
        assert!(matches!(price(&call), Err(PricingError::InvalidArgument(_))));

        let wide = PricingInput::new(100.0, 100.0, 1.0, 0.05, 700.0, OptionType::Call).unwrap();
        let value = price(&wide).unwrap();
        assert!(value.is_finite() && value >= 0.0);
    }

    #[test]
    fn test_evaluate_rejects_overflowing_value() {
        let call = PricingInput::new(f64::MAX, 100.0, 1.0, 0.05, 1.0, OptionType::Call).unwrap();
        assert!(matches!(evaluate(&call), Err(PricingError::InvalidArgument(_))));
    }

    #[test]
    fn test_price_raw_matches_typed() {
        assert_eq!(price_raw(100.0, 100.0, 1.0, 0.05, 0.2, "put").unwrap(), 7.29);
    }

    #[test]
    fn test_price_raw_rejects_straddle() {
        match price_raw(100.0, 100.0, 1.0, 0.05, 0.2, "straddle") {
            Err(PricingError::InvalidArgument(msg)) => assert!(msg.contains("straddle")),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_price_raw_option_type_checked_first() {
        match price_raw(-1.0, 100.0, 1.0, 0.05, 0.2, "straddle") {
            Err(PricingError::InvalidArgument(msg)) => assert!(msg.contains("option_type")),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_price_raw_rejects_non_positive() {
        for (spot, strike, expiry, vol) in [
            (0.0, 100.0, 1.0, 0.2),
            (100.0, -5.0, 1.0, 0.2),
            (100.0, 100.0, 0.0, 0.2),
            (100.0, 100.0, 1.0, -0.2),
        ] {
            assert!(matches!(
                price_raw(spot, strike, expiry, 0.05, vol, "call"),
                Err(PricingError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_f32_tree() {
        let tree = OneStepBinomial::new(0.2_f32, 1.0, 0.05).unwrap();
        let value = tree.value(100.0, 100.0, OptionType::Call).unwrap();
        assert_abs_diff_eq!(value, 12.162285_f32, epsilon = 1e-3);
    }
}
