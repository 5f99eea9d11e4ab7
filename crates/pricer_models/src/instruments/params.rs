//! Pricing input parameters.
//!
//! This module provides the validated parameter set for pricing a European
//! option, plus a builder whose setters can be called in any order.

use pricer_core::traits::Priceable;
use pricer_core::types::PricingError;

use super::option_type::OptionType;

/// Market and contract parameters for a European option.
///
/// A value of this type always satisfies:
/// - `spot`, `strike`, `time_to_expiry`, `volatility` are strictly positive
/// - all five numeric fields are finite
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionType, PricingInput};
///
/// let input = PricingInput::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
/// assert_eq!(input.strike(), 100.0);
/// assert_eq!(input.option_type(), OptionType::Put);
///
/// // Non-positive volatility
/// assert!(PricingInput::new(100.0, 100.0, 1.0, 0.05, 0.0, OptionType::Put).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PricingInputBuilder"))]
pub struct PricingInput {
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
    option_type: OptionType,
}

impl PricingInput {
    /// Creates new pricing inputs with validation.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `time_to_expiry` - Time to expiry in years (must be positive)
    /// * `risk_free_rate` - Continuously compounded annual rate (any finite value)
    /// * `volatility` - Annualised volatility (must be positive)
    /// * `option_type` - Call or put
    ///
    /// # Errors
    /// `PricingError::InvalidArgument` naming the first offending field.
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, PricingError> {
        let input = Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
            option_type,
        };
        input.validate()?;
        Ok(input)
    }

    /// Starts a keyword-style builder.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::{OptionType, PricingInput};
    ///
    /// let input = PricingInput::builder()
    ///     .volatility(0.2)
    ///     .option_type(OptionType::Call)
    ///     .spot(100.0)
    ///     .risk_free_rate(0.05)
    ///     .strike(100.0)
    ///     .time_to_expiry(1.0)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(input.spot(), 100.0);
    /// ```
    pub fn builder() -> PricingInputBuilder {
        PricingInputBuilder::default()
    }

    fn validate(&self) -> Result<(), PricingError> {
        let positives = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("time_to_expiry", self.time_to_expiry),
            ("volatility", self.volatility),
        ];

        for (name, value) in positives {
            if !value.is_finite() || value <= 0.0 {
                return Err(PricingError::invalid_argument(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        if !self.risk_free_rate.is_finite() {
            return Err(PricingError::invalid_argument(format!(
                "risk_free_rate must be finite, got {}",
                self.risk_free_rate
            )));
        }

        Ok(())
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn time_to_expiry(&self) -> f64 {
        self.time_to_expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns a copy of these inputs for the other option type.
    #[inline]
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }
}

impl Priceable for PricingInput {
    fn price(&self) -> Result<f64, PricingError> {
        crate::lattice::price(self)
    }
}

/// Builder for [`PricingInput`].
///
/// Setters may be called in any order; the resulting inputs depend only on
/// the values supplied. Also the deserialisation shape of [`PricingInput`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct PricingInputBuilder {
    spot: Option<f64>,
    strike: Option<f64>,
    time_to_expiry: Option<f64>,
    risk_free_rate: Option<f64>,
    volatility: Option<f64>,
    option_type: Option<OptionType>,
}

impl PricingInputBuilder {
    /// Sets the spot price.
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the strike price.
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the time to expiry in years.
    pub fn time_to_expiry(mut self, time_to_expiry: f64) -> Self {
        self.time_to_expiry = Some(time_to_expiry);
        self
    }

    /// Sets the risk-free rate.
    pub fn risk_free_rate(mut self, risk_free_rate: f64) -> Self {
        self.risk_free_rate = Some(risk_free_rate);
        self
    }

    /// Sets the volatility.
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the option type.
    pub fn option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = Some(option_type);
        self
    }

    /// Validates and builds the inputs.
    ///
    /// # Errors
    /// `PricingError::InvalidArgument` if a field is missing or invalid.
    /// The option type is checked first.
    pub fn build(self) -> Result<PricingInput, PricingError> {
        let option_type = required(self.option_type, "option_type")?;
        PricingInput::new(
            required(self.spot, "spot")?,
            required(self.strike, "strike")?,
            required(self.time_to_expiry, "time_to_expiry")?,
            required(self.risk_free_rate, "risk_free_rate")?,
            required(self.volatility, "volatility")?,
            option_type,
        )
    }
}

impl TryFrom<PricingInputBuilder> for PricingInput {
    type Error = PricingError;

    fn try_from(builder: PricingInputBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, PricingError> {
    value.ok_or_else(|| PricingError::invalid_argument(format!("missing field `{}`", name)))
}
