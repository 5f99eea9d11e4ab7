//! Option type definitions.
//!
//! European options come in two flavours. Text parsing is the only place an
//! unsupported kind (e.g. `"straddle"`) can appear, and it is rejected there.

use std::fmt;
use std::str::FromStr;

use pricer_core::traits::Float;
use pricer_core::types::PricingError;

/// Type of European option.
///
/// # Variants
/// - `Call`: max(S - K, 0) at expiry
/// - `Put`: max(K - S, 0) at expiry
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// let call: OptionType = "call".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
/// assert_eq!(call.payoff(110.0_f64, 100.0), 10.0);
///
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// All supported option types, calls first.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    /// Intrinsic value at expiry for a terminal underlying price.
    ///
    /// # Arguments
    /// * `terminal` - Underlying price at expiry (S)
    /// * `strike` - Strike price (K)
    #[inline]
    pub fn payoff<T: Float>(&self, terminal: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            OptionType::Call => (terminal - strike).max(zero),
            OptionType::Put => (strike - terminal).max(zero),
        }
    }

    /// Lowercase identifier used for parsing and serialisation.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }

    /// Capitalised label used in report lines.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PricingError::invalid_argument(format!(
                "option_type must be 'call' or 'put', got '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for OptionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OptionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        OptionType::from_str(&s).map_err(serde::de::Error::custom)
    }
}
