//! European vanilla option input.
//!
//! This module provides the immutable parameter record priced by the
//! analytical engine, with validation ensuring the Black-Scholes domain
//! `S > 0, K > 0, T > 0, σ > 0` and finite values throughout.

use pricer_core::types::OptionKind;

use crate::analytical::AnalyticalError;

/// Parameters of one European vanilla option.
///
/// Constructed once from collected parameters and never mutated. The
/// fields are private so an `OptionInput` that exists always satisfies
/// the model's domain.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
/// use pricer_models::instruments::OptionInput;
///
/// let input = OptionInput::new(OptionKind::Call, 100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert_eq!(input.spot(), 100.0);
/// assert_eq!(input.kind(), OptionKind::Call);
///
/// // Negative rates are valid
/// assert!(OptionInput::new(OptionKind::Put, 100.0, 100.0, 1.0, -0.01, 0.2).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "OptionRecord", try_from = "OptionRecord")
)]
pub struct OptionInput {
    kind: OptionKind,
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
}

impl OptionInput {
    /// Creates a new option input with validation.
    ///
    /// # Arguments
    /// * `kind` - Call or put
    /// * `spot` - Current underlying price S (must be positive)
    /// * `strike` - Strike price K (must be positive)
    /// * `maturity` - Time to expiry T in years (must be positive)
    /// * `rate` - Continuously-compounded risk-free rate r (any finite value)
    /// * `volatility` - Annualised volatility σ (must be positive)
    ///
    /// # Errors
    /// The first violated parameter, checked in the order S, K, T, σ, r.
    /// `NaN` and infinities are rejected for every parameter.
    pub fn new(
        kind: OptionKind,
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, AnalyticalError> {
        if !is_positive_finite(spot) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }

        if !is_positive_finite(strike) {
            return Err(AnalyticalError::InvalidStrike { strike });
        }

        if !is_positive_finite(maturity) {
            return Err(AnalyticalError::InvalidMaturity { maturity });
        }

        if !is_positive_finite(volatility) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidRate { rate });
        }

        Ok(Self {
            kind,
            spot,
            strike,
            maturity,
            rate,
            volatility,
        })
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns the spot price (S).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to maturity in years (T).
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns a copy with a different kind and otherwise identical parameters.
    #[inline]
    pub fn with_kind(&self, kind: OptionKind) -> Self {
        Self { kind, ..*self }
    }
}

#[inline]
fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Unvalidated wire form of [`OptionInput`].
///
/// Field names follow the flat export header (`type,S,K,T,r,sigma`); the
/// long names (`kind`, `spot`, `strike`, `maturity`, `rate`, `volatility`)
/// are accepted as aliases when deserialising. Conversion into
/// `OptionInput` goes through [`OptionInput::new`].
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OptionRecord {
    /// Option kind
    #[serde(rename = "type", alias = "kind")]
    pub kind: OptionKind,
    /// Spot price
    #[serde(rename = "S", alias = "spot")]
    pub spot: f64,
    /// Strike price
    #[serde(rename = "K", alias = "strike")]
    pub strike: f64,
    /// Time to maturity in years
    #[serde(rename = "T", alias = "maturity")]
    pub maturity: f64,
    /// Risk-free rate
    #[serde(rename = "r", alias = "rate")]
    pub rate: f64,
    /// Volatility
    #[serde(rename = "sigma", alias = "volatility")]
    pub volatility: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<OptionRecord> for OptionInput {
    type Error = AnalyticalError;

    fn try_from(record: OptionRecord) -> Result<Self, Self::Error> {
        OptionInput::new(
            record.kind,
            record.spot,
            record.strike,
            record.maturity,
            record.rate,
            record.volatility,
        )
    }
}

#[cfg(feature = "serde")]
impl From<OptionInput> for OptionRecord {
    fn from(input: OptionInput) -> Self {
        Self {
            kind: input.kind,
            spot: input.spot,
            strike: input.strike,
            maturity: input.maturity,
            rate: input.rate,
            volatility: input.volatility,
        }
    }
}
