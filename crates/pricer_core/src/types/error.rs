//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations, split into malformed
//!   inputs and numerically degenerate parameter regions

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: A parameter violates the model's domain (non-positive
///   spot, strike, maturity or volatility, non-finite values, unknown kind)
/// - `NumericDegenerate`: Parameters are formally valid but an intermediate
///   or final quantity is non-finite or underflows
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("spot must be positive".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: spot must be positive");
///
/// let err = PricingError::NumericDegenerate("sigma*sqrt(T) underflows".to_string());
/// assert!(err.is_numeric_degenerate());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "message"))]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Non-finite or underflowing intermediate result
    #[error("Numeric degenerate: {0}")]
    NumericDegenerate(String),
}

impl PricingError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a numeric degenerate error
    pub fn numeric_degenerate(msg: impl Into<String>) -> Self {
        Self::NumericDegenerate(msg.into())
    }

    /// Returns `true` for [`PricingError::InvalidInput`].
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Returns `true` for [`PricingError::NumericDegenerate`].
    #[inline]
    pub fn is_numeric_degenerate(&self) -> bool {
        matches!(self, Self::NumericDegenerate(_))
    }
}
