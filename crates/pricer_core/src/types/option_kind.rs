//! Option kind (Call or Put).
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::option_kind::OptionKind;
//!
//! let put: OptionKind = " PUT ".parse().unwrap();
//! assert_eq!(put, OptionKind::Put);
//! assert_eq!(put.to_string(), "put");
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Kind of a European vanilla option.
///
/// Designed for static dispatch: pricing code matches on the variant
/// rather than carrying a boolean flag.
///
/// # Variants
/// - `Call`: right to buy at the strike
/// - `Put`: right to sell at the strike
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Call option
    Call,
    /// Put option
    Put,
}

impl OptionKind {
    /// Returns the lowercase label used in tables and exports.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::OptionKind;
    ///
    /// assert_eq!(OptionKind::Call.label(), "call");
    /// assert_eq!(OptionKind::Put.label(), "put");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }

    /// Returns `true` for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }
}

impl FromStr for OptionKind {
    type Err = PricingError;

    /// Parses `call` or `put` (case-insensitive, surrounding whitespace ignored).
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::OptionKind;
    ///
    /// assert_eq!("call".parse::<OptionKind>().unwrap(), OptionKind::Call);
    /// assert_eq!("Put".parse::<OptionKind>().unwrap(), OptionKind::Put);
    /// assert!("forward".parse::<OptionKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, PricingError> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            _ => Err(PricingError::InvalidInput(format!(
                "unknown option type '{}', expected 'call' or 'put'",
                s.trim()
            ))),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
