//! Financial instrument definitions.
//!
//! # Instrument Types
//!
//! - [`OptionInput`]: European vanilla option parameters (S, K, T, r, σ, kind)
//!   validated against the Black-Scholes domain at construction
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::OptionKind;
//! use pricer_models::instruments::OptionInput;
//!
//! let call = OptionInput::new(OptionKind::Call, 100.0, 105.0, 0.5, 0.03, 0.25).unwrap();
//! assert_eq!(call.strike(), 105.0);
//!
//! // Zero maturity is rejected before any formula runs
//! assert!(OptionInput::new(OptionKind::Put, 100.0, 105.0, 0.0, 0.03, 0.25).is_err());
//! ```

mod option_input;

pub use option_input::OptionInput;
#[cfg(feature = "serde")]
pub use option_input::OptionRecord;
