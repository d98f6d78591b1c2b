//! Core option and error types.
//!
//! This module provides:
//! - `option_kind`: Call/Put discriminator with parsing and display
//! - `error`: Structured error types for pricing operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionKind`] from `option_kind`
//! - [`PricingError`] from `error`

pub mod error;
pub mod option_kind;

pub use error::PricingError;
pub use option_kind::OptionKind;
