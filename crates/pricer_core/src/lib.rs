//! # pricer_core: Foundation Types for Black-Scholes-Merton Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Option kinds: `OptionKind` (`types::option_kind`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derive
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{OptionKind, PricingError};
//!
//! let kind: OptionKind = "Call".parse().unwrap();
//! assert_eq!(kind, OptionKind::Call);
//! assert_eq!(kind.to_string(), "call");
//!
//! let err = "straddle".parse::<OptionKind>().unwrap_err();
//! assert!(err.is_invalid_input());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `OptionKind` and `PricingError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
