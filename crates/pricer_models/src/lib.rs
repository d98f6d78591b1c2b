//! # Pricer Models (L2: Business Logic)
//!
//! European vanilla option inputs and the closed-form Black-Scholes-Merton
//! engine.
//!
//! This crate provides:
//! - Validated option inputs ([`instruments::OptionInput`])
//! - Standard normal distribution functions
//! - The shared `d1`/`d2` intermediate terms
//! - Analytical price and Greeks (Delta, Gamma, Vega, Theta, Rho)
//!
//! ## Design Principles
//!
//! - **Validate at construction**: an `OptionInput` that exists satisfies the
//!   model's domain, so formulas never see non-positive spot, strike,
//!   maturity or volatility
//! - **One pass per option**: price and Greeks share one [`analytical::D1D2`]
//! - **Typed failures**: degenerate numerics surface as
//!   `PricingError::NumericDegenerate`, never as silent `NaN`
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::OptionKind;
//! use pricer_models::analytical::BlackScholes;
//! use pricer_models::instruments::OptionInput;
//!
//! let input = OptionInput::new(OptionKind::Call, 100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let result = BlackScholes::new().evaluate(&input).unwrap();
//! assert!((result.price - 10.4506).abs() < 1e-3);
//! assert!((result.greeks.delta - 0.6368).abs() < 1e-3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
