//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//!
//! ## Design Principles
//!
//! - **Shared intermediates**: `d1`, `d2`, `σ√T`, `e^(-rT)` and `φ(d1)` are
//!   computed once per option in [`D1D2`]
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, Greeks, PricingResult, D1D2};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
