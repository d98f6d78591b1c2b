//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! No dividend yield term is modelled and a single flat rate is used for
//! discounting.

use pricer_core::types::{OptionKind, PricingError};

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::OptionInput;

/// Intermediate terms shared by the price and every Greek.
///
/// Computed once per option by [`D1D2::compute`] so that all outputs of a
/// single evaluation come from the same floating-point evaluation path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct D1D2 {
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    pub d1: f64,
    /// d₂ = d₁ - σ√T
    pub d2: f64,
    /// √T
    pub sqrt_t: f64,
    /// σ√T
    pub vol_sqrt_t: f64,
    /// Discount factor e^(-rT)
    pub discount: f64,
    /// φ(d₁)
    pub pdf_d1: f64,
}

impl D1D2 {
    /// Computes the shared terms for a validated input.
    ///
    /// # Errors
    /// `AnalyticalError::NumericalInstability` if σ√T is zero or subnormal,
    /// or if any term is non-finite (e.g. S/K overflowing).
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionKind;
    /// use pricer_models::analytical::D1D2;
    /// use pricer_models::instruments::OptionInput;
    ///
    /// let input = OptionInput::new(OptionKind::Call, 100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
    /// let terms = D1D2::compute(&input).unwrap();
    /// assert!((terms.d1 - 0.35).abs() < 1e-12);
    /// assert!((terms.d2 - 0.15).abs() < 1e-12);
    /// ```
    pub fn compute(input: &OptionInput) -> Result<Self, AnalyticalError> {
        let spot = input.spot();
        let strike = input.strike();
        let maturity = input.maturity();
        let rate = input.rate();
        let volatility = input.volatility();

        let sqrt_t = maturity.sqrt();
        let vol_sqrt_t = volatility * sqrt_t;

        if !vol_sqrt_t.is_normal() {
            return Err(AnalyticalError::numerical(format!(
                "sigma*sqrt(T) = {:e} underflows (sigma = {:e}, T = {:e})",
                vol_sqrt_t, volatility, maturity
            )));
        }

        let log_moneyness = (spot / strike).ln();
        let drift = (rate + 0.5 * volatility * volatility) * maturity;

        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;
        let discount = (-rate * maturity).exp();

        let terms = Self {
            d1,
            d2,
            sqrt_t,
            vol_sqrt_t,
            discount,
            pdf_d1: norm_pdf(d1),
        };
        terms.ensure_finite()?;

        Ok(terms)
    }

    fn ensure_finite(&self) -> Result<(), AnalyticalError> {
        let named = [("d1", self.d1), ("d2", self.d2), ("discount factor", self.discount)];
        match named.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(AnalyticalError::numerical(format!(
                "{} is not finite ({})",
                name, value
            ))),
            None => Ok(()),
        }
    }
}

/// First and second order sensitivities of a European option.
///
/// Theta and rho are per year, vega per unit of volatility; any
/// per-day or per-percent scaling is left to presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Delta: ∂V/∂S
    pub delta: f64,
    /// Gamma: ∂²V/∂S²
    pub gamma: f64,
    /// Vega: ∂V/∂σ
    pub vega: f64,
    /// Theta: ∂V/∂t (calendar time, per year)
    pub theta: f64,
    /// Rho: ∂V/∂r
    pub rho: f64,
}

impl Greeks {
    /// Returns `true` if every sensitivity is finite.
    pub fn is_finite(&self) -> bool {
        [self.delta, self.gamma, self.vega, self.theta, self.rho]
            .iter()
            .all(|g| g.is_finite())
    }
}

/// Fair value and Greeks of one option, produced in a single pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Theoretical fair value
    pub price: f64,
    /// Sensitivities
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub greeks: Greeks,
}

/// Black-Scholes model for European option pricing.
///
/// Stateless: every method is a pure function of its `OptionInput`, so a
/// single engine value may be shared freely across threads.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::OptionInput;
///
/// let bs = BlackScholes::new();
/// let call = OptionInput::new(OptionKind::Call, 100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let put = call.with_kind(OptionKind::Put);
///
/// let c = bs.price(&call).unwrap();
/// let p = bs.price(&put).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = c - p - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholes;

impl BlackScholes {
    /// Creates the engine.
    pub fn new() -> Self {
        Self
    }

    /// Computes the shared `d1`/`d2` terms for an input.
    pub fn terms(&self, input: &OptionInput) -> Result<D1D2, PricingError> {
        Ok(D1D2::compute(input)?)
    }

    /// Computes the theoretical price.
    ///
    /// # Errors
    /// `PricingError::NumericDegenerate` if the terms or the price are not finite.
    pub fn price(&self, input: &OptionInput) -> Result<f64, PricingError> {
        let terms = D1D2::compute(input)?;
        Ok(finite("price", price_from_terms(input, &terms))?)
    }

    /// Computes Delta, Gamma, Vega, Theta and Rho.
    ///
    /// # Errors
    /// `PricingError::NumericDegenerate` if the terms or any Greek are not finite.
    pub fn greeks(&self, input: &OptionInput) -> Result<Greeks, PricingError> {
        let terms = D1D2::compute(input)?;
        let greeks = greeks_from_terms(input, &terms);
        if !greeks.is_finite() {
            return Err(AnalyticalError::numerical(format!("non-finite Greeks: {:?}", greeks)).into());
        }
        Ok(greeks)
    }

    /// Computes price and Greeks in one pass from a single [`D1D2`].
    ///
    /// # Errors
    /// `PricingError::NumericDegenerate` if any output is not finite.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionKind;
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::OptionInput;
    ///
    /// let put = OptionInput::new(OptionKind::Put, 100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
    /// let result = BlackScholes::new().evaluate(&put).unwrap();
    /// assert!((result.price - 5.5735).abs() < 1e-3);
    /// assert!(result.greeks.delta < 0.0);
    /// ```
    pub fn evaluate(&self, input: &OptionInput) -> Result<PricingResult, PricingError> {
        let terms = D1D2::compute(input)?;
        let price = finite("price", price_from_terms(input, &terms))?;
        let greeks = greeks_from_terms(input, &terms);
        if !greeks.is_finite() {
            return Err(AnalyticalError::numerical(format!("non-finite Greeks: {:?}", greeks)).into());
        }
        Ok(PricingResult { price, greeks })
    }
}

fn finite(name: &str, value: f64) -> Result<f64, AnalyticalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticalError::numerical(format!("{} is not finite ({})", name, value)))
    }
}

fn price_from_terms(input: &OptionInput, terms: &D1D2) -> f64 {
    let spot = input.spot();
    let discounted_strike = input.strike() * terms.discount;

    match input.kind() {
        // C = S·N(d₁) - K·e^(-rT)·N(d₂)
        OptionKind::Call => spot * norm_cdf(terms.d1) - discounted_strike * norm_cdf(terms.d2),
        // P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
        OptionKind::Put => discounted_strike * norm_cdf(-terms.d2) - spot * norm_cdf(-terms.d1),
    }
}

fn greeks_from_terms(input: &OptionInput, terms: &D1D2) -> Greeks {
    let spot = input.spot();
    let strike = input.strike();
    let maturity = input.maturity();
    let rate = input.rate();
    let volatility = input.volatility();
    let discounted_strike = strike * terms.discount;

    // Kind-independent
    let gamma = terms.pdf_d1 / (spot * terms.vol_sqrt_t);
    let vega = spot * terms.pdf_d1 * terms.sqrt_t;
    let decay = -(spot * terms.pdf_d1 * volatility) / (2.0 * terms.sqrt_t);

    match input.kind() {
        OptionKind::Call => {
            let n_d2 = norm_cdf(terms.d2);
            Greeks {
                delta: norm_cdf(terms.d1),
                gamma,
                vega,
                theta: decay - rate * discounted_strike * n_d2,
                rho: discounted_strike * maturity * n_d2,
            }
        }
        OptionKind::Put => {
            let n_minus_d2 = norm_cdf(-terms.d2);
            Greeks {
                delta: norm_cdf(terms.d1) - 1.0,
                gamma,
                vega,
                theta: decay + rate * discounted_strike * n_minus_d2,
                rho: -discounted_strike * maturity * n_minus_d2,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn input(kind: OptionKind, spot: f64, strike: f64, maturity: f64, rate: f64, vol: f64) -> OptionInput {
        OptionInput::new(kind, spot, strike, maturity, rate, vol).unwrap()
    }

    fn atm(kind: OptionKind) -> OptionInput {
        input(kind, 100.0, 100.0, 1.0, 0.05, 0.2)
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_d2_atm_zero_rate() {
        // ATM with r=0: d1 = σ√T / 2, d2 = -σ√T / 2
        let terms = D1D2::compute(&input(OptionKind::Call, 100.0, 100.0, 1.0, 0.0, 0.2)).unwrap();
        assert_relative_eq!(terms.d1, 0.1, epsilon = 1e-12);
        assert_relative_eq!(terms.d2, -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_d2_relationship() {
        let terms = D1D2::compute(&input(OptionKind::Call, 100.0, 105.0, 0.5, 0.05, 0.2)).unwrap();
        assert_relative_eq!(terms.d2, terms.d1 - 0.2 * 0.5_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(terms.vol_sqrt_t, 0.2 * 0.5_f64.sqrt(), epsilon = 1e-15);
        assert_relative_eq!(terms.discount, (-0.025_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(terms.pdf_d1, norm_pdf(terms.d1), epsilon = 1e-15);
    }

    #[test]
    fn test_d1_sign_follows_moneyness() {
        let itm = D1D2::compute(&input(OptionKind::Call, 150.0, 100.0, 1.0, 0.05, 0.2)).unwrap();
        assert!(itm.d1 > 1.0);

        let otm = D1D2::compute(&input(OptionKind::Call, 50.0, 100.0, 1.0, 0.05, 0.2)).unwrap();
        assert!(otm.d1 < -1.0);
    }

    #[test]
    fn test_terms_underflow_is_degenerate() {
        // Both positive, but σ·√T = 1e-160 · 1e-160 underflows to zero
        let tiny = input(OptionKind::Call, 100.0, 100.0, 1e-320, 0.05, 1e-160);
        match D1D2::compute(&tiny) {
            Err(AnalyticalError::NumericalInstability { message }) => {
                assert!(message.contains("sigma*sqrt(T)"));
            }
            other => panic!("Expected NumericalInstability, got {:?}", other),
        }
    }

    #[test]
    fn test_terms_overflowing_moneyness_is_degenerate() {
        let extreme = input(OptionKind::Call, 1e300, 1e-300, 1.0, 0.05, 0.2);
        assert!(matches!(
            D1D2::compute(&extreme),
            Err(AnalyticalError::NumericalInstability { .. })
        ));
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_call_price_reference_value() {
        // Known reference: S=100, K=100, r=0.05, σ=0.2, T=1
        let price = BlackScholes::new().price(&atm(OptionKind::Call)).unwrap();
        assert_relative_eq!(price, 10.450583572185565, epsilon = 1e-9);
    }

    #[test]
    fn test_put_price_reference_value() {
        let price = BlackScholes::new().price(&atm(OptionKind::Put)).unwrap();
        assert_relative_eq!(price, 5.573526022256971, epsilon = 1e-9);
    }

    #[test]
    fn test_deep_itm_call() {
        // Deep ITM call ≈ S - K*exp(-rT)
        let price = BlackScholes::new()
            .price(&input(OptionKind::Call, 200.0, 100.0, 1.0, 0.05, 0.2))
            .unwrap();
        let forward_intrinsic = 200.0 - 100.0 * (-0.05_f64).exp();
        assert!(price >= forward_intrinsic - 1e-8);
        assert!(price - forward_intrinsic < 0.01);
    }

    #[test]
    fn test_deep_otm_call() {
        let price = BlackScholes::new()
            .price(&input(OptionKind::Call, 50.0, 100.0, 1.0, 0.05, 0.2))
            .unwrap();
        assert!(price >= 0.0);
        assert!(price < 0.01);
    }

    #[test]
    fn test_tiny_positive_maturity_prices_near_intrinsic() {
        let bs = BlackScholes::new();
        let call = bs.price(&input(OptionKind::Call, 110.0, 100.0, 1e-8, 0.05, 0.2)).unwrap();
        assert_relative_eq!(call, 10.0, epsilon = 1e-6);

        let put = bs.price(&input(OptionKind::Put, 110.0, 100.0, 1e-8, 0.05, 0.2)).unwrap();
        assert!(put.abs() < 1e-10);
    }

    // ==========================================================
    // Put-Call Parity Tests
    // ==========================================================

    #[test]
    fn test_put_call_parity_various_strikes() {
        let bs = BlackScholes::new();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let call = bs.price(&input(OptionKind::Call, 100.0, strike, 1.0, 0.05, 0.2)).unwrap();
            let put = bs.price(&input(OptionKind::Put, 100.0, strike, 1.0, 0.05, 0.2)).unwrap();
            let forward = 100.0 - strike * (-0.05_f64).exp();
            assert_relative_eq!(call - put, forward, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_put_call_parity_negative_rate() {
        let bs = BlackScholes::new();
        let call = bs.price(&input(OptionKind::Call, 100.0, 100.0, 1.0, -0.02, 0.2)).unwrap();
        let put = bs.price(&input(OptionKind::Put, 100.0, 100.0, 1.0, -0.02, 0.2)).unwrap();
        let forward = 100.0 - 100.0 * (0.02_f64).exp();
        assert_relative_eq!(call - put, forward, epsilon = 1e-10);
    }

    // ==========================================================
    // Greeks Tests
    // ==========================================================

    #[test]
    fn test_call_greeks_reference_values() {
        let g = BlackScholes::new().greeks(&atm(OptionKind::Call)).unwrap();
        assert_relative_eq!(g.delta, 0.6368306511756191, epsilon = 1e-10);
        assert_relative_eq!(g.gamma, 0.018762017345846895, epsilon = 1e-10);
        assert_relative_eq!(g.vega, 37.52403469169379, epsilon = 1e-8);
        assert_relative_eq!(g.theta, -6.414027546438197, epsilon = 1e-8);
        assert_relative_eq!(g.rho, 53.232481545376345, epsilon = 1e-8);
    }

    #[test]
    fn test_put_greeks_reference_values() {
        let g = BlackScholes::new().greeks(&atm(OptionKind::Put)).unwrap();
        assert_relative_eq!(g.delta, 0.6368306511756191 - 1.0, epsilon = 1e-10);
        assert_relative_eq!(g.gamma, 0.018762017345846895, epsilon = 1e-10);
        assert_relative_eq!(g.vega, 37.52403469169379, epsilon = 1e-8);
        assert_relative_eq!(g.theta, -1.657880423934626, epsilon = 1e-8);
        assert_relative_eq!(g.rho, -41.89046090469506, epsilon = 1e-8);
    }

    #[test]
    fn test_gamma_vega_kind_independent() {
        let bs = BlackScholes::new();
        let call = bs.greeks(&input(OptionKind::Call, 95.0, 100.0, 0.75, 0.03, 0.3)).unwrap();
        let put = bs.greeks(&input(OptionKind::Put, 95.0, 100.0, 0.75, 0.03, 0.3)).unwrap();
        assert_eq!(call.gamma, put.gamma);
        assert_eq!(call.vega, put.vega);
        assert_relative_eq!(put.delta, call.delta - 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_gamma_maximum_near_atm() {
        let bs = BlackScholes::new();
        let gamma = |strike| {
            bs.greeks(&input(OptionKind::Call, 100.0, strike, 1.0, 0.05, 0.2))
                .unwrap()
                .gamma
        };
        assert!(gamma(100.0) >= gamma(80.0));
        assert!(gamma(100.0) >= gamma(120.0));
    }

    // ==========================================================
    // Greeks vs Finite Difference Tests
    // ==========================================================

    fn call_price(spot: f64, maturity: f64, rate: f64, vol: f64) -> f64 {
        BlackScholes::new()
            .price(&input(OptionKind::Call, spot, 100.0, maturity, rate, vol))
            .unwrap()
    }

    #[test]
    fn test_delta_gamma_vs_finite_diff() {
        let h = 0.01;
        let g = BlackScholes::new().greeks(&atm(OptionKind::Call)).unwrap();

        let up = call_price(100.0 + h, 1.0, 0.05, 0.2);
        let mid = call_price(100.0, 1.0, 0.05, 0.2);
        let dn = call_price(100.0 - h, 1.0, 0.05, 0.2);

        assert_relative_eq!(g.delta, (up - dn) / (2.0 * h), epsilon = 1e-6);
        assert_relative_eq!(g.gamma, (up - 2.0 * mid + dn) / (h * h), epsilon = 1e-4);
    }

    #[test]
    fn test_vega_vs_finite_diff() {
        let h = 1e-4;
        let g = BlackScholes::new().greeks(&atm(OptionKind::Call)).unwrap();
        let fd = (call_price(100.0, 1.0, 0.05, 0.2 + h) - call_price(100.0, 1.0, 0.05, 0.2 - h)) / (2.0 * h);
        assert_relative_eq!(g.vega, fd, epsilon = 1e-5);
    }

    #[test]
    fn test_theta_vs_finite_diff() {
        // Theta is the derivative with respect to calendar time: -∂V/∂T
        let h = 1e-4;
        let g = BlackScholes::new().greeks(&atm(OptionKind::Call)).unwrap();
        let fd = -(call_price(100.0, 1.0 + h, 0.05, 0.2) - call_price(100.0, 1.0 - h, 0.05, 0.2)) / (2.0 * h);
        assert_relative_eq!(g.theta, fd, epsilon = 1e-5);
    }

    #[test]
    fn test_rho_vs_finite_diff() {
        let h = 1e-5;
        let g = BlackScholes::new().greeks(&atm(OptionKind::Call)).unwrap();
        let fd = (call_price(100.0, 1.0, 0.05 + h, 0.2) - call_price(100.0, 1.0, 0.05 - h, 0.2)) / (2.0 * h);
        assert_relative_eq!(g.rho, fd, epsilon = 1e-4);
    }

    // ==========================================================
    // Single-pass evaluation
    // ==========================================================

    #[test]
    fn test_evaluate_matches_separate_calls() {
        let bs = BlackScholes::new();
        for kind in [OptionKind::Call, OptionKind::Put] {
            let option = input(kind, 87.5, 92.0, 0.4, 0.015, 0.35);
            let result = bs.evaluate(&option).unwrap();
            assert_eq!(result.price, bs.price(&option).unwrap());
            assert_eq!(result.greeks, bs.greeks(&option).unwrap());
        }
    }

    #[test]
    fn test_evaluate_degenerate_input() {
        let tiny = input(OptionKind::Put, 100.0, 100.0, 1e-320, 0.05, 1e-160);
        let err = BlackScholes::new().evaluate(&tiny).unwrap_err();
        assert!(err.is_numeric_degenerate());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_pricing_result_serialises_flat() {
        let result = PricingResult {
            price: 1.5,
            greeks: Greeks {
                delta: 0.5,
                gamma: 0.01,
                vega: 20.0,
                theta: -3.0,
                rho: 10.0,
            },
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["price"], 1.5);
        assert_eq!(json["delta"], 0.5);
        assert_eq!(json["rho"], 10.0);
    }
}
