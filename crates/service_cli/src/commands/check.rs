//! Check command implementation
//!
//! Prints the effective configuration and runs a self-test of the engine
//! against textbook values.

use std::io::Write;
use std::path::Path;

use pricer_core::types::OptionKind;
use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::OptionInput;
use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

const TOLERANCE: f64 = 1e-4;

/// S=K=100, T=1, r=0.05, σ=0.2
const CALL_REFERENCE: [(&str, f64); 6] = [
    ("price", 10.450583572185565),
    ("delta", 0.6368306511756191),
    ("gamma", 0.018762017345846895),
    ("vega", 37.52403469169379),
    ("theta", -6.414027546438197),
    ("rho", 53.232481545376345),
];

const PUT_REFERENCE: [(&str, f64); 6] = [
    ("price", 5.573526022256971),
    ("delta", -0.3631693488243809),
    ("gamma", 0.018762017345846895),
    ("vega", 37.52403469169379),
    ("theta", -1.657880423934626),
    ("rho", -41.89046090469506),
];

/// Run the check command
pub fn run<W: Write>(config: &CliConfig, config_path: &Path, out: &mut W) -> Result<()> {
    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        "defaults".to_string()
    };

    writeln!(out, "Configuration ({}):", source)?;
    writeln!(out, "  export_path        = {}", config.export_path.display())?;
    writeln!(out, "  precision          = {}", config.precision)?;
    writeln!(out, "  show_greeks        = {}", config.show_greeks)?;
    writeln!(out, "  log_level          = {}", config.log_level)?;
    writeln!(out, "  parallel_threshold = {}", config.parallel_threshold)?;
    writeln!(out)?;
    writeln!(out, "Self-test (S=100, K=100, T=1, r=0.05, sigma=0.2):")?;

    let engine = BlackScholes::new();
    let call = OptionInput::new(OptionKind::Call, 100.0, 100.0, 1.0, 0.05, 0.2)
        .map_err(pricer_core::types::PricingError::from)?;

    let mut failures = Vec::new();
    for (kind, reference) in [(OptionKind::Call, CALL_REFERENCE), (OptionKind::Put, PUT_REFERENCE)] {
        let result = engine.evaluate(&call.with_kind(kind))?;
        let g = result.greeks;
        let actual = [result.price, g.delta, g.gamma, g.vega, g.theta, g.rho];

        for ((name, expected), value) in reference.iter().zip(actual) {
            let ok = (value - expected).abs() <= TOLERANCE;
            writeln!(
                out,
                "  {:<4} {:<5} {:>12.6} (expected {:>12.6}) {}",
                kind,
                name,
                value,
                expected,
                if ok { "ok" } else { "FAIL" }
            )?;
            if !ok {
                failures.push(format!("{} {}", kind, name));
            }
        }
    }

    if failures.is_empty() {
        writeln!(out, "All checks passed")?;
        info!("Self-test passed");
        Ok(())
    } else {
        Err(CliError::SelfTest(failures.join(", ")))
    }
}
