//! Batch evaluation of option books.
//!
//! Each input is evaluated independently through
//! [`BlackScholes::evaluate`]; a failure is recorded against its own input
//! and the remaining options are still priced.

use pricer_core::types::PricingError;
use pricer_models::analytical::{BlackScholes, PricingResult};
use pricer_models::instruments::OptionInput;
use tracing::{debug, info};

use crate::parallel::{parallel_map, ParallelConfig};

/// One option of a batch together with its pricing outcome.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricedOption {
    /// The evaluated input
    pub input: OptionInput,
    /// Price and Greeks, or the reason the option could not be priced
    pub outcome: Result<PricingResult, PricingError>,
}

impl PricedOption {
    /// Evaluates one input.
    pub fn evaluate(engine: &BlackScholes, input: &OptionInput) -> Self {
        Self {
            input: *input,
            outcome: engine.evaluate(input),
        }
    }

    /// Returns the pricing result if the option was priced.
    pub fn result(&self) -> Option<&PricingResult> {
        self.outcome.as_ref().ok()
    }

    /// Returns the failure if the option could not be priced.
    pub fn error(&self) -> Option<&PricingError> {
        self.outcome.as_ref().err()
    }
}

/// Prices every input sequentially, in order.
///
/// # Examples
///
/// ```
/// use pricer_core::types::OptionKind;
/// use pricer_models::instruments::OptionInput;
/// use pricer_risk::batch::price_all;
///
/// let inputs = [
///     OptionInput::new(OptionKind::Call, 100.0, 90.0, 0.5, 0.02, 0.25).unwrap(),
///     OptionInput::new(OptionKind::Put, 100.0, 110.0, 0.5, 0.02, 0.25).unwrap(),
/// ];
/// let priced = price_all(&inputs);
/// assert!(priced.iter().all(|p| p.outcome.is_ok()));
/// ```
pub fn price_all(inputs: &[OptionInput]) -> Vec<PricedOption> {
    let engine = BlackScholes::new();
    let priced: Vec<PricedOption> = inputs
        .iter()
        .map(|input| PricedOption::evaluate(&engine, input))
        .collect();
    log_summary(&priced, false);
    priced
}

/// Prices every input, in parallel once the batch reaches
/// `config.parallel_threshold`.
///
/// `result[i]` always corresponds to `inputs[i]`.
pub fn price_all_parallel(inputs: &[OptionInput], config: &ParallelConfig) -> Vec<PricedOption> {
    if !config.should_parallelize(inputs.len()) {
        debug!(
            options = inputs.len(),
            threshold = config.parallel_threshold,
            "Batch below parallel threshold, pricing sequentially"
        );
        return price_all(inputs);
    }

    let engine = BlackScholes::new();
    let priced = parallel_map(inputs, config.batch_size, |input| {
        PricedOption::evaluate(&engine, input)
    });
    log_summary(&priced, true);
    priced
}

fn log_summary(priced: &[PricedOption], parallel: bool) {
    let summary = BatchSummary::from_priced(priced);
    info!(
        total = summary.total,
        priced = summary.priced,
        invalid_input = summary.invalid_input,
        numeric_degenerate = summary.numeric_degenerate,
        parallel,
        "Batch priced"
    );
}

/// Outcome counts of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchSummary {
    /// Number of options evaluated
    pub total: usize,
    /// Number priced successfully
    pub priced: usize,
    /// Number rejected as invalid input
    pub invalid_input: usize,
    /// Number that hit a numerically degenerate evaluation
    pub numeric_degenerate: usize,
}

impl BatchSummary {
    /// Counts outcomes over a slice of results.
    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a Result<PricingResult, PricingError>>,
    {
        outcomes
            .into_iter()
            .fold(Self::default(), |mut summary, outcome| {
                summary.total += 1;
                match outcome {
                    Ok(_) => summary.priced += 1,
                    Err(PricingError::InvalidInput(_)) => summary.invalid_input += 1,
                    Err(PricingError::NumericDegenerate(_)) => summary.numeric_degenerate += 1,
                }
                summary
            })
    }

    /// Counts outcomes over a priced batch.
    pub fn from_priced(priced: &[PricedOption]) -> Self {
        Self::from_outcomes(priced.iter().map(|p| &p.outcome))
    }

    /// Number of options that could not be priced.
    #[inline]
    pub fn failed(&self) -> usize {
        self.invalid_input + self.numeric_degenerate
    }

    /// Returns `true` if every option was priced.
    #[inline]
    pub fn all_priced(&self) -> bool {
        self.failed() == 0
    }
}
