//! Error types for the `bsm` command line.

use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Malformed option input file
    #[error("Input error: {0}")]
    Input(String),

    /// Interactive input ended before all fields were collected
    #[error("Input closed before the option was complete")]
    InputClosed,

    /// Pricing error surfaced to the caller
    #[error(transparent)]
    Pricing(#[from] pricer_core::types::PricingError),

    /// Self-test mismatch
    #[error("Self-test failed: {0}")]
    SelfTest(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read or write error
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create an input error
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::PricingError;

    #[test]
    fn test_error_display() {
        let err = CliError::input("line 3: missing column 'sigma'");
        assert_eq!(err.to_string(), "Input error: line 3: missing column 'sigma'");
    }

    #[test]
    fn test_pricing_error_is_transparent() {
        let err: CliError = PricingError::invalid_input("spot must be positive").into();
        assert_eq!(err.to_string(), "Invalid input: spot must be positive");
    }

    #[test]
    fn test_csv_error_prefixed_once() {
        let mut reader = csv::ReaderBuilder::new().from_reader("a,b\n1\n".as_bytes());
        let csv_err = reader.records().next().unwrap().unwrap_err();
        let expected = csv_err.to_string();

        let err: CliError = csv_err.into();
        let msg = err.to_string();
        assert_eq!(msg, expected);
        assert_eq!(msg.matches("CSV error").count(), 1, "{msg}");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: CliError = ConfigError::Validation(vec!["precision 40 exceeds 12".into()]).into();
        assert!(err.to_string().contains("precision 40"));
    }
}
