//! CLI configuration management.
//!
//! Handles loading of `CliConfig` from a TOML file with `BSM_*`
//! environment variable overrides and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest number of decimals accepted for display.
pub const MAX_PRECISION: usize = 12;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Path of the CSV export
    pub export_path: PathBuf,

    /// Decimals shown in tables and price lines
    pub precision: usize,

    /// Show the Greeks table by default (otherwise prices only)
    pub show_greeks: bool,

    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Book size from which `--parallel` actually uses Rayon
    pub parallel_threshold: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            export_path: PathBuf::from("option_data.csv"),
            precision: 4,
            show_greeks: true,
            log_level: "info".to_string(),
            parallel_threshold: pricer_risk::parallel::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from file, falling back to defaults when it is absent
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `BSM_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("BSM_EXPORT_PATH") {
            self.export_path = PathBuf::from(path);
        }

        if let Some(precision) = lookup("BSM_PRECISION") {
            self.precision = parse_env("BSM_PRECISION", &precision)?;
        }

        if let Some(level) = lookup("BSM_LOG_LEVEL") {
            self.log_level = level;
        }

        if let Some(threshold) = lookup("BSM_PARALLEL_THRESHOLD") {
            self.parallel_threshold = parse_env("BSM_PARALLEL_THRESHOLD", &threshold)?;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.precision > MAX_PRECISION {
            errors.push(format!(
                "precision {} exceeds maximum allowed ({})",
                self.precision, MAX_PRECISION
            ));
        }

        if self.export_path.as_os_str().is_empty() {
            errors.push("export_path cannot be empty".to_string());
        }

        if self.parallel_threshold == 0 {
            errors.push("parallel_threshold must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Env(format!("{}='{}' is not a valid number", key, value)))
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Unparseable environment override
    #[error("Environment variable error: {0}")]
    Env(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.export_path, PathBuf::from("option_data.csv"));
        assert_eq!(config.precision, 4);
        assert!(config.show_greeks);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_default_config_validates() {
        assert!(CliConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = CliConfig::from_toml("precision = 6\nshow_greeks = false\n").unwrap();
        assert_eq!(config.precision, 6);
        assert!(!config.show_greeks);
        assert_eq!(config.export_path, PathBuf::from("option_data.csv"));
    }

    #[test]
    fn test_from_toml_unknown_field() {
        let result = CliConfig::from_toml("precison = 6\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "export_path = \"book.csv\"\nlog_level = \"debug\"").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.export_path, PathBuf::from("book.csv"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_env_override() {
        let config = CliConfig::default()
            .with_overrides(lookup(&[
                ("BSM_EXPORT_PATH", "out/greeks.csv"),
                ("BSM_PRECISION", "8"),
                ("BSM_LOG_LEVEL", "warn"),
                ("BSM_PARALLEL_THRESHOLD", " 250 "),
            ]))
            .unwrap();

        assert_eq!(config.export_path, PathBuf::from("out/greeks.csv"));
        assert_eq!(config.precision, 8);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.parallel_threshold, 250);
    }

    #[test]
    fn test_env_override_not_a_number() {
        let result = CliConfig::default().with_overrides(lookup(&[("BSM_PRECISION", "four")]));
        match result {
            Err(ConfigError::Env(msg)) => assert!(msg.contains("BSM_PRECISION")),
            other => panic!("Expected Env error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let config = CliConfig {
            log_level: "verbose".to_string(),
            ..CliConfig::default()
        };

        if let Err(ConfigError::Validation(errors)) = config.validate() {
            assert!(errors.iter().any(|e| e.contains("log_level")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in ["trace", "debug", "info", "warn", "error", "INFO", "DEBUG"] {
            let config = CliConfig {
                log_level: level.to_string(),
                ..CliConfig::default()
            };
            assert!(config.validate().is_ok(), "Log level '{}' should be valid", level);
        }
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = CliConfig {
            export_path: PathBuf::new(),
            precision: 20,
            show_greeks: true,
            log_level: "loud".to_string(),
            parallel_threshold: 0,
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 4),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }
}
