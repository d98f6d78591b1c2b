//! Option book loading from CSV and TOML files.
//!
//! CSV files carry the export header names `type,S,K,T,r,sigma`; TOML files
//! hold one `[[option]]` table per option with the same keys (or their long
//! aliases). Rows are parsed independently so a malformed row is reported
//! against its own line without discarding the rest of the book.

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use pricer_core::types::{OptionKind, PricingError};
use pricer_models::instruments::OptionInput;
use serde::Deserialize;
use tracing::debug;

use crate::{CliError, Result};

/// One row of an option file before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOption {
    /// Option type, `call` or `put` in any case
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,
    /// Spot price
    #[serde(rename = "S", alias = "spot")]
    pub spot: f64,
    /// Strike price
    #[serde(rename = "K", alias = "strike")]
    pub strike: f64,
    /// Time to maturity in years
    #[serde(rename = "T", alias = "maturity")]
    pub maturity: f64,
    /// Risk-free rate
    #[serde(rename = "r", alias = "rate")]
    pub rate: f64,
    /// Volatility
    #[serde(rename = "sigma", alias = "volatility")]
    pub volatility: f64,
}

impl RawOption {
    /// Validates the row into an `OptionInput`.
    pub fn into_input(self) -> std::result::Result<OptionInput, PricingError> {
        let kind: OptionKind = self.kind.parse()?;
        Ok(OptionInput::new(
            kind,
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
        )?)
    }
}

/// A loaded row: its location in the source file and its validation outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRow {
    /// 1-based line (CSV) or table index (TOML)
    pub line: u64,
    /// Option type as written in the file, empty when the cell is missing
    pub kind: String,
    /// Validated input or the reason it was rejected
    pub input: std::result::Result<OptionInput, PricingError>,
}

/// Supported option file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// TOML with `[[option]]` tables
    Toml,
}

impl InputFormat {
    /// Infers the format from a file extension (`.toml`, otherwise CSV).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => InputFormat::Toml,
            _ => InputFormat::Csv,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OptionFile {
    #[serde(rename = "option", default)]
    options: Vec<RawOption>,
}

/// Loads every row of an option file.
///
/// # Errors
/// `FileNotFound` if the file is missing, `Input` if the file as a whole
/// cannot be parsed (bad header, bad TOML). Row-level problems are
/// returned inside each [`LoadedRow`].
pub fn load_options(path: &Path) -> Result<Vec<LoadedRow>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let format = InputFormat::from_path(path);
    debug!(path = %path.display(), ?format, "Loading option file");

    match format {
        InputFormat::Csv => parse_csv(&content),
        InputFormat::Toml => parse_toml(&content),
    }
}

/// Parses CSV text with a `type,S,K,T,r,sigma` header.
pub fn parse_csv(content: &str) -> Result<Vec<LoadedRow>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());
    let headers = reader.headers()?.clone();

    for required in ["type", "S", "K", "T", "r", "sigma"] {
        if !headers.iter().any(|h| h == required) {
            return Err(CliError::input(format!(
                "CSV header is missing column '{}' (expected type,S,K,T,r,sigma)",
                required
            )));
        }
    }

    let type_column = headers.iter().position(|h| h == "type");

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        // Header is line 1
        let fallback_line = index as u64 + 2;

        let record = match record {
            Ok(record) => record,
            Err(err) => {
                let line = err
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(fallback_line);
                rows.push(LoadedRow {
                    line,
                    kind: String::new(),
                    input: Err(PricingError::invalid_input(err.to_string())),
                });
                continue;
            }
        };

        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(fallback_line);
        let kind = type_column
            .and_then(|column| record.get(column))
            .unwrap_or_default()
            .to_string();

        let input = if record.len() != headers.len() {
            Err(PricingError::invalid_input(format!(
                "expected {} fields, found {}",
                headers.len(),
                record.len()
            )))
        } else {
            record
                .deserialize::<RawOption>(Some(&headers))
                .map_err(|e| PricingError::invalid_input(e.to_string()))
                .and_then(RawOption::into_input)
        };

        rows.push(LoadedRow { line, kind, input });
    }

    Ok(rows)
}

/// Parses TOML text with `[[option]]` tables.
pub fn parse_toml(content: &str) -> Result<Vec<LoadedRow>> {
    let file: OptionFile =
        toml::from_str(content).map_err(|e| CliError::input(format!("TOML: {}", e)))?;

    Ok(file
        .options
        .into_iter()
        .enumerate()
        .map(|(index, raw)| LoadedRow {
            line: index as u64 + 1,
            kind: raw.kind.trim().to_string(),
            input: raw.into_input(),
        })
        .collect())
}
