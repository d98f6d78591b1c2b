//! Flat CSV export of priced options.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use super::BookRow;
use crate::Result;

/// One exported row. Field order is the column order.
#[derive(Debug, Serialize)]
struct ExportRow {
    #[serde(rename = "Type")]
    kind: &'static str,
    #[serde(rename = "S")]
    spot: f64,
    #[serde(rename = "K")]
    strike: f64,
    #[serde(rename = "T")]
    maturity: f64,
    r: f64,
    sigma: f64,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Delta")]
    delta: f64,
    #[serde(rename = "Gamma")]
    gamma: f64,
    #[serde(rename = "Vega")]
    vega: f64,
    #[serde(rename = "Theta")]
    theta: f64,
    #[serde(rename = "Rho")]
    rho: f64,
}

/// Writes the export CSV to any writer and returns the number of rows written.
///
/// Only successfully priced options are written; each skipped option is
/// reported with a warning.
pub fn write_csv<W: Write>(writer: W, book: &[BookRow]) -> Result<usize> {
    let mut csv = csv::Writer::from_writer(writer);
    let mut written = 0;

    for (index, row) in book.iter().enumerate() {
        let (input, result) = match (&row.input, &row.outcome) {
            (Some(input), Ok(result)) => (input, result),
            (_, outcome) => {
                let error = outcome.as_ref().err().map(ToString::to_string);
                warn!(index, line = ?row.line, kind = %row.kind, ?error, "Option not exported");
                continue;
            }
        };

        csv.serialize(ExportRow {
            kind: input.kind().label(),
            spot: input.spot(),
            strike: input.strike(),
            maturity: input.maturity(),
            r: input.rate(),
            sigma: input.volatility(),
            price: result.price,
            delta: result.greeks.delta,
            gamma: result.greeks.gamma,
            vega: result.greeks.vega,
            theta: result.greeks.theta,
            rho: result.greeks.rho,
        })?;
        written += 1;
    }

    if written == 0 {
        // serialize() only emits the header alongside the first row
        csv.write_record(EXPORT_HEADER)?;
    }

    csv.flush()?;
    Ok(written)
}

/// Export column names.
pub const EXPORT_HEADER: [&str; 12] = [
    "Type", "S", "K", "T", "r", "sigma", "Price", "Delta", "Gamma", "Vega", "Theta", "Rho",
];

/// Writes the export CSV to `path`, replacing any existing file.
pub fn export_csv(path: &Path, book: &[BookRow]) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let written = write_csv(file, book)?;

    info!(
        path = %path.display(),
        rows = written,
        skipped = book.len() - written,
        "Options exported to CSV"
    );

    Ok(written)
}
