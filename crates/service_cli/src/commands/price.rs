//! Price command implementation
//!
//! Prices an option book loaded from a CSV or TOML file, renders it and
//! writes the CSV export.

use std::io::Write;
use std::path::PathBuf;

use pricer_risk::{
    price_all, price_all_parallel, BatchSummary, ParallelConfig, PricedOption, DEFAULT_BATCH_SIZE,
};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::input::{load_options, LoadedRow};
use crate::output::{
    export_csv, render_json, render_prices, render_table, write_csv, BookRow, OutputFormat,
};
use crate::Result;

/// Arguments of the price command
#[derive(Debug, Clone)]
pub struct PriceArgs {
    /// Option file (CSV or TOML)
    pub input: PathBuf,
    /// Output format; `None` follows `show_greeks` from the configuration
    pub format: Option<OutputFormat>,
    /// Export path overriding the configured one
    pub export: Option<PathBuf>,
    /// Use Rayon once the book reaches the configured threshold
    pub parallel: bool,
}

/// Run the price command
pub fn run<W: Write>(args: &PriceArgs, config: &CliConfig, out: &mut W) -> Result<BatchSummary> {
    info!(input = %args.input.display(), parallel = args.parallel, "Starting pricing");

    let rows = load_options(&args.input)?;
    if rows.is_empty() {
        warn!(input = %args.input.display(), "Option file contains no options");
    }

    let inputs: Vec<_> = rows
        .iter()
        .filter_map(|row| row.input.as_ref().ok().copied())
        .collect();

    let priced = if args.parallel {
        let parallel = ParallelConfig::new(DEFAULT_BATCH_SIZE, config.parallel_threshold);
        price_all_parallel(&inputs, &parallel)
    } else {
        price_all(&inputs)
    };

    let book = merge_book(rows, priced);

    let format = args.format.unwrap_or(if config.show_greeks {
        OutputFormat::Table
    } else {
        OutputFormat::Prices
    });

    match format {
        OutputFormat::Table => write!(out, "{}", render_table(&book, config.precision, true))?,
        OutputFormat::Prices => write!(out, "{}", render_prices(&book, config.precision))?,
        OutputFormat::Json => writeln!(out, "{}", render_json(&book)?)?,
        OutputFormat::Csv => {
            write_csv(&mut *out, &book)?;
        }
    }

    let export_path = args.export.as_ref().unwrap_or(&config.export_path);
    export_csv(export_path, &book)?;

    let summary = BatchSummary::from_outcomes(book.iter().map(|row| &row.outcome));
    info!(
        total = summary.total,
        priced = summary.priced,
        failed = summary.failed(),
        "Pricing complete"
    );
    Ok(summary)
}

/// Puts priced options back between the rows rejected while loading.
///
/// `priced` holds one entry per valid row, in file order.
fn merge_book(rows: Vec<LoadedRow>, priced: Vec<PricedOption>) -> Vec<BookRow> {
    let mut priced = priced.into_iter();
    rows.into_iter()
        .filter_map(|row| match row.input {
            Ok(_) => priced.next().map(|p| BookRow::from(p).at_line(row.line)),
            Err(err) => {
                warn!(line = row.line, error = %err, "Option rejected");
                Some(BookRow::rejected(row.line, &row.kind, err))
            }
        })
        .collect()
}
