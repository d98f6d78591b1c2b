//! Interactive command implementation
//!
//! Prompts for one or more options, displays prices or Greeks and writes
//! the CSV export.

use std::io::{BufRead, Write};

use pricer_risk::{price_all, BatchSummary};
use tracing::info;

use crate::config::CliConfig;
use crate::input::{DisplayChoice, Prompter};
use crate::output::{book_rows, export_csv, render_prices, render_table, BookRow};
use crate::Result;

/// Run the interactive command over the given streams
pub fn run<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    config: &CliConfig,
) -> Result<Vec<BookRow>> {
    let mut prompter = Prompter::new(reader, writer);
    let inputs = prompter.read_options()?;
    let choice = prompter.read_display_choice()?;

    let book = book_rows(price_all(&inputs));
    let mut out = prompter.into_writer();

    match choice {
        DisplayChoice::Price => write!(out, "{}", render_prices(&book, config.precision))?,
        DisplayChoice::Greeks => write!(out, "{}", render_table(&book, config.precision, true))?,
    }

    let written = export_csv(&config.export_path, &book)?;
    writeln!(
        out,
        "{} option(s) exported to {}",
        written,
        config.export_path.display()
    )?;
    out.flush()?;

    let summary = BatchSummary::from_outcomes(book.iter().map(|row| &row.outcome));
    info!(options = summary.total, failed = summary.failed(), "Interactive session complete");
    Ok(book)
}
