//! Result presentation: tables, price lines, JSON and the CSV export.

pub mod export;
pub mod json;
pub mod row;
pub mod table;

pub use export::{export_csv, write_csv};
pub use json::render_json;
pub use row::{book_rows, BookRow};
pub use table::{render_prices, render_table};

use clap::ValueEnum;

/// Output format of the `price` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bordered Greeks table
    Table,
    /// One price line per option
    Prices,
    /// JSON array
    Json,
    /// Export CSV on stdout
    Csv,
}
