//! Plain-text rendering: bordered Greeks table and price-only lines.

use super::BookRow;

const GREEKS_HEADER: [&str; 7] = ["Type", "Price", "Delta", "Gamma", "Vega", "Theta", "Rho"];
const PRICE_HEADER: [&str; 2] = ["Type", "Price"];

/// Renders a bordered table, one row per option.
///
/// With `show_greeks` unset only the type and price columns are shown. An
/// option that could not be priced shows `error: <reason>` in the price
/// column.
pub fn render_table(book: &[BookRow], precision: usize, show_greeks: bool) -> String {
    let header: &[&str] = if show_greeks { &GREEKS_HEADER } else { &PRICE_HEADER };

    let rows: Vec<Vec<String>> = book
        .iter()
        .map(|row| {
            let mut cells = vec![row.kind.clone()];
            match &row.outcome {
                Ok(result) => {
                    cells.push(format!("{:.*}", precision, result.price));
                    if show_greeks {
                        let g = &result.greeks;
                        for value in [g.delta, g.gamma, g.vega, g.theta, g.rho] {
                            cells.push(format!("{:.*}", precision, value));
                        }
                    }
                }
                Err(err) => {
                    cells.push(format!("error: {}", err));
                    cells.resize(header.len(), String::new());
                }
            }
            cells
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let border = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let format_row = |cells: &[String]| {
        let mut line = String::from("|");
        for (cell, width) in cells.iter().zip(&widths) {
            let pad = width - cell.chars().count();
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(pad + 1));
            line.push('|');
        }
        line
    };

    let header_cells: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    let mut out = Vec::with_capacity(rows.len() + 4);
    out.push(border.clone());
    out.push(format_row(&header_cells));
    out.push(border.clone());
    for row in &rows {
        out.push(format_row(row));
    }
    out.push(border);

    let mut text = out.join("\n");
    text.push('\n');
    text
}

/// Renders one `The price of the <type> option is: <price>` line per option.
pub fn render_prices(book: &[BookRow], precision: usize) -> String {
    book.iter()
        .map(|row| match &row.outcome {
            Ok(result) => format!(
                "The price of the {} option is: {:.*}\n",
                row.kind, precision, result.price
            ),
            Err(err) => format!("The {} option could not be priced: {}\n", row.kind, err),
        })
        .collect()
}
