//! JSON rendering of priced options.

use pricer_core::types::PricingError;
use pricer_models::analytical::PricingResult;
use pricer_models::instruments::OptionInput;
use serde::Serialize;

use super::BookRow;
use crate::Result;

#[derive(Serialize)]
struct JsonRow<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<&'a OptionInput>,
    /// Type text of a row rejected before validation
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a PricingResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a PricingError>,
}

/// Renders `[{ "line": n, "input": {..}, "result": {..} | "error": {..} }, ..]`.
///
/// Rows rejected while loading have no `input`; they carry their `type`
/// text and the `error` instead.
pub fn render_json(book: &[BookRow]) -> Result<String> {
    let rows: Vec<JsonRow<'_>> = book
        .iter()
        .map(|row| JsonRow {
            line: row.line,
            input: row.input.as_ref(),
            kind: row.input.is_none().then_some(row.kind.as_str()),
            result: row.result(),
            error: row.error(),
        })
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}
