//! Display rows of an option book.
//!
//! A [`BookRow`] is what every renderer consumes. Rows rejected while
//! loading carry no validated input, so they keep the type text from the
//! file next to their error and still show up in order.

use pricer_core::types::PricingError;
use pricer_models::analytical::PricingResult;
use pricer_models::instruments::OptionInput;
use pricer_risk::PricedOption;

/// One option of a book as presented to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRow {
    /// Source line or table index, `None` for prompted options
    pub line: Option<u64>,
    /// Option type label shown in the type column
    pub kind: String,
    /// Validated input, `None` if the row was rejected before pricing
    pub input: Option<OptionInput>,
    /// Price and Greeks, or the reason the option has none
    pub outcome: Result<PricingResult, PricingError>,
}

impl BookRow {
    /// A row rejected before it reached the engine.
    pub fn rejected(line: u64, kind: &str, error: PricingError) -> Self {
        let kind = kind.trim();
        Self {
            line: Some(line),
            kind: if kind.is_empty() { "?".to_string() } else { kind.to_lowercase() },
            input: None,
            outcome: Err(error),
        }
    }

    /// Attaches the source line of a priced option.
    pub fn at_line(mut self, line: u64) -> Self {
        self.line = Some(line);
        self
    }

    /// Returns the pricing result if the option was priced.
    pub fn result(&self) -> Option<&PricingResult> {
        self.outcome.as_ref().ok()
    }

    /// Returns the failure if the option has no result.
    pub fn error(&self) -> Option<&PricingError> {
        self.outcome.as_ref().err()
    }
}

impl From<PricedOption> for BookRow {
    fn from(priced: PricedOption) -> Self {
        Self {
            line: None,
            kind: priced.input.kind().label().to_string(),
            input: Some(priced.input),
            outcome: priced.outcome,
        }
    }
}

/// Converts a priced batch into display rows, keeping its order.
pub fn book_rows(priced: Vec<PricedOption>) -> Vec<BookRow> {
    priced.into_iter().map(BookRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::OptionKind;
    use pricer_risk::price_all;

    #[test]
    fn test_rejected_row_normalises_kind() {
        let row = BookRow::rejected(4, " Put ", PricingError::invalid_input("T must be positive"));
        assert_eq!(row.line, Some(4));
        assert_eq!(row.kind, "put");
        assert!(row.input.is_none());
        assert!(row.error().unwrap().is_invalid_input());

        let blank = BookRow::rejected(5, "", PricingError::invalid_input("missing field"));
        assert_eq!(blank.kind, "?");
    }

    #[test]
    fn test_from_priced_option() {
        let put = OptionInput::new(OptionKind::Put, 100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        let rows = book_rows(price_all(&[put]));

        assert_eq!(rows[0].kind, "put");
        assert_eq!(rows[0].input, Some(put));
        assert!(rows[0].result().is_some());
        assert_eq!(rows[0].clone().at_line(2).line, Some(2));
    }
}
