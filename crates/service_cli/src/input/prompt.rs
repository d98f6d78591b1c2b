//! Interactive prompting for option parameters.
//!
//! Generic over `BufRead`/`Write` so the prompt flow can be driven from a
//! terminal or from an in-memory script.

use std::io::{BufRead, Write};

use pricer_core::types::OptionKind;
use pricer_models::instruments::OptionInput;
use tracing::debug;

use crate::{CliError, Result};

/// What to display once input collection is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayChoice {
    /// Price lines only
    Price,
    /// Full Greeks table
    Greeks,
}

/// Line-oriented prompter.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the prompter and returns its output stream.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.writer, "{}", question)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn complain(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }

    /// Reads a number, reprompting until it parses and satisfies `accept`.
    pub fn read_number<F>(&mut self, question: &str, requirement: &str, accept: F) -> Result<f64>
    where
        F: Fn(f64) -> bool,
    {
        loop {
            let answer = self.ask(question)?;
            match answer.parse::<f64>() {
                Ok(value) if accept(value) => return Ok(value),
                Ok(value) => {
                    debug!(value, requirement, "Rejected prompt value");
                    self.complain(&format!("Invalid value {}: {}.", value, requirement))?;
                }
                Err(_) => {
                    self.complain(&format!("'{}' is not a number. Please enter a number.", answer))?;
                }
            }
        }
    }

    /// Reads an option type, reprompting until it is `call` or `put`.
    pub fn read_kind(&mut self) -> Result<OptionKind> {
        loop {
            let answer = self.ask("Enter the option type (call/put): ")?;
            match answer.parse::<OptionKind>() {
                Ok(kind) => return Ok(kind),
                Err(_) => self.complain("Invalid option type. Please enter 'call' or 'put'.")?,
            }
        }
    }

    /// Reads a yes/no answer.
    pub fn read_yes_no(&mut self, question: &str) -> Result<bool> {
        loop {
            let answer = self.ask(question)?;
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.complain("Please answer 'y' or 'n'.")?,
            }
        }
    }

    /// Reads the display choice.
    pub fn read_display_choice(&mut self) -> Result<DisplayChoice> {
        loop {
            let answer = self.ask("Do you want to display prices or greeks? (price/greeks): ")?;
            match answer.to_lowercase().as_str() {
                "price" | "prices" => return Ok(DisplayChoice::Price),
                "greeks" | "greek" => return Ok(DisplayChoice::Greeks),
                _ => self.complain("Please answer 'price' or 'greeks'.")?,
            }
        }
    }

    /// Collects one option field by field.
    ///
    /// Each field is reprompted on its own until it satisfies the model's
    /// domain, so the final construction cannot fail on a validation rule.
    pub fn read_option(&mut self) -> Result<OptionInput> {
        let positive = |x: f64| x.is_finite() && x > 0.0;

        let spot = self.read_number(
            "Enter the current stock price (S): ",
            "the stock price must be positive",
            positive,
        )?;
        let strike = self.read_number(
            "Enter the strike price (K): ",
            "the strike price must be positive",
            positive,
        )?;
        let maturity = self.read_number(
            "Enter the time to maturity in years (T): ",
            "the time to maturity must be positive",
            positive,
        )?;
        let rate = self.read_number(
            "Enter the risk-free interest rate (r): ",
            "the rate must be a finite number",
            f64::is_finite,
        )?;
        let volatility = self.read_number(
            "Enter the volatility (sigma): ",
            "the volatility must be positive",
            positive,
        )?;
        let kind = self.read_kind()?;

        Ok(OptionInput::new(kind, spot, strike, maturity, rate, volatility)
            .map_err(pricer_core::types::PricingError::from)?)
    }

    /// Collects options until the user declines to enter another.
    pub fn read_options(&mut self) -> Result<Vec<OptionInput>> {
        let mut options = Vec::new();
        loop {
            options.push(self.read_option()?);
            if !self.read_yes_no("Do you want to enter another option? (y/n): ")? {
                return Ok(options);
            }
        }
    }
}
