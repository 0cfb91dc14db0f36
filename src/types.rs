use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

use crate::inputs::{IntoTipDecimal, parse_or_zero};

/// Tip percentage applied when the caller does not supply one.
pub const DEFAULT_TIP_PERCENT: Decimal = dec!(15);

/// Errors raised while building inputs, configuration or formatters.
///
/// The tip calculation itself never fails; these only surface on the
/// construction paths that accept untrusted values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum TipError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Currency formatter error: {0}")]
    Formatter(String),
}

/// One snapshot of the values the user has entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TipInput {
    /// The pre-tip total.
    pub bill_amount: Decimal,
    /// Percentage rate applied to the bill. Not restricted to non-negative values.
    pub tip_percent: Decimal,
    /// Round the tip up to the next whole currency unit.
    pub round_up: bool,
}

impl Default for TipInput {
    fn default() -> Self {
        Self {
            bill_amount: Decimal::ZERO,
            tip_percent: DEFAULT_TIP_PERCENT,
            round_up: false,
        }
    }
}

impl TipInput {
    pub fn new(
        bill_amount: impl IntoTipDecimal,
        tip_percent: impl IntoTipDecimal,
        round_up: bool,
    ) -> Result<Self, TipError> {
        Ok(Self {
            bill_amount: bill_amount.into_tip_decimal()?,
            tip_percent: tip_percent.into_tip_decimal()?,
            round_up,
        })
    }

    /// Builds an input from raw field text. Unparseable text counts as zero.
    pub fn from_text(amount_text: &str, percent_text: &str, round_up: bool) -> Self {
        Self {
            bill_amount: parse_or_zero(amount_text),
            tip_percent: parse_or_zero(percent_text),
            round_up,
        }
    }

    /// Input for a bill with the percentage left out: 15%, no rounding.
    pub fn with_default_percent(bill_amount: impl IntoTipDecimal) -> Result<Self, TipError> {
        Ok(Self {
            bill_amount: bill_amount.into_tip_decimal()?,
            ..Default::default()
        })
    }

    pub fn round_up(mut self, round_up: bool) -> Self {
        self.round_up = round_up;
        self
    }
}

/// Kind of step recorded in a [`CalculationStep`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, strum::Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Operation {
    Initial,
    Rate,
    Multiply,
    Ceiling,
    Result,
    Info,
}

impl Operation {
    fn symbol(&self) -> &'static str {
        match self {
            Operation::Initial => " ",
            Operation::Rate => "%",
            Operation::Multiply => "x",
            Operation::Ceiling => "^",
            Operation::Result => "=",
            Operation::Info => " ",
        }
    }
}

/// A single step in the tip calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CalculationStep {
    pub description: String,
    pub amount: Option<Decimal>,
    pub operation: Operation,
}

impl CalculationStep {
    fn with_amount(operation: Operation, description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation,
        }
    }

    pub fn initial(description: impl Into<String>, amount: Decimal) -> Self {
        Self::with_amount(Operation::Initial, description, amount)
    }

    pub fn rate(description: impl Into<String>, percent: Decimal) -> Self {
        Self::with_amount(Operation::Rate, description, percent)
    }

    pub fn multiply(description: impl Into<String>, amount: Decimal) -> Self {
        Self::with_amount(Operation::Multiply, description, amount)
    }

    pub fn ceiling(description: impl Into<String>, amount: Decimal) -> Self {
        Self::with_amount(Operation::Ceiling, description, amount)
    }

    pub fn result(description: impl Into<String>, amount: Decimal) -> Self {
        Self::with_amount(Operation::Result, description, amount)
    }

    pub fn info(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: None,
            operation: Operation::Info,
        }
    }
}

/// Result of a tip calculation, with the formatted amount and a step trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TipBreakdown {
    pub input: TipInput,
    /// `tip_percent / 100 * bill_amount` before any rounding.
    pub raw_tip: Decimal,
    /// The tip after the optional ceiling.
    pub tip: Decimal,
    /// True only when the ceiling changed the value.
    pub rounded: bool,
    /// Locale-formatted currency string for `tip`.
    pub formatted: String,
    pub trace: Vec<CalculationStep>,
}

impl TipBreakdown {
    /// Step-by-step explanation of how the tip was derived.
    pub fn explain(&self) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_explanation(&mut output);
        output
    }

    fn write_explanation(&self, out: &mut impl Write) -> fmt::Result {
        let width = self
            .trace
            .iter()
            .map(|step| step.description.len())
            .max()
            .unwrap_or(12)
            .max(12);

        writeln!(out, "{:-<44}", "")?;
        for step in &self.trace {
            match step.amount {
                Some(amount) => writeln!(
                    out,
                    "  {:<width$} : {} {:>12} ({})",
                    step.description,
                    step.operation.symbol(),
                    amount.normalize(),
                    step.operation,
                    width = width
                )?,
                None => writeln!(out, "  INFO: {}", step.description)?,
            }
        }
        writeln!(out, "{:-<44}", "")?;
        writeln!(out, "Tip: {}", self.formatted)
    }
}

impl fmt::Display for TipBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tip: {}", self.formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input_uses_fifteen_percent() {
        let input = TipInput::with_default_percent(80).unwrap();
        assert_eq!(input.tip_percent, dec!(15));
        assert_eq!(input.bill_amount, dec!(80));
        assert!(!input.round_up);
    }

    #[test]
    fn test_from_text_coerces_garbage_to_zero() {
        let input = TipInput::from_text("abc", "", true);
        assert_eq!(input.bill_amount, Decimal::ZERO);
        assert_eq!(input.tip_percent, Decimal::ZERO);
        assert!(input.round_up);
    }

    #[test]
    fn test_new_rejects_non_finite_float() {
        let res = TipInput::new(f64::NAN, 15, false);
        assert!(matches!(res, Err(TipError::InvalidInput(_))));
    }

    #[test]
    fn test_operation_display_is_camel_case() {
        assert_eq!(Operation::Ceiling.to_string(), "ceiling");
        assert_eq!(Operation::Initial.to_string(), "initial");
    }
}
