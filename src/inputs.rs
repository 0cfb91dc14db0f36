use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::trace;

use crate::types::TipError;

/// Trait for converting various types into `Decimal` for tip calculations.
///
/// This lets callers pass `i32`, `f64`, `&str`, etc. directly without
/// wrapping them in `dec!()` or `Decimal::from()`.
pub trait IntoTipDecimal {
    fn into_tip_decimal(self) -> Result<Decimal, TipError>;
}

impl IntoTipDecimal for Decimal {
    fn into_tip_decimal(self) -> Result<Decimal, TipError> {
        Ok(self)
    }
}

macro_rules! impl_into_tip_decimal_int {
    ($($t:ty),*) => {
        $(
            impl IntoTipDecimal for $t {
                fn into_tip_decimal(self) -> Result<Decimal, TipError> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_tip_decimal_int!(i32, u32, i64, u64, isize, usize);

macro_rules! impl_into_tip_decimal_float {
    ($($t:ty),*) => {
        $(
            impl IntoTipDecimal for $t {
                fn into_tip_decimal(self) -> Result<Decimal, TipError> {
                    // Shortest round-trip text keeps 0.1 as 0.1 rather than its binary expansion.
                    parse_decimal(&self.to_string())
                        .ok_or_else(|| TipError::InvalidInput(format!("Invalid float value: {}", self)))
                }
            }
        )*
    };
}

impl_into_tip_decimal_float!(f32, f64);

impl IntoTipDecimal for &str {
    fn into_tip_decimal(self) -> Result<Decimal, TipError> {
        parse_decimal(self)
            .ok_or_else(|| TipError::InvalidInput(format!("Invalid number: '{}'", self)))
    }
}

impl IntoTipDecimal for String {
    fn into_tip_decimal(self) -> Result<Decimal, TipError> {
        self.as_str().into_tip_decimal()
    }
}

/// Strict parse: plain or scientific notation, no surrounding whitespace.
fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Parses raw field text, mapping anything unparseable to zero.
///
/// Empty text, letters, `NaN`, `Infinity`, values out of `Decimal` range and
/// comma decimal separators all yield `Decimal::ZERO`. Negative values are
/// passed through unchanged.
pub fn parse_or_zero(text: &str) -> Decimal {
    let trimmed = text.trim();
    match parse_decimal(trimmed) {
        Some(value) => value,
        None => {
            if !trimmed.is_empty() {
                trace!(input = %trimmed, "unparseable number treated as zero");
            }
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_or_zero_plain_numbers() {
        assert_eq!(parse_or_zero("33"), dec!(33));
        assert_eq!(parse_or_zero("12.5"), dec!(12.5));
        assert_eq!(parse_or_zero(" 7.25 "), dec!(7.25));
    }

    #[test]
    fn test_parse_or_zero_invalid_is_zero() {
        for text in ["", "   ", "abc", "12,5", "NaN", "Infinity", "1.2.3", "$10"] {
            assert_eq!(parse_or_zero(text), Decimal::ZERO, "input {:?}", text);
        }
    }

    #[test]
    fn test_parse_or_zero_out_of_range_is_zero() {
        for text in ["1e40", "-1e40", "79228162514264337593543950336"] {
            assert_eq!(parse_or_zero(text), Decimal::ZERO, "input {:?}", text);
        }
        assert_eq!(parse_or_zero("79228162514264337593543950335"), Decimal::MAX);
        assert_eq!(parse_or_zero("-79228162514264337593543950335"), Decimal::MIN);
    }

    #[test]
    fn test_parse_or_zero_keeps_negatives() {
        assert_eq!(parse_or_zero("-20"), dec!(-20));
    }

    #[test]
    fn test_parse_or_zero_scientific() {
        assert_eq!(parse_or_zero("1e2"), dec!(100));
        assert_eq!(parse_or_zero("2.5e-1"), dec!(0.25));
    }

    #[test]
    fn test_into_tip_decimal_variants() {
        assert_eq!(15.into_tip_decimal().unwrap(), dec!(15));
        assert_eq!(0.1f64.into_tip_decimal().unwrap(), dec!(0.1));
        assert_eq!("4.95".into_tip_decimal().unwrap(), dec!(4.95));
        assert_eq!(String::from("20").into_tip_decimal().unwrap(), dec!(20));
        assert!("".into_tip_decimal().is_err());
        assert!("ten".into_tip_decimal().is_err());
        assert!(f64::INFINITY.into_tip_decimal().is_err());
    }
}
