//! Locale-aware currency rendering.
//!
//! Number shaping (grouping, decimal separator, digits) comes from ICU4X
//! compiled data; the currency symbol and its placement are chosen per
//! supported locale.

use fixed_decimal::FixedDecimal;
use icu::decimal::{FixedDecimalFormatter, options::FixedDecimalFormatterOptions};
use icu::locid::{Locale, locale};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};
use tracing::warn;
use writeable::Writeable;

use crate::types::TipError;

/// Locales the calculator can format for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter,
)]
pub enum TipLocale {
    #[default]
    #[serde(rename = "en-US")]
    EnUS,
    #[serde(rename = "en-GB")]
    EnGB,
    #[serde(rename = "fr-FR")]
    FrFR,
    #[serde(rename = "ja-JP")]
    JaJP,
}

impl TipLocale {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipLocale::EnUS => "en-US",
            TipLocale::EnGB => "en-GB",
            TipLocale::FrFR => "fr-FR",
            TipLocale::JaJP => "ja-JP",
        }
    }

    pub fn to_icu_locale(&self) -> Locale {
        match self {
            TipLocale::EnUS => locale!("en-US"),
            TipLocale::EnGB => locale!("en-GB"),
            TipLocale::FrFR => locale!("fr-FR"),
            TipLocale::JaJP => locale!("ja-JP"),
        }
    }

    /// ISO 4217 code of the locale's currency.
    pub fn currency_code(&self) -> &'static str {
        match self {
            TipLocale::EnUS => "USD",
            TipLocale::EnGB => "GBP",
            TipLocale::FrFR => "EUR",
            TipLocale::JaJP => "JPY",
        }
    }

    /// Number of fraction digits in the currency's minor unit.
    pub fn minor_units(&self) -> u32 {
        match self {
            TipLocale::JaJP => 0,
            _ => 2,
        }
    }

    /// Every supported locale tag, for help texts and error messages.
    pub fn supported() -> Vec<&'static str> {
        Self::iter().map(|l| l.as_str()).collect()
    }

    fn decimal_separator(&self) -> char {
        match self {
            TipLocale::FrFR => ',',
            _ => '.',
        }
    }

    fn decorate(&self, negative: bool, number: &str) -> String {
        let sign = if negative { "-" } else { "" };
        match self {
            TipLocale::EnUS => format!("{}${}", sign, number),
            TipLocale::EnGB => format!("{}£{}", sign, number),
            TipLocale::FrFR => format!("{}{}\u{a0}€", sign, number),
            TipLocale::JaJP => format!("{}￥{}", sign, number),
        }
    }

    /// Rounds to minor units (midpoint to even). Returns the absolute value
    /// and the sign.
    fn to_minor_units(&self, amount: Decimal) -> (Decimal, bool) {
        let rounded = amount.round_dp_with_strategy(self.minor_units(), RoundingStrategy::MidpointNearestEven);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        (rounded.abs(), negative)
    }

    /// Ungrouped digits padded to the minor units, with the locale's separator.
    fn plain_number(&self, abs: Decimal) -> String {
        format!("{:.*}", self.minor_units() as usize, abs)
            .replace('.', &self.decimal_separator().to_string())
    }
}

impl std::fmt::Display for TipLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipLocale {
    type Err = TipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en-us" | "en" => Ok(TipLocale::EnUS),
            "en-gb" => Ok(TipLocale::EnGB),
            "fr-fr" | "fr" => Ok(TipLocale::FrFR),
            "ja-jp" | "ja" => Ok(TipLocale::JaJP),
            _ => Err(TipError::Configuration(format!(
                "Unsupported locale '{}' (supported: {})",
                s,
                Self::supported().join(", ")
            ))),
        }
    }
}

/// Renders an amount as a currency string.
pub trait CurrencyFormatter {
    fn format_currency(&self, amount: Decimal) -> String;
}

/// ICU4X-backed formatter, built once and reused for every calculation.
#[derive(Debug)]
pub struct IcuCurrencyFormatter {
    locale: TipLocale,
    formatter: FixedDecimalFormatter,
}

impl IcuCurrencyFormatter {
    pub fn try_new(locale: TipLocale) -> Result<Self, TipError> {
        let formatter = FixedDecimalFormatter::try_new(
            &locale.to_icu_locale().into(),
            FixedDecimalFormatterOptions::default(),
        )
        .map_err(|e| TipError::Formatter(format!("{}: {}", locale, e)))?;
        Ok(Self { locale, formatter })
    }

    pub fn locale(&self) -> TipLocale {
        self.locale
    }
}

impl CurrencyFormatter for IcuCurrencyFormatter {
    fn format_currency(&self, amount: Decimal) -> String {
        let (abs, negative) = self.locale.to_minor_units(amount);
        let number = match FixedDecimal::from_str(&abs.to_string()) {
            Ok(fixed) => {
                // Padding here does not depend on the Decimal's scale, which
                // cannot grow near the top of its range.
                let fixed = fixed.padded_end(-(self.locale.minor_units() as i16));
                self.formatter.format(&fixed).write_to_string().into_owned()
            }
            Err(e) => {
                warn!(amount = %abs, "ICU could not read amount ({}), using plain number rendering", e);
                self.locale.plain_number(abs)
            }
        };
        self.locale.decorate(negative, &number)
    }
}

/// One-off formatting without keeping a formatter around.
///
/// Falls back to ungrouped digits if the ICU formatter cannot be built.
impl CurrencyFormatter for TipLocale {
    fn format_currency(&self, amount: Decimal) -> String {
        match IcuCurrencyFormatter::try_new(*self) {
            Ok(formatter) => formatter.format_currency(amount),
            Err(e) => {
                warn!("{}, using plain number rendering", e);
                let (abs, negative) = self.to_minor_units(amount);
                self.decorate(negative, &self.plain_number(abs))
            }
        }
    }
}
