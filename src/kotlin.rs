//! UniFFI bindings for the Android (Kotlin) and iOS (Swift) hosts.
//!
//! The host passes the raw text of its input fields; parsing and the
//! zero-on-garbage rule stay on the Rust side.

use crate::calculator::TipCalculator;
use crate::config::TipConfig;
use crate::currency::TipLocale;
use crate::types::TipError;

/// UniFFI-compatible error type for Kotlin/Swift bindings.
#[derive(Debug, uniffi::Error)]
#[uniffi(flat_error)]
pub enum KotlinTipError {
    /// The locale tag is unsupported or its formatter could not be built.
    LocaleError { locale: String, message: String },
}

impl std::fmt::Display for KotlinTipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocaleError { locale, message } => {
                write!(f, "Locale '{}' unavailable: {}", locale, message)
            }
        }
    }
}

impl std::error::Error for KotlinTipError {}

fn locale_error(locale: &str, err: TipError) -> KotlinTipError {
    KotlinTipError::LocaleError {
        locale: locale.to_string(),
        message: err.to_string(),
    }
}

/// Formatted tip for the raw field text, e.g. `("33", "15", true, "en-US")` gives `"$5.00"`.
#[uniffi::export]
pub fn calculate_tip_text(
    amount_text: String,
    percent_text: String,
    round_up: bool,
    locale: String,
) -> Result<String, KotlinTipError> {
    let tip_locale: TipLocale = locale.parse().map_err(|e| locale_error(&locale, e))?;
    let config = TipConfig::default().with_locale(tip_locale);
    let calculator = TipCalculator::new(&config).map_err(|e| locale_error(&locale, e))?;
    Ok(calculator
        .calculate_text(&amount_text, &percent_text, round_up)
        .formatted)
}

/// Locale tags accepted by [`calculate_tip_text`].
#[uniffi::export]
pub fn supported_locales() -> Vec<String> {
    TipLocale::supported().into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_tip_text() {
        let tip = calculate_tip_text("33".into(), "15".into(), true, "en-US".into()).unwrap();
        assert_eq!(tip, "$5.00");
    }

    #[test]
    fn test_unknown_locale() {
        let err = calculate_tip_text("10".into(), "10".into(), false, "xx".into()).unwrap_err();
        assert!(err.to_string().contains("xx"));
    }
}
