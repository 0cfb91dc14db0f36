use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

use crate::currency::TipLocale;
use crate::inputs::IntoTipDecimal;
use crate::types::{DEFAULT_TIP_PERCENT, TipError};

pub const ENV_LOCALE: &str = "TIPCALC_LOCALE";
pub const ENV_DEFAULT_PERCENT: &str = "TIPCALC_DEFAULT_PERCENT";

/// Settings shared by every calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TipConfig {
    /// Locale used for currency formatting.
    pub locale: TipLocale,
    /// Percentage offered when the user has not typed one yet.
    pub default_tip_percent: Decimal,
}

impl Default for TipConfig {
    fn default() -> Self {
        Self {
            locale: TipLocale::default(),
            default_tip_percent: DEFAULT_TIP_PERCENT,
        }
    }
}

impl std::str::FromStr for TipConfig {
    type Err = TipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: TipConfig = serde_json::from_str(s)
            .map_err(|e| TipError::Configuration(format!("Failed to parse config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

impl TipConfig {
    pub fn builder() -> TipConfigBuilder {
        TipConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), TipError> {
        if self.default_tip_percent < Decimal::ZERO {
            return Err(TipError::Configuration(
                "Default tip percent must be non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Reads `TIPCALC_LOCALE` and `TIPCALC_DEFAULT_PERCENT`.
    ///
    /// Unset variables keep their defaults; set but invalid ones are errors.
    pub fn from_env() -> Result<Self, TipError> {
        Self::from_vars(env::var(ENV_LOCALE).ok(), env::var(ENV_DEFAULT_PERCENT).ok())
    }

    fn from_vars(locale: Option<String>, percent: Option<String>) -> Result<Self, TipError> {
        let mut builder = Self::builder();
        if let Some(locale) = locale {
            builder = builder.locale(locale.parse()?);
        }
        if let Some(percent) = percent {
            let percent = percent.trim().into_tip_decimal().map_err(|_| {
                TipError::Configuration(format!("Invalid {} value: '{}'", ENV_DEFAULT_PERCENT, percent))
            })?;
            builder = builder.default_tip_percent(percent);
        }
        builder.build()
    }

    /// Loads configuration from a JSON file.
    pub fn try_from_json(path: &str) -> Result<Self, TipError> {
        let content = fs::read_to_string(path)
            .map_err(|e| TipError::Configuration(format!("Failed to read config file: {}", e)))?;
        content.parse()
    }

    pub fn with_locale(mut self, locale: TipLocale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_default_tip_percent(mut self, percent: impl IntoTipDecimal) -> Result<Self, TipError> {
        self.default_tip_percent = percent.into_tip_decimal()?;
        self.validate()?;
        Ok(self)
    }
}

#[derive(Debug, Default)]
pub struct TipConfigBuilder {
    locale: Option<TipLocale>,
    default_tip_percent: Option<Decimal>,
}

impl TipConfigBuilder {
    pub fn locale(mut self, locale: TipLocale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn default_tip_percent(mut self, percent: Decimal) -> Self {
        self.default_tip_percent = Some(percent);
        self
    }

    pub fn build(self) -> Result<TipConfig, TipError> {
        let config = TipConfig {
            locale: self.locale.unwrap_or_default(),
            default_tip_percent: self.default_tip_percent.unwrap_or(DEFAULT_TIP_PERCENT),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_builder_defaults() {
        let config = TipConfig::builder().build().unwrap();
        assert_eq!(config, TipConfig::default());
        assert_eq!(config.default_tip_percent, dec!(15));
        assert_eq!(config.locale, TipLocale::EnUS);
    }

    #[test]
    fn test_builder_rejects_negative_default() {
        let res = TipConfig::builder().default_tip_percent(dec!(-1)).build();
        assert!(matches!(res, Err(TipError::Configuration(_))));
    }

    #[test]
    fn test_from_vars() {
        let config = TipConfig::from_vars(Some("fr".into()), Some(" 18 ".into())).unwrap();
        assert_eq!(config.locale, TipLocale::FrFR);
        assert_eq!(config.default_tip_percent, dec!(18));

        let unset = TipConfig::from_vars(None, None).unwrap();
        assert_eq!(unset, TipConfig::default());

        assert!(TipConfig::from_vars(Some("xx".into()), None).is_err());
        assert!(TipConfig::from_vars(None, Some("lots".into())).is_err());
    }

    #[test]
    fn test_json_round_trip_fields() {
        let config: TipConfig = r#"{"locale":"ja-JP","default_tip_percent":"10"}"#.parse().unwrap();
        assert_eq!(config.locale, TipLocale::JaJP);
        assert_eq!(config.default_tip_percent, dec!(10));

        // Missing fields fall back to defaults.
        let partial: TipConfig = r#"{"locale":"en-GB"}"#.parse().unwrap();
        assert_eq!(partial.default_tip_percent, dec!(15));
    }

    #[test]
    fn test_try_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"locale":"fr-FR","default_tip_percent":12.5}}"#).unwrap();
        let config = TipConfig::try_from_json(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.locale, TipLocale::FrFR);
        assert_eq!(config.default_tip_percent, dec!(12.5));

        assert!(TipConfig::try_from_json("/definitely/not/here.json").is_err());
    }
}
