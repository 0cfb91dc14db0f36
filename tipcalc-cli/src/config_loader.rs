//! CLI configuration file.
//!
//! Loaded from `~/.config/tipcalc/config.toml` on Linux,
//! `~/Library/Application Support/tipcalc/config.toml` on macOS or
//! `%APPDATA%\tipcalc\config.toml` on Windows. The file is only read.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tipcalc::{TipConfig, TipLocale};
use tracing::{debug, warn};

/// CLI configuration structure loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CliConfig {
    /// Locale tag (e.g. "en-US", "fr-FR").
    pub locale: Option<String>,
    /// Percentage pre-filled in the tip field.
    pub default_percent: Option<Decimal>,
    /// Start the TUI in dark mode.
    pub dark_mode: Option<bool>,
    /// Enable file logging by default.
    pub enable_logging: Option<bool>,
}

impl CliConfig {
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tipcalc"))
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Loads the default config file.
    ///
    /// A missing file gives `CliConfig::default()`. An unreadable or invalid
    /// file is an error; callers fall back to defaults and report it once
    /// logging is up.
    pub fn load() -> Result<Self, String> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("Could not determine config directory");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            debug!("No config file found at {:?}", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {:?}: {}", path, e))?;
        let config = toml::from_str::<CliConfig>(&content)
            .map_err(|e| format!("Failed to parse config file {:?}: {}", path, e))?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// `load()` with the fallback applied; the problem, if any, is returned
    /// for logging.
    pub fn load_or_default() -> (Self, Option<String>) {
        Self::or_default(Self::load())
    }

    fn or_default(loaded: Result<Self, String>) -> (Self, Option<String>) {
        match loaded {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Layers the file settings over `base`. Invalid values are skipped with a warning.
    pub fn apply(&self, base: TipConfig) -> TipConfig {
        let mut config = base;
        if let Some(tag) = &self.locale {
            match tag.parse::<TipLocale>() {
                Ok(locale) => config.locale = locale,
                Err(e) => warn!("Ignoring config locale: {}", e),
            }
        }
        if let Some(percent) = self.default_percent {
            match config.clone().with_default_tip_percent(percent) {
                Ok(updated) => config = updated,
                Err(e) => warn!("Ignoring config default-percent: {}", e),
            }
        }
        config
    }
}
