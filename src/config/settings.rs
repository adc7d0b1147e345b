//! User settings for cardcycle
//!
//! Display preferences, defaults for new expenses, and UI state such as
//! visibility toggles and completed walkthroughs. Everything is loaded and
//! saved explicitly through [`Settings::load_or_create`] and [`Settings::save`].

use std::collections::BTreeSet;
use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::paths::CardCyclePaths;
use crate::error::CardCycleError;
use crate::models::PaymentMethod;

/// UI preferences that persist between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Show amounts in listings; off masks them for screen sharing
    #[serde(default = "default_true")]
    pub show_amounts: bool,

    /// Names of guided tours the user has finished
    #[serde(default)]
    pub completed_tours: BTreeSet<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            show_amounts: true,
            completed_tours: BTreeSet::new(),
        }
    }
}

impl Preferences {
    pub fn has_completed_tour(&self, name: &str) -> bool {
        self.completed_tours.contains(name)
    }

    /// Mark a tour complete; returns false if it already was
    pub fn complete_tour(&mut self, name: impl Into<String>) -> bool {
        self.completed_tours.insert(name.into())
    }
}

/// User settings for cardcycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Payment method assumed by `expense add` when none is given
    #[serde(default)]
    pub default_payment_method: PaymentMethod,

    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub preferences: Preferences,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_payment_method: PaymentMethod::default(),
            log_level: default_log_level(),
            preferences: Preferences::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    ///
    /// Defaults are not written back; the caller decides when to persist.
    pub fn load_or_create(paths: &CardCyclePaths) -> Result<Self, CardCycleError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            debug!("no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| CardCycleError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| CardCycleError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Render a date with `date_format`
    ///
    /// A format chrono cannot render (unknown specifier, or a time/offset
    /// field) falls back to `%Y-%m-%d`.
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_ok() {
            return out;
        }
        warn!(format = %self.date_format, "invalid date_format, using %Y-%m-%d");
        date.format("%Y-%m-%d").to_string()
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CardCyclePaths) -> Result<(), CardCycleError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CardCycleError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| CardCycleError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.default_payment_method, PaymentMethod::Credit);
        assert!(settings.preferences.show_amounts);
        assert!(settings.preferences.completed_tours.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CardCyclePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "R$ ".into();
        settings.preferences.show_amounts = false;
        settings.preferences.complete_tour("statements");
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "R$ ");
        assert!(!loaded.preferences.show_amounts);
        assert!(loaded.preferences.has_completed_tour("statements"));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.log_level, "warn");
        assert!(settings.preferences.show_amounts);
    }

    #[test]
    fn test_complete_tour_is_idempotent() {
        let mut prefs = Preferences::default();
        assert!(prefs.complete_tour("intro"));
        assert!(!prefs.complete_tour("intro"));
        assert_eq!(prefs.completed_tours.len(), 1);
    }

    #[test]
    fn test_format_date_uses_setting() {
        let mut settings = Settings::default();
        settings.date_format = "%d/%m/%Y".into();
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(settings.format_date(date), "04/03/2025");
    }

    #[test]
    fn test_format_date_falls_back_on_bad_format() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let mut settings = Settings::default();

        settings.date_format = "%Q".into();
        assert_eq!(settings.format_date(date), "2025-03-04");

        // Valid specifier, but a NaiveDate has no time to print
        settings.date_format = "%H:%M".into();
        assert_eq!(settings.format_date(date), "2025-03-04");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CardCyclePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, CardCycleError::Config(_)));
    }
}
