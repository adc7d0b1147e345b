//! Path management for cardcycle
//!
//! ## Path Resolution Order
//!
//! 1. `CARDCYCLE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/cardcycle` or `~/.config/cardcycle`
//! 3. Windows: `%APPDATA%\cardcycle`

use std::path::{Path, PathBuf};

use crate::error::CardCycleError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "CARDCYCLE_DATA_DIR";

/// Manages all paths used by cardcycle
#[derive(Debug, Clone)]
pub struct CardCyclePaths {
    base_dir: PathBuf,
}

impl CardCyclePaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, CardCycleError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use an explicit base directory (CLI override, tests)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Data directory (`<base>/data`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Settings file (`<base>/config.json`)
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    pub fn card_file(&self) -> PathBuf {
        self.data_dir().join("card.json")
    }

    /// Create the base and data directories
    pub fn ensure_directories(&self) -> Result<(), CardCycleError> {
        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CardCycleError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Whether `init` has been run (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CardCycleError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                CardCycleError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("cardcycle"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CardCycleError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CardCycleError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("cardcycle"))
}
