//! Card cycle repository
//!
//! Persists the single credit-card cycle configuration to card.json.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::{debug, info};

use crate::error::CardCycleError;
use crate::models::CardCycleConfig;

use super::file_io::{read_json, write_json_atomic};

pub struct CardRepository {
    path: PathBuf,
    cycle: RwLock<Option<CardCycleConfig>>,
}

fn lock_error(e: impl std::fmt::Display) -> CardCycleError {
    CardCycleError::Storage(format!("Failed to acquire card lock: {}", e))
}

impl CardRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            cycle: RwLock::new(None),
        }
    }

    pub fn load(&self) -> Result<(), CardCycleError> {
        let stored: Option<CardCycleConfig> = read_json(&self.path)?;
        let mut cycle = self.cycle.write().map_err(lock_error)?;
        *cycle = stored;
        debug!(configured = cycle.is_some(), "loaded card cycle");
        Ok(())
    }

    /// Write the current configuration, or remove the file when there is none
    pub fn save(&self) -> Result<(), CardCycleError> {
        match self.get()? {
            Some(cycle) => write_json_atomic(&self.path, &cycle),
            None => {
                if self.path.exists() {
                    std::fs::remove_file(&self.path)?;
                }
                Ok(())
            }
        }
    }

    pub fn get(&self) -> Result<Option<CardCycleConfig>, CardCycleError> {
        let cycle = self.cycle.read().map_err(lock_error)?;
        Ok(*cycle)
    }

    pub fn set(&self, config: CardCycleConfig) -> Result<(), CardCycleError> {
        let mut cycle = self.cycle.write().map_err(lock_error)?;
        info!(
            opening_day = config.opening_day,
            closing_day = config.closing_day,
            "card cycle updated"
        );
        *cycle = Some(config);
        Ok(())
    }

    /// Forget the configuration, returning what was stored
    pub fn clear(&self) -> Result<Option<CardCycleConfig>, CardCycleError> {
        let mut cycle = self.cycle.write().map_err(lock_error)?;
        Ok(cycle.take())
    }
}
