//! Storage layer for cardcycle
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod card;
pub mod expenses;
pub mod file_io;

pub use card::CardRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::CardCyclePaths;
use crate::error::CardCycleError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub expenses: ExpenseRepository,
    pub card: CardRepository,
}

impl Storage {
    /// Create a new Storage instance, creating data directories as needed
    pub fn new(paths: CardCyclePaths) -> Result<Self, CardCycleError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            card: CardRepository::new(paths.card_file()),
        })
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), CardCycleError> {
        self.expenses.load()?;
        self.card.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), CardCycleError> {
        self.expenses.save()?;
        self.card.save()?;
        Ok(())
    }
}
