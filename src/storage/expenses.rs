//! Expense repository
//!
//! Keeps expenses in memory keyed by ID and persists them to expenses.json.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::CardCycleError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    #[serde(default)]
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
}

fn lock_error(e: impl std::fmt::Display) -> CardCycleError {
    CardCycleError::Storage(format!("Failed to acquire expense lock: {}", e))
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk, replacing whatever is in memory
    pub fn load(&self) -> Result<(), CardCycleError> {
        let file_data: ExpenseData = read_json(&self.path)?;
        let mut data = self.data.write().map_err(lock_error)?;

        data.clear();
        for expense in file_data.expenses {
            data.insert(expense.id, expense);
        }

        debug!(count = data.len(), "loaded expenses");
        Ok(())
    }

    /// Save expenses to disk, ordered by date then creation time
    pub fn save(&self) -> Result<(), CardCycleError> {
        let file_data = ExpenseData {
            expenses: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, CardCycleError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// All expenses sorted by date, then by creation time
    pub fn get_all(&self) -> Result<Vec<Expense>, CardCycleError> {
        let data = self.data.read().map_err(lock_error)?;
        let mut list: Vec<_> = data.values().cloned().collect();
        list.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
        Ok(list)
    }

    /// Insert or replace an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), CardCycleError> {
        let mut data = self.data.write().map_err(lock_error)?;
        data.insert(expense.id, expense);
        Ok(())
    }

    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, CardCycleError> {
        let mut data = self.data.write().map_err(lock_error)?;
        Ok(data.remove(&id))
    }

    pub fn count(&self) -> Result<usize, CardCycleError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PaymentMethod};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn expense(day: u32, description: &str) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            description,
            Money::from_cents(1000),
            PaymentMethod::Credit,
        )
    }

    #[test]
    fn test_upsert_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));

        let e = expense(5, "Books");
        let id = e.id;
        repo.upsert(e).unwrap();

        assert_eq!(repo.get(id).unwrap().unwrap().description, "Books");
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_get_all_sorted_by_date() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));

        repo.upsert(expense(20, "Late")).unwrap();
        repo.upsert(expense(2, "Early")).unwrap();
        repo.upsert(expense(11, "Middle")).unwrap();

        let names: Vec<String> = repo
            .get_all()
            .unwrap()
            .into_iter()
            .map(|e| e.description)
            .collect();
        assert_eq!(names, vec!["Early", "Middle", "Late"]);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        let e = expense(5, "Books");
        let id = e.id;
        {
            let repo = ExpenseRepository::new(path.clone());
            repo.upsert(e).unwrap();
            repo.save().unwrap();
        }

        let repo = ExpenseRepository::new(path);
        repo.load().unwrap();
        assert_eq!(repo.get(id).unwrap().unwrap().amount.cents(), 1000);
    }

    #[test]
    fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));

        let e = expense(5, "Books");
        let id = e.id;
        repo.upsert(e).unwrap();

        assert!(repo.delete(id).unwrap().is_some());
        assert!(repo.delete(id).unwrap().is_none());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
