//! Expense service
//!
//! Validation and lookup on top of the expense repository.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{CardCycleError, CardCycleResult};
use crate::models::{Expense, ExpenseId, Money, PaymentMethod};
use crate::storage::Storage;

/// Input for creating an expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub payment_method: PaymentMethod,
    pub category: Option<String>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and persist a new expense
    pub fn add(&self, input: NewExpense) -> CardCycleResult<Expense> {
        let mut expense = Expense::new(
            input.date,
            input.description.trim(),
            input.amount,
            input.payment_method,
        );
        if let Some(category) = input.category.filter(|c| !c.trim().is_empty()) {
            expense = expense.with_category(category.trim());
        }

        expense
            .validate()
            .map_err(|e| CardCycleError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        info!(id = %expense.id, date = %expense.date, method = %expense.payment_method, "expense added");
        Ok(expense)
    }

    /// All expenses sorted by date, optionally limited to one payment method
    pub fn list(&self, method: Option<PaymentMethod>) -> CardCycleResult<Vec<Expense>> {
        let mut expenses = self.storage.expenses.get_all()?;
        if let Some(method) = method {
            expenses.retain(|e| e.payment_method == method);
        }
        Ok(expenses)
    }

    /// Find an expense by full UUID or short `exp-xxxxxxxx` form
    ///
    /// A prefix that matches more than one expense is a validation error.
    pub fn find(&self, query: &str) -> CardCycleResult<Expense> {
        if let Ok(id) = query.trim().parse::<ExpenseId>() {
            if let Some(expense) = self.storage.expenses.get(id)? {
                return Ok(expense);
            }
        }

        let mut matches = self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .filter(|e| e.id.matches(query));

        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense),
            (None, _) => Err(CardCycleError::expense_not_found(query)),
            (Some(_), Some(_)) => Err(CardCycleError::Validation(format!(
                "'{}' matches more than one expense; use a longer ID",
                query
            ))),
        }
    }

    /// Delete an expense by ID or prefix, returning the removed record
    pub fn delete(&self, query: &str) -> CardCycleResult<Expense> {
        let expense = self.find(query)?;
        self.storage.expenses.delete(expense.id)?;
        self.storage.expenses.save()?;

        info!(id = %expense.id, "expense deleted");
        Ok(expense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CardCyclePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CardCyclePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn input(day: u32, description: &str, cents: i64, method: PaymentMethod) -> NewExpense {
        NewExpense {
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            description: description.to_string(),
            amount: Money::from_cents(cents),
            payment_method: method,
            category: None,
        }
    }

    #[test]
    fn test_add_persists() {
        let (temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service
            .add(input(4, "  Market  ", 5230, PaymentMethod::Credit))
            .unwrap();
        assert_eq!(expense.description, "Market");
        assert!(temp_dir.path().join("data").join("expenses.json").exists());
    }

    #[test]
    fn test_add_rejects_invalid() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service.add(input(4, "", 5230, PaymentMethod::Credit)).unwrap_err();
        assert!(err.is_validation());

        let err = service.add(input(4, "Refund", -100, PaymentMethod::Credit)).unwrap_err();
        assert!(err.is_validation());
        assert!(service.list(None).unwrap().is_empty());
    }

    #[test]
    fn test_blank_category_is_dropped() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let mut new = input(4, "Lunch", 2000, PaymentMethod::Pix);
        new.category = Some("   ".into());
        assert!(service.add(new).unwrap().category.is_none());
    }

    #[test]
    fn test_list_filters_by_method() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.add(input(1, "Fuel", 100, PaymentMethod::Credit)).unwrap();
        service.add(input(2, "Rent", 100, PaymentMethod::Pix)).unwrap();
        service.add(input(3, "Books", 100, PaymentMethod::Credit)).unwrap();

        assert_eq!(service.list(None).unwrap().len(), 3);
        let credit = service.list(Some(PaymentMethod::Credit)).unwrap();
        let names: Vec<_> = credit.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, vec!["Fuel", "Books"]);
    }

    #[test]
    fn test_find_and_delete_by_short_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service.add(input(1, "Fuel", 100, PaymentMethod::Credit)).unwrap();
        let short = expense.id.to_string();

        assert_eq!(service.find(&short).unwrap().id, expense.id);
        assert_eq!(service.delete(&short).unwrap().id, expense.id);
        assert!(service.find(&short).unwrap_err().is_not_found());
    }

    #[test]
    fn test_find_by_full_uuid() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service.add(input(1, "Fuel", 100, PaymentMethod::Credit)).unwrap();
        let full = expense.id.as_uuid().to_string();
        assert_eq!(service.find(&full).unwrap().description, "Fuel");
    }
}
