//! Expense display formatting

use crate::config::Settings;
use crate::models::{Expense, Money};

/// Render an amount honoring the currency symbol and the show-amounts toggle
pub fn format_amount(amount: Money, settings: &Settings) -> String {
    if settings.preferences.show_amounts {
        amount.format_with_symbol(&settings.currency_symbol)
    } else {
        "****".to_string()
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// One register row: id, date, method, description, category, amount
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    format!(
        "{:12}  {:10}  {:8}  {:24}  {:14}  {:>12}",
        expense.id.to_string(),
        settings.format_date(expense.date),
        expense.payment_method.as_str(),
        truncate(&expense.description, 24),
        truncate(expense.category.as_deref().unwrap_or("-"), 14),
        format_amount(expense.amount, settings),
    )
}

/// Format expenses as a register with a header
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12}  {:10}  {:8}  {:24}  {:14}  {:>12}\n",
        "ID", "Date", "Method", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(90));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    output
}
