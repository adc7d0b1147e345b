//! Display formatting for terminal output

pub mod expense;
pub mod statement;

pub use expense::{format_amount, format_expense_list, format_expense_row};
pub use statement::{format_period_list, format_statement};
