//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service layer.

pub mod card;
pub mod expense;
pub mod prefs;
pub mod statement;

pub use card::{handle_card_command, CardCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use prefs::{handle_prefs_command, PrefsCommands};
pub use statement::{handle_statement_command, StatementCommands};
