//! Expense CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_amount, format_expense_list};
use crate::error::{CardCycleError, CardCycleResult};
use crate::models::{Money, PaymentMethod};
use crate::services::{ExpenseService, NewExpense};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g. "52.30" or "52,30")
        amount: String,
        /// What the money was spent on
        description: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Payment method: credit, debit, pix, cash, transfer
        #[arg(short, long)]
        method: Option<String>,
        /// Free-form category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List expenses
    #[command(alias = "ls")]
    List {
        /// Only show one payment method
        #[arg(short, long)]
        method: Option<String>,
    },

    /// Remove an expense by ID
    #[command(alias = "rm")]
    Remove {
        /// Expense ID (full UUID or the short exp-xxxxxxxx form)
        id: String,
    },
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(s: &str) -> CardCycleResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        CardCycleError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s))
    })
}

fn parse_method(s: &str) -> CardCycleResult<PaymentMethod> {
    s.parse().map_err(CardCycleError::Validation)
}

pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> CardCycleResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            date,
            method,
            category,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| CardCycleError::Validation(e.to_string()))?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => Local::now().date_naive(),
            };
            let payment_method = match method {
                Some(m) => parse_method(&m)?,
                None => settings.default_payment_method,
            };

            let expense = service.add(NewExpense {
                date,
                description,
                amount,
                payment_method,
                category,
            })?;

            println!(
                "Added {} {} on {} via {} ({})",
                expense.description,
                format_amount(expense.amount, settings),
                settings.format_date(expense.date),
                expense.payment_method,
                expense.id
            );
        }

        ExpenseCommands::List { method } => {
            let method = method.as_deref().map(parse_method).transpose()?;
            let expenses = service.list(method)?;
            print!("{}", format_expense_list(&expenses, settings));
        }

        ExpenseCommands::Remove { id } => {
            let removed = service.delete(&id)?;
            println!("Removed {} ({})", removed.description, removed.id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-10").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
        assert!(parse_date("10/03/2025").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_method_error_is_validation() {
        assert!(parse_method("cheque").unwrap_err().is_validation());
        assert_eq!(parse_method("pix").unwrap(), PaymentMethod::Pix);
    }
}
