//! Statement and billing period display

use super::expense::{format_amount, format_expense_list};
use crate::config::Settings;
use crate::services::{BillingPeriodOption, Statement};

/// List selectable periods as `value  label`
pub fn format_period_list(periods: &[BillingPeriodOption]) -> String {
    if periods.is_empty() {
        return "No billing periods found.\n".to_string();
    }

    periods
        .iter()
        .map(|p| format!("{}  {}\n", p.value, p.label))
        .collect()
}

/// Full statement: heading, cycle, charges, total
pub fn format_statement(statement: &Statement, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Statement {} ({})\n",
        statement.label, statement.period
    ));
    output.push_str(&format!("Card cycle: {}\n\n", statement.cycle));

    if statement.is_empty() {
        output.push_str("No credit-card charges in this period.\n");
        return output;
    }

    output.push_str(&format_expense_list(&statement.expenses, settings));
    output.push_str(&"-".repeat(90));
    output.push('\n');
    output.push_str(&format!(
        "{} charge(s), total {}\n",
        statement.expenses.len(),
        format_amount(statement.total, settings)
    ));
    output
}
