//! Service layer for cardcycle
//!
//! `billing` holds the pure billing-period calculator; the other services put
//! it and the repositories together.

pub mod billing;
pub mod expense;
pub mod statement;

pub use billing::{
    calculate_billing_period, filter_expenses_by_billing_period, format_billing_period_label,
    format_billing_period_label_str, generate_billing_periods, BillingPeriodOption,
};
pub use expense::{ExpenseService, NewExpense};
pub use statement::{Statement, StatementService};
