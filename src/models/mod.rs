//! Core data models for cardcycle
//!
//! Expenses, the credit-card cycle configuration, and the billing periods
//! derived from them.

pub mod card;
pub mod expense;
pub mod ids;
pub mod money;
pub mod period;

pub use card::{CardCycleConfig, CardCycleValidationError};
pub use expense::{CardCharge, Expense, ExpenseValidationError, PaymentMethod};
pub use ids::ExpenseId;
pub use money::Money;
pub use period::{BillingPeriod, PeriodParseError};
