//! Expense model
//!
//! An expense is a dated outflow paid with one of a fixed set of payment
//! methods. Only credit-card expenses are grouped into billing periods.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ExpenseId;
use super::money::Money;

/// How an expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Credit card, billed through monthly statements
    #[default]
    Credit,
    Debit,
    /// Instant bank payment
    Pix,
    Cash,
    Transfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Credit,
        PaymentMethod::Debit,
        PaymentMethod::Pix,
        PaymentMethod::Cash,
        PaymentMethod::Transfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
            Self::Pix => "pix",
            Self::Cash => "cash",
            Self::Transfer => "transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "credit" | "credit-card" | "card" => Ok(Self::Credit),
            "debit" | "debit-card" => Ok(Self::Debit),
            "pix" => Ok(Self::Pix),
            "cash" => Ok(Self::Cash),
            "transfer" | "bank-transfer" => Ok(Self::Transfer),
            other => Err(format!(
                "Unknown payment method '{}'. Expected one of: credit, debit, pix, cash, transfer",
                other
            )),
        }
    }
}

/// A record that can be placed on a credit-card statement
///
/// The billing calculator only needs a date and a yes/no answer to "was this
/// charged to the card", so it works against this trait rather than any
/// particular payment-method representation.
pub trait CardCharge {
    /// Calendar date of the charge, already in local time
    fn charge_date(&self) -> NaiveDate;

    /// Whether the record was paid with the credit card
    fn is_credit_card(&self) -> bool;
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Expense amount must be greater than zero"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        payment_method: PaymentMethod,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            date,
            description: description.into(),
            amount,
            payment_method,
            category: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

impl CardCharge for Expense {
    fn charge_date(&self) -> NaiveDate {
        self.date
    }

    fn is_credit_card(&self) -> bool {
        self.payment_method == PaymentMethod::Credit
    }
}

impl<T: CardCharge + ?Sized> CardCharge for &T {
    fn charge_date(&self) -> NaiveDate {
        (**self).charge_date()
    }

    fn is_credit_card(&self) -> bool {
        (**self).is_credit_card()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!("credit".parse::<PaymentMethod>().unwrap(), PaymentMethod::Credit);
        assert_eq!("PIX".parse::<PaymentMethod>().unwrap(), PaymentMethod::Pix);
        assert_eq!("card".parse::<PaymentMethod>().unwrap(), PaymentMethod::Credit);
        assert!("cheque".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_payment_method_round_trips_through_display() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.to_string().parse::<PaymentMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_credit_card_capability() {
        let credit = Expense::new(date(2025, 3, 1), "Groceries", Money::from_cents(100), PaymentMethod::Credit);
        let pix = Expense::new(date(2025, 3, 1), "Rent", Money::from_cents(100), PaymentMethod::Pix);
        assert!(credit.is_credit_card());
        assert!(!pix.is_credit_card());
        assert_eq!(credit.charge_date(), date(2025, 3, 1));
    }

    #[test]
    fn test_validation() {
        let ok = Expense::new(date(2025, 3, 1), "Coffee", Money::from_cents(450), PaymentMethod::Cash);
        assert!(ok.validate().is_ok());

        let blank = Expense::new(date(2025, 3, 1), "  ", Money::from_cents(450), PaymentMethod::Cash);
        assert_eq!(blank.validate(), Err(ExpenseValidationError::EmptyDescription));

        let zero = Expense::new(date(2025, 3, 1), "Coffee", Money::zero(), PaymentMethod::Cash);
        assert_eq!(zero.validate(), Err(ExpenseValidationError::NonPositiveAmount));
    }

    #[test]
    fn test_serialization_uses_lowercase_method() {
        let expense = Expense::new(date(2025, 3, 1), "Coffee", Money::from_cents(450), PaymentMethod::Pix)
            .with_category("Food");
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["payment_method"], "pix");
        assert_eq!(json["date"], "2025-03-01");
        assert_eq!(json["category"], "Food");
    }
}
