//! Statement service
//!
//! Applies the billing period calculator to stored expenses using the stored
//! card cycle.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::billing::{
    calculate_billing_period, filter_expenses_by_billing_period, format_billing_period_label,
    generate_billing_periods, BillingPeriodOption,
};
use crate::error::{CardCycleError, CardCycleResult};
use crate::models::{BillingPeriod, CardCycleConfig, Expense, Money};
use crate::storage::Storage;

/// The credit-card charges billed on one statement
#[derive(Debug, Clone, Serialize)]
pub struct Statement {
    pub period: BillingPeriod,
    pub label: String,
    pub cycle: CardCycleConfig,
    pub expenses: Vec<Expense>,
    pub total: Money,
}

impl Statement {
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

pub struct StatementService<'a> {
    storage: &'a Storage,
}

impl<'a> StatementService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The stored cycle, or `NotConfigured`
    pub fn cycle(&self) -> CardCycleResult<CardCycleConfig> {
        self.storage.card.get()?.ok_or(CardCycleError::NotConfigured)
    }

    /// Every period that has at least one credit-card charge, oldest first
    ///
    /// Empty when no cycle is configured.
    pub fn periods(&self) -> CardCycleResult<Vec<BillingPeriodOption>> {
        let cycle = self.storage.card.get()?;
        let expenses = self.storage.expenses.get_all()?;
        Ok(generate_billing_periods(&expenses, cycle.as_ref()))
    }

    /// The period that a charge made on `today` would be billed on
    pub fn current_period(&self, today: NaiveDate) -> CardCycleResult<BillingPeriod> {
        Ok(calculate_billing_period(today, &self.cycle()?))
    }

    /// Build the statement for `period`
    pub fn statement(&self, period: BillingPeriod) -> CardCycleResult<Statement> {
        let cycle = self.cycle()?;
        let all = self.storage.expenses.get_all()?;

        let expenses: Vec<Expense> = filter_expenses_by_billing_period(&all, &period, &cycle)
            .into_iter()
            .cloned()
            .collect();
        let total: Money = expenses.iter().map(|e| e.amount).sum();

        debug!(period = %period, count = expenses.len(), "built statement");
        Ok(Statement {
            label: format_billing_period_label(&period),
            period,
            cycle,
            expenses,
            total,
        })
    }
}
