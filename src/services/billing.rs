//! Billing period calculation
//!
//! Maps expense dates to the monthly credit-card statement they are billed
//! on. Everything here is pure: no I/O, no clock, no errors. Day values are
//! compared as-is against the configured opening/closing days, without
//! clamping to the length of the expense's month.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{BillingPeriod, CardCharge, CardCycleConfig};

/// A selectable billing period with its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillingPeriodOption {
    pub value: BillingPeriod,
    pub label: String,
}

/// Determine which statement period `date` belongs to under `config`
///
/// Cross-month cycles (`opening_day > closing_day`): days up to and including
/// the closing day are billed on the *next* month's period; every other day
/// stays on the current month. Single-month cycles: days inside
/// `opening_day..=closing_day` stay on the current month, earlier days go to
/// the previous month and later days to the next.
pub fn calculate_billing_period(date: NaiveDate, config: &CardCycleConfig) -> BillingPeriod {
    let day = date.day();
    let current = BillingPeriod::of_date(date);

    if config.opening_day > config.closing_day {
        // NOTE: the tail of a cross-month cycle is labeled month + 1, not the
        // month in which it closes. Changing this moves boundary expenses to a
        // different statement.
        if day <= config.closing_day {
            current.next()
        } else {
            // Covers both day >= opening_day and the closing..opening gap
            current
        }
    } else if day < config.opening_day {
        current.prev()
    } else if day > config.closing_day {
        current.next()
    } else {
        current
    }
}

/// Human-readable label for a period, e.g. `"April 2025"`
pub fn format_billing_period_label(period: &BillingPeriod) -> String {
    period.label()
}

/// Label a raw `YYYY-MM` string
///
/// Returns the input unchanged when it does not split into a year and a
/// month in 1–12, so a bad value never breaks a listing.
pub fn format_billing_period_label_str(period: &str) -> String {
    let mut parts = period.split('-');
    let year = parts.next().and_then(|y| y.parse::<i32>().ok());
    let month = parts.next().and_then(|m| m.parse::<u32>().ok());

    match (year, month, parts.next()) {
        (Some(year), Some(month), None) if (1..=12).contains(&month) => {
            BillingPeriod::new(year, month).label()
        }
        _ => period.to_string(),
    }
}

/// Distinct billing periods of the credit-card charges in `expenses`, sorted
/// oldest first
///
/// Without a cycle configuration there is nothing to bucket by, so the result
/// is empty.
pub fn generate_billing_periods<T: CardCharge>(
    expenses: &[T],
    config: Option<&CardCycleConfig>,
) -> Vec<BillingPeriodOption> {
    let Some(config) = config else {
        return Vec::new();
    };

    let periods: BTreeSet<BillingPeriod> = expenses
        .iter()
        .filter(|e| e.is_credit_card())
        .map(|e| calculate_billing_period(e.charge_date(), config))
        .collect();

    periods
        .into_iter()
        .map(|value| BillingPeriodOption {
            label: format_billing_period_label(&value),
            value,
        })
        .collect()
}

/// Credit-card charges from `expenses` billed on `target`, in input order
pub fn filter_expenses_by_billing_period<'a, T: CardCharge>(
    expenses: &'a [T],
    target: &BillingPeriod,
    config: &CardCycleConfig,
) -> Vec<&'a T> {
    expenses
        .iter()
        .filter(|e| e.is_credit_card())
        .filter(|e| calculate_billing_period(e.charge_date(), config) == *target)
        .collect()
}
