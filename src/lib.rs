//! cardcycle - credit-card statement tracker
//!
//! Records expenses and groups the ones paid by credit card into monthly
//! billing periods, based on the card's statement opening and closing days.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expenses, card cycle, billing periods, money
//! - `storage`: JSON file storage layer
//! - `services`: Billing period calculator and business logic
//! - `display`: Terminal formatting
//! - `export`: CSV export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use cardcycle::models::{BillingPeriod, CardCycleConfig};
//! use cardcycle::services::calculate_billing_period;
//! use chrono::NaiveDate;
//!
//! let cycle = CardCycleConfig::from_closing_day(15).unwrap();
//! let date = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
//! assert_eq!(calculate_billing_period(date, &cycle), BillingPeriod::new(2025, 3));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{CardCycleError, CardCycleResult};
