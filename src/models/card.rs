//! Credit-card cycle configuration
//!
//! A cycle is described by the day of the month a statement opens and the
//! day it closes. When `opening_day > closing_day` the cycle crosses a month
//! boundary (e.g. opens on the 16th, closes on the 15th of the next month).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Validation errors for card cycle configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardCycleValidationError {
    OpeningDayOutOfRange(u32),
    ClosingDayOutOfRange(u32),
}

impl fmt::Display for CardCycleValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpeningDayOutOfRange(d) => {
                write!(f, "Opening day must be between 1 and 31, got {}", d)
            }
            Self::ClosingDayOutOfRange(d) => {
                write!(f, "Closing day must be between 1 and 31, got {}", d)
            }
        }
    }
}

impl std::error::Error for CardCycleValidationError {}

/// Opening and closing days of a monthly credit-card statement
///
/// Fields are public: the billing calculator accepts any pair without
/// complaint, validation only happens through [`CardCycleConfig::new`] and
/// [`CardCycleConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardCycleConfig {
    pub opening_day: u32,
    pub closing_day: u32,
}

impl CardCycleConfig {
    /// Create a validated configuration
    pub fn new(opening_day: u32, closing_day: u32) -> Result<Self, CardCycleValidationError> {
        let config = Self {
            opening_day,
            closing_day,
        };
        config.validate()?;
        Ok(config)
    }

    /// Derive a contiguous cycle from the closing day alone: the next
    /// statement opens the day after closing, or on the 1st after a 31st close
    pub fn from_closing_day(closing_day: u32) -> Result<Self, CardCycleValidationError> {
        let opening_day = if closing_day == 31 {
            1
        } else {
            closing_day.saturating_add(1)
        };
        Self::new(opening_day, closing_day)
    }

    /// Check both days are valid day-of-month values
    pub fn validate(&self) -> Result<(), CardCycleValidationError> {
        // Closing first, since from_closing_day derives the opening day from it
        if !(1..=31).contains(&self.closing_day) {
            return Err(CardCycleValidationError::ClosingDayOutOfRange(
                self.closing_day,
            ));
        }
        if !(1..=31).contains(&self.opening_day) {
            return Err(CardCycleValidationError::OpeningDayOutOfRange(
                self.opening_day,
            ));
        }
        Ok(())
    }

    /// Whether the cycle spans two calendar months
    pub fn crosses_month(&self) -> bool {
        self.opening_day > self.closing_day
    }
}

impl fmt::Display for CardCycleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "opens day {}, closes day {}{}",
            self.opening_day,
            self.closing_day,
            if self.crosses_month() {
                " of the following month"
            } else {
                ""
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_closing_day_derives_opening() {
        let config = CardCycleConfig::from_closing_day(15).unwrap();
        assert_eq!(config.opening_day, 16);
        assert!(config.crosses_month());

        let config = CardCycleConfig::from_closing_day(31).unwrap();
        assert_eq!(config.opening_day, 1);
        assert!(!config.crosses_month());
    }

    #[test]
    fn test_validation() {
        assert!(CardCycleConfig::new(1, 31).is_ok());
        assert_eq!(
            CardCycleConfig::new(0, 10),
            Err(CardCycleValidationError::OpeningDayOutOfRange(0))
        );
        assert_eq!(
            CardCycleConfig::new(5, 32),
            Err(CardCycleValidationError::ClosingDayOutOfRange(32))
        );
        assert_eq!(
            CardCycleConfig::from_closing_day(32),
            Err(CardCycleValidationError::ClosingDayOutOfRange(32))
        );
    }

    #[test]
    fn test_persisted_field_names() {
        let config = CardCycleConfig::new(16, 15).unwrap();
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(json["opening_day"], 16);
        assert_eq!(json["closing_day"], 15);
    }

    #[test]
    fn test_display() {
        let config = CardCycleConfig::new(16, 15).unwrap();
        assert_eq!(
            config.to_string(),
            "opens day 16, closes day 15 of the following month"
        );
    }
}
