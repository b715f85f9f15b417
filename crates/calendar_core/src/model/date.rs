//! Calendar date value used by events.
//!
//! # Responsibility
//! - Group the day/month/year triple carried by every event.
//! - Render the `day/month/year` form used by console listings.
//!
//! # Invariants
//! - Construction never validates; any integer triple is accepted.
//! - `validate()` is opt-in and never called by the calendar itself.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Plain day/month/year triple.
///
/// Fields are raw integers so callers may store dates such as `99/13/0`
/// without any rejection at insertion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventDate {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

impl EventDate {
    pub fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Checks that the triple names a real Gregorian date.
    ///
    /// # Errors
    /// - `InvalidYear` when `year < 1`.
    /// - `InvalidMonth` when `month` is outside `1..=12`.
    /// - `InvalidDay` when `day` is outside the month's length.
    pub fn validate(&self) -> Result<(), DateValidationError> {
        if self.year < 1 {
            return Err(DateValidationError::InvalidYear(self.year));
        }
        if !(1..=12).contains(&self.month) {
            return Err(DateValidationError::InvalidMonth(self.month));
        }
        let max_day = days_in_month(self.month, self.year);
        if self.day < 1 || self.day > max_day {
            return Err(DateValidationError::InvalidDay {
                day: self.day,
                max: max_day,
            });
        }
        Ok(())
    }
}

impl Display for EventDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

/// Opt-in validation failures for [`EventDate::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValidationError {
    InvalidYear(i32),
    InvalidMonth(i32),
    InvalidDay { day: i32, max: i32 },
}

impl Display for DateValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidYear(year) => write!(f, "year must be >= 1, got {year}"),
            Self::InvalidMonth(month) => write!(f, "month must be in 1..=12, got {month}"),
            Self::InvalidDay { day, max } => {
                write!(f, "day must be in 1..={max}, got {day}")
            }
        }
    }
}

impl Error for DateValidationError {}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(month: i32, year: i32) -> i32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
