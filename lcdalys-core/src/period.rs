//! Ordered period keys for burden time series.
//!
//! Baseline data is yearly and keyed by the first day of the year, but loaded
//! datasets may use arbitrary calendar dates. A [`Period`] orders
//! chronologically and round-trips through its `YYYY-MM-DD` string form.

use crate::errors::{DalyError, DalyResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar date used as the ordering key of a series.
///
/// Field order matters: the derived `Ord` compares year, then month, then day.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u8,
    day: u8,
}

impl Period {
    pub const MIN: Period = Period {
        year: i32::MIN,
        month: 1,
        day: 1,
    };
    pub const MAX: Period = Period {
        year: i32::MAX,
        month: 12,
        day: 31,
    };

    /// Create a period from its calendar components.
    ///
    /// The day must exist in that month, so `2025-02-29` is rejected.
    pub fn new(year: i32, month: u8, day: u8) -> DalyResult<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(DalyError::InvalidPeriod(format!(
                "{year:04}-{month:02}-{day:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// The period for January 1st of `year`.
    pub const fn year(year: i32) -> Self {
        Self {
            year,
            month: 1,
            day: 1,
        }
    }

    pub fn year_number(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Shift by a whole number of years, keeping month and day.
    ///
    /// February 29th lands on February 28th in a common year. Returns `None`
    /// if the year leaves the `i32` range.
    pub fn checked_add_years(&self, years: i32) -> Option<Self> {
        let year = self.year.checked_add(years)?;
        Some(Self {
            year,
            month: self.month,
            day: self.day.min(days_in_month(year, self.month)),
        })
    }

    /// As [`Period::checked_add_years`], saturating at the first or last
    /// representable year.
    pub fn add_years(&self, years: i32) -> Self {
        self.checked_add_years(years).unwrap_or(if years < 0 {
            Period::MIN
        } else {
            Period::MAX
        })
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Period {
    type Err = DalyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DalyError::InvalidPeriod(s.to_string());
        let trimmed = s.trim();
        let mut parts = trimmed.splitn(3, '-');

        let year = parts
            .next()
            .filter(|y| !y.is_empty())
            .and_then(|y| y.parse::<i32>().ok())
            .ok_or_else(invalid)?;

        match (parts.next(), parts.next()) {
            (None, None) => Ok(Period::year(year)),
            (Some(month), Some(day)) => {
                let month = month.parse::<u8>().map_err(|_| invalid())?;
                let day = day.parse::<u8>().map_err(|_| invalid())?;
                Period::new(year, month, day).map_err(|_| invalid())
            }
            _ => Err(invalid()),
        }
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
