//! Calendar day value type
//!
//! `CalendarDate` is the single date representation used across the
//! scheduling core. It is an immutable value; every derivation (day or month
//! arithmetic, day-of-month changes) returns a new value. Weekday indices are
//! zero-based with Sunday first, matching the wire format of the
//! blocked-dates API.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SlotbookError};

/// An immutable calendar day (year, month, day-of-month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date from calendar components (month and day are 1-based).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self).ok_or_else(|| {
            SlotbookError::InvalidInput(format!("invalid calendar date {year}-{month:02}-{day:02}"))
        })
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// 1-based month.
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// 1-based day of month.
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Weekday index with Sunday = 0 through Saturday = 6.
    pub fn weekday_index(self) -> u8 {
        self.0.weekday().num_days_from_sunday() as u8
    }

    /// Number of days in this date's month (handles leap years).
    pub fn days_in_month(self) -> u32 {
        let (next_year, next_month) = if self.month() == 12 {
            (self.year() + 1, 1)
        } else {
            (self.year(), self.month() + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|first_of_next| first_of_next.pred_opt())
            .map_or(28, |last| last.day())
    }

    /// The first day of this date's month.
    pub fn first_of_month(self) -> Self {
        // Day 1 exists in every month.
        Self(self.0.with_day(1).unwrap_or(self.0))
    }

    /// The last day of this date's month.
    pub fn last_of_month(self) -> Self {
        let first = self.first_of_month();
        first.add_days(i64::from(first.days_in_month()) - 1)
    }

    /// Replace the day-of-month, failing if the day does not exist in the
    /// month (e.g. February 30).
    pub fn with_day(self, day: u32) -> Result<Self> {
        self.0.with_day(day).map(Self).ok_or_else(|| {
            SlotbookError::InvalidInput(format!(
                "day {day} does not exist in {:04}-{:02}",
                self.year(),
                self.month()
            ))
        })
    }

    pub fn add_days(self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    pub fn sub_days(self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    /// Shift by whole months, clamping the day to the target month's length
    /// (Jan 31 + 1 month = Feb 28/29). Year boundaries roll over in either
    /// direction.
    pub fn add_months(self, delta: i32) -> Self {
        let total_months = (self.year() * 12) + (self.month() as i32 - 1) + delta;
        let year = total_months.div_euclid(12);
        let month = total_months.rem_euclid(12) as u32 + 1;
        let day = self.day().min(month_length(year, month));
        NaiveDate::from_ymd_opt(year, month, day).map_or(self, Self)
    }

    pub fn start_of_day(self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }

    /// The last representable instant of this day. Past-day checks compare
    /// this against "now" so that today never counts as past.
    pub fn end_of_day(self) -> NaiveDateTime {
        self.0
            .and_hms_nano_opt(23, 59, 59, 999_999_999)
            .unwrap_or_else(|| self.0.and_time(NaiveTime::MIN))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

fn month_length(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1).map_or(28, |d| CalendarDate(d).days_in_month())
}
