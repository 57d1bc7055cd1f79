//! Blocking rule sets fetched per month
//!
//! A `BlockedRuleSet` is scoped to exactly one (year, month) fetch. Blocked
//! weekdays recur in every week of that month; blocked dates apply to single
//! days of it. A set fetched for one month must never classify days of
//! another month, even while the UI still shows stale data during a
//! navigation transition.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SlotbookError};
use crate::types::CalendarDate;

/// Blocking rules for a single (year, month).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedRuleSet {
    year: i32,
    month: u32,
    blocked_weekdays: BTreeSet<u8>,
    blocked_dates: BTreeSet<u8>,
}

impl BlockedRuleSet {
    /// Build a rule set, validating that weekdays are in `0..=6` and dates in
    /// `1..=31`.
    pub fn new(
        year: i32,
        month: u32,
        blocked_weekdays: impl IntoIterator<Item = u8>,
        blocked_dates: impl IntoIterator<Item = u8>,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(SlotbookError::InvalidInput(format!(
                "month {month} is out of range 1..=12"
            )));
        }
        let blocked_weekdays: BTreeSet<u8> = blocked_weekdays.into_iter().collect();
        if let Some(weekday) = blocked_weekdays.iter().find(|w| **w > 6) {
            return Err(SlotbookError::InvalidInput(format!(
                "blocked weekday {weekday} is out of range 0..=6"
            )));
        }
        let blocked_dates: BTreeSet<u8> = blocked_dates.into_iter().collect();
        if let Some(day) = blocked_dates.iter().find(|d| !(1..=31).contains(*d)) {
            return Err(SlotbookError::InvalidInput(format!(
                "blocked date {day} is out of range 1..=31"
            )));
        }
        Ok(Self { year, month, blocked_weekdays, blocked_dates })
    }

    /// A rule set that blocks nothing for the given month.
    pub fn empty(year: i32, month: u32) -> Result<Self> {
        Self::new(year, month, [], [])
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Whether this set is scoped to the month containing `date`.
    pub fn applies_to(&self, date: CalendarDate) -> bool {
        self.year == date.year() && self.month == date.month()
    }

    pub fn blocks_weekday(&self, weekday: u8) -> bool {
        self.blocked_weekdays.contains(&weekday)
    }

    pub fn blocks_date(&self, day: u32) -> bool {
        u8::try_from(day).map(|d| self.blocked_dates.contains(&d)).unwrap_or(false)
    }
}
