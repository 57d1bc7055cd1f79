//! Week-partitioned month grid types
//!
//! The grid is rebuilt from scratch on every navigation step or rule
//! refetch; it is never mutated incrementally.

use serde::{Deserialize, Serialize};

use crate::types::CalendarDate;

/// One cell of the month grid.
///
/// `disabled` cells are not bookable: padding cells borrowed from the
/// neighboring months, days whose end-of-day is already past, and days hit by
/// a blocking rule. `is_current_month` distinguishes real days from padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDayCell {
    pub date: CalendarDate,
    pub disabled: bool,
    pub is_current_month: bool,
}

/// A single week row: exactly seven consecutive cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarWeek {
    /// 1-based row number within the grid.
    pub week_index: usize,
    pub days: Vec<CalendarDayCell>,
}

/// The full grid for one displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMonthGrid {
    /// First day of the displayed month.
    pub reference_month: CalendarDate,
    pub weeks: Vec<CalendarWeek>,
}

impl CalendarMonthGrid {
    /// All cells in grid order (leading padding, month days, trailing
    /// padding).
    pub fn cells(&self) -> impl Iterator<Item = &CalendarDayCell> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    /// Look up the cell for a specific date, if the grid contains it.
    pub fn cell(&self, date: CalendarDate) -> Option<&CalendarDayCell> {
        self.cells().find(|cell| cell.date == date)
    }

    /// Number of real (non-padding) day cells.
    pub fn current_month_day_count(&self) -> usize {
        self.cells().filter(|cell| cell.is_current_month).count()
    }
}
