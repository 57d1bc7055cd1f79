//! Month cursor
//!
//! Wraps "first day of the currently displayed month" and exposes pure
//! navigation plus the derived fields the presentation layer puts in the
//! calendar header.

use slotbook_domain::CalendarDate;

/// Cursor over the displayed month, always normalized to day 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCursor {
    reference: CalendarDate,
}

impl DateCursor {
    /// Create a cursor for the month containing `date`.
    pub fn new(date: CalendarDate) -> Self {
        Self { reference: date.first_of_month() }
    }

    /// First day of the displayed month.
    pub fn reference_month(&self) -> CalendarDate {
        self.reference
    }

    /// Cursor at day 1 of the previous month. December/January boundaries
    /// roll the year.
    pub fn previous_month(&self) -> Self {
        Self { reference: self.reference.add_months(-1) }
    }

    /// Cursor at day 1 of the next month.
    pub fn next_month(&self) -> Self {
        Self { reference: self.reference.add_months(1) }
    }

    pub fn year(&self) -> i32 {
        self.reference.year()
    }

    pub fn month(&self) -> u32 {
        self.reference.month()
    }

    pub fn days_in_month(&self) -> u32 {
        self.reference.days_in_month()
    }

    /// English month name for header display.
    pub fn month_name(&self) -> &'static str {
        match self.reference.month() {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            _ => "December",
        }
    }
}
