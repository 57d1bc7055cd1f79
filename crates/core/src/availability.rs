//! Availability resolver
//!
//! Pure classification of a month's real days against the blocking rules and
//! the evaluation instant. Grid padding is handled separately by the grid
//! builder; this module only ever produces current-month cells.

use chrono::NaiveDateTime;
use slotbook_domain::{BlockedRuleSet, CalendarDate, CalendarDayCell, Result, SlotbookError};

/// Classify every real day of `reference_month` as bookable or not.
///
/// A day is disabled when any of three independent predicates holds:
/// its end of day is strictly before `now`, its weekday is in the blocked
/// weekdays, or its day-of-month is in the blocked dates. Comparing the end
/// of day means "today" is never disabled purely for being in the past.
///
/// # Errors
///
/// - [`SlotbookError::RulesUnavailable`] when `rules` is `None`: an
///   unresolved month is not renderable, never all-bookable by default.
/// - [`SlotbookError::MonthMismatch`] when the rule set was fetched for a
///   different (year, month).
pub fn classify(
    reference_month: CalendarDate,
    rules: Option<&BlockedRuleSet>,
    now: NaiveDateTime,
) -> Result<Vec<CalendarDayCell>> {
    let first = reference_month.first_of_month();
    let rules = rules.ok_or(SlotbookError::RulesUnavailable {
        year: first.year(),
        month: first.month(),
    })?;
    if !rules.applies_to(first) {
        return Err(SlotbookError::MonthMismatch {
            rules_year: rules.year(),
            rules_month: rules.month(),
            target_year: first.year(),
            target_month: first.month(),
        });
    }

    (1..=first.days_in_month())
        .map(|day| {
            let date = first.with_day(day)?;
            let disabled = date.end_of_day() < now
                || rules.blocks_weekday(date.weekday_index())
                || rules.blocks_date(day);
            Ok(CalendarDayCell { date, disabled, is_current_month: true })
        })
        .collect()
}
