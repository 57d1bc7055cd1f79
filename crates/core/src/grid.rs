//! Calendar grid builder
//!
//! Pure partition of a classified month into week rows. Padding days
//! borrowed from the neighboring months are always disabled and marked as
//! non-current, so the presentation layer renders them non-interactive.

use slotbook_domain::{CalendarDate, CalendarDayCell, CalendarMonthGrid, CalendarWeek};

/// Build the week-partitioned grid for `reference_month`.
///
/// `current_month_cells` must be the classified cells for day 1..=last of
/// the month, in order, as produced by [`classify`]. Leading padding walks
/// backward from day 1 until the week's first weekday (Sunday); trailing
/// padding walks forward from the last day until Saturday. The combined cell
/// count is a multiple of seven by construction.
///
/// [`classify`]: crate::availability::classify
pub fn build_month_grid(
    reference_month: CalendarDate,
    current_month_cells: Vec<CalendarDayCell>,
) -> CalendarMonthGrid {
    let first = reference_month.first_of_month();
    let last = first.last_of_month();

    let leading_count = i64::from(first.weekday_index());
    let trailing_count = i64::from(6 - last.weekday_index());

    let mut cells =
        Vec::with_capacity((leading_count + trailing_count) as usize + current_month_cells.len());
    // Backward walk yields descending dates; iterate offsets in reverse to
    // emit the padding in ascending order.
    for offset in (1..=leading_count).rev() {
        cells.push(padding_cell(first.sub_days(offset)));
    }
    cells.extend(current_month_cells);
    for offset in 1..=trailing_count {
        cells.push(padding_cell(last.add_days(offset)));
    }

    debug_assert!(cells.len() % 7 == 0, "grid cell count {} is not a multiple of 7", cells.len());

    let weeks = cells
        .chunks(7)
        .enumerate()
        .map(|(index, chunk)| CalendarWeek { week_index: index + 1, days: chunk.to_vec() })
        .collect();

    CalendarMonthGrid { reference_month: first, weeks }
}

fn padding_cell(date: CalendarDate) -> CalendarDayCell {
    CalendarDayCell { date, disabled: true, is_current_month: false }
}
