//! Domain data types

pub mod calendar;
pub mod grid;
pub mod rules;
pub mod user;

pub use calendar::CalendarDate;
pub use grid::{CalendarDayCell, CalendarMonthGrid, CalendarWeek};
pub use rules::BlockedRuleSet;
pub use user::Username;
