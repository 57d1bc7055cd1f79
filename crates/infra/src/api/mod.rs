//! Scheduling service API adapters

mod blocked_dates;

pub use blocked_dates::BlockedDatesApi;
