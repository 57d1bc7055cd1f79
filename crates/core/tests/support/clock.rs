use chrono::NaiveDateTime;
use slotbook_core::ports::Clock;
use slotbook_domain::CalendarDate;

/// Clock pinned to a fixed instant so past-day checks are deterministic.
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Pin the clock to the very start of the given day.
    pub fn at_start_of(date: CalendarDate) -> Self {
        Self(date.start_of_day())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
