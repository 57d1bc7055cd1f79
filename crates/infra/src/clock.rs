//! Wall-clock implementation of the `Clock` port

use chrono::{Local, NaiveDateTime};
use slotbook_core::ports::Clock;

/// Clock backed by local system time.
///
/// Past-day checks are moment-of-render sensitive: "now" is read at
/// classification time, in the host's local timezone, matching how the
/// booking page renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
