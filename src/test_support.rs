//! Shared helpers for unit tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pins the clock to noon UTC on the given date.
    pub fn at_noon(year: i32, month: u32, day: u32) -> Self {
        let instant = Utc
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .expect("valid calendar date");
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}
