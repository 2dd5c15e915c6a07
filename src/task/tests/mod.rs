//! Unit tests for the task module.


use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// 19 July 2025, 10:00 UTC.
    pub(crate) fn morning() -> Self {
        Self(Utc.with_ymd_and_hms(2025, 7, 19, 10, 0, 0).single().unwrap_or_default())
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
