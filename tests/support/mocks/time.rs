// tests/support/mocks/time.rs
use chrono::{DateTime, TimeZone, Utc};
use contentcast::application::ports::time::Clock;

/// Deterministic timestamp used by every fake.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}
