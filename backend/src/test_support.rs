//! Test utilities for the backend crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`). Only
//! compiled for tests or with the `test-support` feature.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// Clock frozen at a single instant.
///
/// # Examples
/// ```
/// use business_backend::test_support::FixedClock;
/// use chrono::NaiveDate;
/// use mockable::Clock;
///
/// let day = NaiveDate::from_ymd_opt(2023, 6, 15).expect("valid date");
/// let clock = FixedClock::at_noon(day).expect("noon exists");
/// assert_eq!(clock.local().date_naive(), day);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    /// Freeze the clock at `now`.
    #[must_use]
    pub fn new(now: DateTime<Local>) -> Self {
        Self { now }
    }

    /// Freeze the clock at local noon on `date`.
    #[must_use]
    pub fn at_noon(date: NaiveDate) -> Option<Self> {
        let noon = date.and_hms_opt(12, 0, 0)?;
        Local.from_local_datetime(&noon).earliest().map(Self::new)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }
}
