//! Shared doubles for action handler tests.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

pub(crate) struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

/// 2026-03-14T23:30:00Z; late enough that a local-time date could differ.
pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: Utc
            .with_ymd_and_hms(2026, 3, 14, 23, 30, 0)
            .single()
            .expect("valid fixture timestamp"),
    })
}

pub(crate) fn fixture_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid fixture date")
}
