use std::time::{Duration, SystemTime};

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;

/// Current wall-clock time in the configured timezone. The system RTC is the
/// time source; whatever set it (factory, companion, last boot) is out of
/// this program's hands.
pub fn now_local(timezone: &Tz) -> NaiveDateTime {
    let utc: DateTime<Utc> = SystemTime::now().into();
    utc.with_timezone(timezone).naive_local()
}

/// Time left until the next minute boundary.
pub fn until_next_minute(now: NaiveDateTime) -> Duration {
    let into_minute = Duration::new(
        now.second() as u64,
        now.nanosecond() % 1_000_000_000,
    );

    Duration::from_secs(60).saturating_sub(into_minute)
}
