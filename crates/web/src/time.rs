//! Calendar-date helpers for the configured timezone.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Today's date, `YYYY-MM-DD`, as observed in `tz`.
pub fn today_in(tz: Tz) -> String {
    day_of(Utc::now(), tz)
}

/// The calendar date of `instant` as observed in `tz`.
pub fn day_of(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%Y-%m-%d").to_string()
}

/// Current UTC time, milliseconds since epoch.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
