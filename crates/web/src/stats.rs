//! Relationship-duration arithmetic.
//!
//! Whole years are derived from a 365.25-day year; right before a year ticks
//! over, `breakdown.days` can read up to 366.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use lum_common::types::{DurationBreakdown, DurationStats, DurationTotals};

/// Elapsed duration from `start` (midnight in `tz`) until now.
pub fn relationship_stats(start: NaiveDate, tz: Tz) -> DurationStats {
    duration_stats_at(start, tz, Utc::now())
}

/// Elapsed duration from `start` (midnight in `tz`) until `now`.
pub fn duration_stats_at(start: NaiveDate, tz: Tz, now: DateTime<Utc>) -> DurationStats {
    let midnight = start.and_time(NaiveTime::MIN);
    // An ambiguous local midnight takes the earlier instant; a nonexistent
    // one (DST gap) is read as UTC instead.
    let start_instant = match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
        LocalResult::None => tz.from_utc_datetime(&midnight),
    }
    .with_timezone(&Utc);

    let total_seconds = (now - start_instant).num_seconds();
    let total_minutes = total_seconds / 60;
    let total_hours = total_minutes / 60;
    let total_days = total_hours / 24;

    let years = (total_days as f64 / 365.25).floor() as i64;
    let days = (total_days as f64 - years as f64 * 365.25).floor() as i64;

    DurationStats {
        breakdown: DurationBreakdown {
            years,
            days,
            hours: total_hours % 24,
            minutes: total_minutes % 60,
            seconds: total_seconds % 60,
        },
        totals: DurationTotals {
            days: total_days,
            hours: total_hours,
            minutes: total_minutes,
            seconds: total_seconds,
        },
        start_date: start.format("%Y-%m-%d").to_string(),
        timezone: tz.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::{duration_stats_at, relationship_stats};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 11, 12).unwrap()
    }

    #[test]
    fn exact_snapshot() {
        // Midnight 2021-11-12 in Berlin is 2021-11-11T23:00:00Z (CET).
        // 2026-08-06T00:00:00Z is therefore 1728 days and one hour later.
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 0, 0, 0).unwrap();
        let stats = duration_stats_at(start(), chrono_tz::Europe::Berlin, now);

        assert_eq!(stats.totals.days, 1728);
        assert_eq!(stats.totals.hours, 1728 * 24 + 1);
        assert_eq!(stats.totals.minutes, (1728 * 24 + 1) * 60);
        assert_eq!(stats.totals.seconds, (1728 * 24 + 1) * 60 * 60);

        // floor(1728 / 365.25) = 4 years, leaving 1728 - 1461 = 267 days.
        assert_eq!(stats.breakdown.years, 4);
        assert_eq!(stats.breakdown.days, 267);
        assert_eq!(stats.breakdown.hours, 1);
        assert_eq!(stats.breakdown.minutes, 0);
        assert_eq!(stats.breakdown.seconds, 0);

        assert_eq!(stats.start_date, "2021-11-12");
        assert_eq!(stats.timezone, "Europe/Berlin");
    }

    #[test]
    fn invariants_hold_across_instants() {
        let instants = [
            Utc.with_ymd_and_hms(2021, 11, 11, 23, 0, 1).unwrap(),
            Utc.with_ymd_and_hms(2021, 11, 13, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2022, 11, 11, 22, 59, 59).unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 29, 12, 34, 56).unwrap(),
            Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
        ];

        for now in instants {
            let stats = duration_stats_at(start(), chrono_tz::Europe::Berlin, now);

            assert!(stats.totals.seconds >= stats.totals.minutes);
            assert!(stats.totals.minutes >= stats.totals.hours);
            assert!(stats.totals.hours >= stats.totals.days);
            assert!(stats.totals.days >= 0);

            assert!((0..24).contains(&stats.breakdown.hours));
            assert!((0..60).contains(&stats.breakdown.minutes));
            assert!((0..60).contains(&stats.breakdown.seconds));
            assert!((0..366).contains(&stats.breakdown.days));
            assert!(stats.breakdown.years >= 0);
        }
    }

    #[test]
    fn live_clock_bounds() {
        let stats = relationship_stats(start(), chrono_tz::Europe::Berlin);

        assert!(stats.totals.days > 1000);
        assert!(stats.breakdown.years >= 3);
        assert!((0..366).contains(&stats.breakdown.days));
        assert!((0..24).contains(&stats.breakdown.hours));
    }

    #[test]
    fn handles_nonexistent_local_midnight() {
        // Chile's DST start skips midnight: 2022-09-11 begins at 01:00 local.
        let start = NaiveDate::from_ymd_opt(2022, 9, 11).unwrap();
        let now = Utc.with_ymd_and_hms(2023, 9, 11, 12, 0, 0).unwrap();
        let stats = duration_stats_at(start, chrono_tz::America::Santiago, now);

        assert!(stats.totals.seconds > 0);
        assert_eq!(stats.start_date, "2022-09-11");
        assert_eq!(stats.timezone, "America/Santiago");
    }
}
