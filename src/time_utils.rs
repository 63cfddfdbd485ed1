// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for day-boundary arithmetic and calendar-day keys.

use chrono::{DateTime, Duration, NaiveTime, TimeZone};

/// Midnight at the start of the day `days_ahead` days after `now`'s day,
/// in `now`'s timezone.
///
/// A DST jump can make local midnight ambiguous or nonexistent; in that
/// case the earliest valid instant of the day is used.
pub fn day_start<Tz: TimeZone>(now: &DateTime<Tz>, days_ahead: i64) -> DateTime<Tz> {
    let date = now.date_naive() + Duration::days(days_ahead);
    let midnight = date.and_time(NaiveTime::MIN);
    now.timezone()
        .from_local_datetime(&midnight)
        .earliest()
        .unwrap_or_else(|| {
            now.timezone()
                .from_local_datetime(&(midnight + Duration::hours(1)))
                .earliest()
                .unwrap_or_else(|| now.clone())
        })
}

/// Format a timestamp's calendar day as `YYYY-MM-DD`, in its own timezone.
pub fn day_key<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid RFC3339 timestamp")
    }

    #[test]
    fn test_day_start_today() {
        let now = at("2026-03-10T15:30:00Z");
        assert_eq!(day_start(&now, 0), at("2026-03-10T00:00:00Z"));
    }

    #[test]
    fn test_day_start_crosses_month() {
        let now = at("2026-03-31T23:59:59Z");
        assert_eq!(day_start(&now, 1), at("2026-04-01T00:00:00Z"));
    }

    #[test]
    fn test_day_start_respects_offset() {
        // 15:30 UTC is already 23:30 on the same day at UTC+8; midnight
        // must be computed in the local offset, not UTC.
        let tz = FixedOffset::east_opt(8 * 3600).expect("valid offset");
        let now = at("2026-03-10T15:30:00Z").with_timezone(&tz);
        let start = day_start(&now, 0);
        assert_eq!(start.to_rfc3339(), "2026-03-10T00:00:00+08:00");
    }

    #[test]
    fn test_day_key_formats_calendar_day() {
        let now = at("2026-03-05T09:00:00Z");
        assert_eq!(day_key(&now), "2026-03-05");
    }

    #[test]
    fn test_day_key_uses_local_day() {
        // 17:30 UTC on 03-10 is 01:30 on 03-11 at UTC+8.
        let tz = FixedOffset::east_opt(8 * 3600).expect("valid offset");
        let now = at("2026-03-10T17:30:00Z").with_timezone(&tz);
        assert_eq!(day_key(&now), "2026-03-11");
    }
}
