use chrono::{DateTime, Datelike, Duration, Utc};

use crate::models::DateRange;

fn midnight_of(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_hms_opt(0, 0, 0).unwrap().and_utc()
}

/// `[midnight today, midnight tomorrow)` on the supplied clock.
pub fn today_range(now: DateTime<Utc>) -> DateRange {
    let start = midnight_of(now);
    DateRange {
        start,
        end: start + Duration::days(1),
    }
}

/// `[midnight today, midnight in seven days)`.
pub fn next_7_days_range(now: DateTime<Utc>) -> DateRange {
    let start = midnight_of(now);
    DateRange {
        start,
        end: start + Duration::days(7),
    }
}

/// The calendar week containing `now`, anchored on the most recent Sunday.
pub fn this_week_range(now: DateTime<Utc>) -> DateRange {
    let days_since_sunday = now.weekday().num_days_from_sunday() as i64;
    let start = midnight_of(now) - Duration::days(days_since_sunday);
    DateRange {
        start,
        end: start + Duration::days(7),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn today_range_covers_the_whole_day() {
        // A Monday afternoon.
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 14, 30, 0).unwrap();
        let range = today_range(now);
        assert_eq!(range.start, Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap());
        assert_eq!(range.end, Utc.with_ymd_and_hms(2025, 3, 11, 0, 0, 0).unwrap());
        assert!(range.contains(now));
        assert!(!range.contains(range.end));
    }

    #[test]
    fn next_7_days_starts_at_todays_midnight() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
        let range = next_7_days_range(now);
        assert_eq!(range.start, Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap());
        assert_eq!(range.end, Utc.with_ymd_and_hms(2025, 3, 17, 0, 0, 0).unwrap());
    }

    #[test]
    fn week_range_anchors_on_sunday() {
        // 2025-03-12 is a Wednesday; the week began Sunday 2025-03-09.
        let now = Utc.with_ymd_and_hms(2025, 3, 12, 11, 0, 0).unwrap();
        let range = this_week_range(now);
        assert_eq!(range.start, Utc.with_ymd_and_hms(2025, 3, 9, 0, 0, 0).unwrap());
        assert_eq!(range.end, Utc.with_ymd_and_hms(2025, 3, 16, 0, 0, 0).unwrap());
    }

    #[test]
    fn week_range_on_a_sunday_starts_that_day() {
        let now = Utc.with_ymd_and_hms(2025, 3, 9, 8, 0, 0).unwrap();
        let range = this_week_range(now);
        assert_eq!(range.start, Utc.with_ymd_and_hms(2025, 3, 9, 0, 0, 0).unwrap());
    }
}
