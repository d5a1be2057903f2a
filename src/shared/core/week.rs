// Week bucketing helpers.
//
// Purpose
// - Every time log belongs to exactly one week, identified by the Monday that starts it.
// - Dates travel as fixed-width `YYYY-MM-DD` strings so that lexicographic order equals
//   chronological order.
//
// Boundaries
// - Naive calendar dates only. No time zone conversion is performed.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date on the host clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Monday of the ISO week containing `date`; `None` when that Monday precedes the earliest
/// representable date.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
}

/// Accepts a plain date, a naive datetime or an RFC 3339 timestamp and keeps only the calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(date_time) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(date_time.date());
    }
    if let Ok(date_time) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(date_time.date());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|date_time| date_time.date_naive())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Week-start key (`YYYY-MM-DD` of the Monday) for any parseable date.
pub fn week_key(raw: &str) -> Option<String> {
    parse_date(raw).and_then(week_start).map(format_date)
}

#[cfg(test)]
mod week_tests {
    use super::*;
    use rstest::rstest;

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, DATE_FORMAT).unwrap()
    }

    #[rstest]
    #[case("2024-03-04", "2024-03-04")]
    #[case("2024-03-06", "2024-03-04")]
    #[case("2024-03-10", "2024-03-04")]
    #[case("2024-03-11", "2024-03-11")]
    #[case("2024-01-01", "2024-01-01")]
    #[case("2023-01-01", "2022-12-26")]
    fn it_should_normalize_to_the_monday_of_the_week(#[case] raw: &str, #[case] monday: &str) {
        assert_eq!(week_start(date(raw)), Some(date(monday)));
    }

    #[rstest]
    fn it_should_not_overflow_before_the_earliest_date() {
        let earliest = parse_date("-262143-01-01").unwrap();
        assert_eq!(week_start(earliest), None);
        assert_eq!(week_key("-262143-01-01"), None);
    }

    #[rstest]
    fn it_should_bucket_the_latest_date() {
        let monday = week_start(NaiveDate::MAX).unwrap();
        assert!(monday <= NaiveDate::MAX);
        assert_eq!(monday.weekday(), chrono::Weekday::Mon);
    }

    #[rstest]
    #[case("2024-03-06")]
    #[case("2024-03-06T09:30:00")]
    #[case("2024-03-06 09:30:00.123")]
    #[case("2024-03-06T09:30:00Z")]
    #[case(" 2024-03-06 ")]
    fn it_should_parse_dates_and_datetimes(#[case] raw: &str) {
        assert_eq!(parse_date(raw), Some(date("2024-03-06")));
    }

    #[rstest]
    #[case("")]
    #[case("not-a-date")]
    #[case("2024-13-01")]
    #[case("06/03/2024")]
    fn it_should_reject_malformed_dates(#[case] raw: &str) {
        assert_eq!(parse_date(raw), None);
    }

    #[rstest]
    fn it_should_build_the_week_key() {
        assert_eq!(week_key("2024-03-09"), Some("2024-03-04".to_string()));
        assert_eq!(week_key("garbage"), None);
    }
}
