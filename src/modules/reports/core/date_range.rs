// Week-granular date range filter.
//
// Both ends of a requested range are moved to the Monday of their week, then logs are kept when
// their week-start key lies within the normalised bounds. Comparison is done on the fixed-width
// `YYYY-MM-DD` strings, so a log of the week after the end date is excluded even when that week
// starts only a day later.

use crate::shared::core::time_log::TimeLogEntry;
use crate::shared::core::week::{format_date, parse_date, week_start};
use chrono::{Days, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRange {
    pub start_week: String,
    pub end_week: String,
}

impl WeekRange {
    /// `None` when either bound is missing or malformed.
    pub fn parse(start: &str, end: &str) -> Option<Self> {
        Self::between(parse_date(start)?, parse_date(end)?)
    }

    /// `None` when a bound has no representable week start.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        Some(Self {
            start_week: format_date(week_start(start)?),
            end_week: format_date(week_start(end)?),
        })
    }

    /// The last `weeks` weeks up to and including `today`.
    pub fn trailing(today: NaiveDate, weeks: u32) -> Option<Self> {
        Self::between(trailing_start(today, weeks)?, today)
    }

    pub fn is_empty(&self) -> bool {
        self.start_week > self.end_week
    }

    pub fn contains_week(&self, week_start_date: &str) -> bool {
        self.start_week.as_str() <= week_start_date && week_start_date <= self.end_week.as_str()
    }
}

/// A day in the first of the last `weeks` weeks ending with `today`.
pub fn trailing_start(today: NaiveDate, weeks: u32) -> Option<NaiveDate> {
    today.checked_sub_days(Days::new(u64::from(weeks.saturating_sub(1)) * 7))
}

/// Logs whose week lies within the range, in their original order.
pub fn filter_logs<'a>(logs: &'a [TimeLogEntry], range: Option<&WeekRange>) -> Vec<&'a TimeLogEntry> {
    match range {
        Some(range) if !range.is_empty() => logs
            .iter()
            .filter(|log| range.contains_week(&log.week_start_date))
            .collect(),
        _ => Vec::new(),
    }
}
