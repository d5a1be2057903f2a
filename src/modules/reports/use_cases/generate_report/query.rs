use crate::modules::reports::core::date_range::{WeekRange, trailing_start};
use crate::modules::reports::core::sort::{SortDirection, SortField, SortState};
use crate::shared::core::week::parse_date;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    pub sort: Option<SortField>,
    pub direction: Option<SortDirection>,
}

fn provided(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().filter(|value| !value.trim().is_empty())
}

impl ReportQuery {
    /// A missing bound takes its default from the trailing window ending `today`; a bound that is
    /// present but malformed, or lies before the earliest representable week, yields `None`.
    pub fn range(&self, today: NaiveDate, default_weeks: u32) -> Option<WeekRange> {
        let start = match provided(&self.start) {
            Some(raw) => parse_date(raw)?,
            None => trailing_start(today, default_weeks)?,
        };
        let end = match provided(&self.end) {
            Some(raw) => parse_date(raw)?,
            None => today,
        };
        WeekRange::between(start, end)
    }

    pub fn sort_state(&self) -> SortState {
        SortState {
            field: self.sort,
            direction: self.direction.unwrap_or_default(),
        }
    }
}
