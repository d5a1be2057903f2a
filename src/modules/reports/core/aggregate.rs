// Report Aggregator entry point.
//
// Pure and synchronous: runs on one fetched snapshot and builds both views from scratch.
// filter -> resolve -> flat rollup + flat lines -> optional sort -> nest.

use crate::modules::reports::core::date_range::{WeekRange, filter_logs};
use crate::modules::reports::core::department_report::{DepartmentReport, flatten, nest};
use crate::modules::reports::core::merged_report::{MergedProjectRow, build_merged_report};
use crate::modules::reports::core::resolver::ProjectIndex;
use crate::modules::reports::core::sort::{SortError, SortState, Sorter};
use crate::shared::core::dictionary::Dictionaries;
use crate::shared::core::project::Project;
use crate::shared::core::time_log::TimeLogEntry;
use serde::Serialize;

/// Everything the aggregator reads, fetched together.
#[derive(Debug, Clone, Default)]
pub struct ReportSnapshot {
    pub logs: Vec<TimeLogEntry>,
    pub projects: Vec<Project>,
    pub dictionaries: Dictionaries,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// `None` when the requested bounds were malformed.
    pub range: Option<WeekRange>,
    pub merged: Vec<MergedProjectRow>,
    pub departments: DepartmentReport,
}

pub fn build_report(
    snapshot: &ReportSnapshot,
    range: Option<&WeekRange>,
    sort: SortState,
    locale: &str,
) -> Result<Report, SortError> {
    let logs = filter_logs(&snapshot.logs, range);
    let index = ProjectIndex::new(&snapshot.projects);

    let mut merged = build_merged_report(&logs, &index);
    let mut lines = flatten(&logs, &index);
    if sort.field.is_some() {
        let sorter = Sorter::new(&snapshot.dictionaries, locale)?;
        sorter.apply(&mut merged, sort);
        sorter.apply(&mut lines, sort);
    }
    let departments = nest(&lines);

    tracing::debug!(
        logs = logs.len(),
        projects = snapshot.projects.len(),
        merged_rows = merged.len(),
        departments = departments.departments.len(),
        "report aggregated"
    );
    Ok(Report {
        range: range.cloned(),
        merged,
        departments,
    })
}
