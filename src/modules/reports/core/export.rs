// Row-oriented export of both report views.
//
// One row per merged project or per department/type/project leaf. Every column shown for a view
// has a value in its exported row, department subtotal included.

use crate::modules::reports::core::date_range::WeekRange;
use crate::modules::reports::core::department_report::DepartmentReport;
use crate::modules::reports::core::merged_report::MergedProjectRow;
use crate::shared::core::dictionary::{Dictionaries, DictionaryKind};
use serde::{Deserialize, Serialize};

const BOM: &str = "\u{feff}";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportView {
    #[default]
    Merged,
    Departments,
}

impl ReportView {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportView::Merged => "merged",
            ReportView::Departments => "departments",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    fn with_headers(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|header| header.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Byte-order mark, then every cell quoted, rows joined by `\n`.
    pub fn to_csv(&self) -> String {
        let lines: Vec<String> = std::iter::once(&self.headers)
            .chain(self.rows.iter())
            .map(|cells| {
                cells
                    .iter()
                    .map(|cell| quote(cell))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();
        format!("{BOM}{}", lines.join("\n"))
    }
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// Renders hours without a trailing `.0` for whole numbers.
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{hours:.0}")
    } else {
        format!("{}", (hours * 100.0).round() / 100.0)
    }
}

fn type_label(dictionaries: &Dictionaries, type_key: &str, sub_type: Option<&str>) -> String {
    let major = dictionaries.translate(DictionaryKind::Types, type_key);
    match sub_type.filter(|value| !value.is_empty()) {
        Some(sub_type) => format!(
            "{major} - {}",
            dictionaries.translate_sub_type(type_key, sub_type)
        ),
        None => major.to_string(),
    }
}

pub fn merged_table(rows: &[MergedProjectRow], dictionaries: &Dictionaries) -> ExportTable {
    let mut table = ExportTable::with_headers(&[
        "Attribute",
        "Level",
        "Department",
        "Project",
        "Type",
        "Platform",
        "Work summary",
        "Participants",
        "Total hours",
    ]);
    for row in rows {
        table.rows.push(vec![
            dictionaries
                .translate(DictionaryKind::Attributes, &row.attribute_key)
                .to_string(),
            dictionaries
                .translate(DictionaryKind::Levels, &row.level_key)
                .to_string(),
            dictionaries
                .translate(DictionaryKind::Departments, &row.department_key)
                .to_string(),
            row.project_name.clone(),
            type_label(dictionaries, &row.type_key, row.sub_type_key.as_deref()),
            dictionaries
                .translate(DictionaryKind::Platforms, &row.platform_key)
                .to_string(),
            row.contents.join("; "),
            row.participants
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            format_hours(row.total_hours),
        ]);
    }
    table
}

pub fn department_table(report: &DepartmentReport, dictionaries: &Dictionaries) -> ExportTable {
    let mut table = ExportTable::with_headers(&[
        "Department",
        "Type",
        "Project",
        "Participants",
        "Project hours",
        "Department total",
    ]);
    for (department_key, type_key, _, project) in report.leaves() {
        let total = report
            .get(department_key)
            .map(|department| department.total_hours)
            .unwrap_or_default();
        table.rows.push(vec![
            dictionaries
                .translate(DictionaryKind::Departments, department_key)
                .to_string(),
            dictionaries
                .translate(DictionaryKind::Types, type_key)
                .to_string(),
            project.name.clone(),
            project
                .people
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            format_hours(project.hours),
            format_hours(total),
        ]);
    }
    table
}

/// `<view>-hours_<start>_<end>.csv`, or `<view>-hours.csv` without a range.
pub fn export_filename(view: ReportView, range: Option<&WeekRange>) -> String {
    match range {
        Some(range) => format!(
            "{}-hours_{}_{}.csv",
            view.as_str(),
            range.start_week,
            range.end_week
        ),
        None => format!("{}-hours.csv", view.as_str()),
    }
}
