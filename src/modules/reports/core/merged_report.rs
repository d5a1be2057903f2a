// Flat rollup: one row per project touched in the window.
//
// Hours, contents and participants accumulate over every log of the project. Descriptive fields
// (name and classification) are overwritten by each log folded in, so a row reflects the
// classification resolved for the last log processed for that project.

use crate::modules::reports::core::resolver::{ProjectIndex, ResolvedFields, resolve};
use crate::shared::core::time_log::TimeLogEntry;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedProjectRow {
    pub project_id: String,
    pub project_name: String,
    pub department_key: String,
    pub level_key: String,
    pub attribute_key: String,
    pub type_key: String,
    pub sub_type_key: Option<String>,
    pub platform_key: String,
    /// One entry per contributing log, in fold order.
    pub contents: Vec<String>,
    pub total_hours: f64,
    /// Distinct worker names in first-seen order.
    pub participants: IndexSet<String>,
}

impl MergedProjectRow {
    fn seed(log: &TimeLogEntry, fields: ResolvedFields) -> Self {
        let mut row = Self {
            project_id: log.project_id.clone(),
            project_name: String::new(),
            department_key: String::new(),
            level_key: String::new(),
            attribute_key: String::new(),
            type_key: String::new(),
            sub_type_key: None,
            platform_key: String::new(),
            contents: vec![log.content.clone()],
            total_hours: log.hours,
            participants: IndexSet::from([log.worker_name.clone()]),
        };
        row.describe(fields);
        row
    }

    fn absorb(&mut self, log: &TimeLogEntry, fields: ResolvedFields) {
        self.contents.push(log.content.clone());
        self.total_hours += log.hours;
        self.participants.insert(log.worker_name.clone());
        self.describe(fields);
    }

    fn describe(&mut self, fields: ResolvedFields) {
        self.project_name = fields.project_name;
        self.department_key = fields.department;
        self.level_key = fields.level;
        self.attribute_key = fields.attribute;
        self.type_key = fields.project_type;
        self.sub_type_key = fields.sub_type;
        self.platform_key = fields.platform;
    }
}

pub fn build_merged_report(
    logs: &[&TimeLogEntry],
    index: &ProjectIndex<'_>,
) -> Vec<MergedProjectRow> {
    let mut rows: IndexMap<&str, MergedProjectRow> = IndexMap::new();
    for log in logs {
        let fields = resolve(log, index);
        match rows.get_mut(log.project_id.as_str()) {
            Some(row) => row.absorb(log, fields),
            None => {
                rows.insert(log.project_id.as_str(), MergedProjectRow::seed(log, fields));
            }
        }
    }
    rows.into_values().collect()
}
