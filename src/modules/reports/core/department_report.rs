// Nested rollup: department, then type, then project.
//
// Built in two passes. `flatten` merges logs by (department, type, project) into leaf lines; the
// caller may sort those lines; `nest` then regroups them. Groups appear in the order their first
// line appears, so a sort applied to the lines shows up inside every group while the grouping
// stays intact. Department totals are summed from the leaves during `nest`.

use crate::modules::reports::core::resolver::{ProjectIndex, resolve};
use crate::shared::core::time_log::TimeLogEntry;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentLine {
    pub department_key: String,
    pub type_key: String,
    pub project_id: String,
    pub project_name: String,
    pub hours: f64,
    pub people: IndexSet<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectStats {
    pub name: String,
    pub hours: f64,
    pub people: IndexSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TypeStats {
    pub projects: IndexMap<String, ProjectStats>,
}

impl TypeStats {
    pub fn row_span(&self) -> usize {
        self.projects.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStats {
    pub total_hours: f64,
    pub types: IndexMap<String, TypeStats>,
}

impl DepartmentStats {
    /// Number of leaf project rows under the department.
    pub fn row_span(&self) -> usize {
        self.types.values().map(TypeStats::row_span).sum()
    }

    /// Distinct workers across every project of the department.
    pub fn people(&self) -> IndexSet<&str> {
        self.types
            .values()
            .flat_map(|stats| stats.projects.values())
            .flat_map(|project| project.people.iter().map(String::as_str))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DepartmentReport {
    pub departments: IndexMap<String, DepartmentStats>,
}

impl DepartmentReport {
    pub fn get(&self, department_key: &str) -> Option<&DepartmentStats> {
        self.departments.get(department_key)
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    /// Leaf lines in display order, department by department.
    pub fn leaves(&self) -> impl Iterator<Item = (&str, &str, &str, &ProjectStats)> {
        self.departments.iter().flat_map(|(department_key, department)| {
            department.types.iter().flat_map(move |(type_key, stats)| {
                stats.projects.iter().map(move |(project_id, project)| {
                    (
                        department_key.as_str(),
                        type_key.as_str(),
                        project_id.as_str(),
                        project,
                    )
                })
            })
        })
    }
}

pub fn flatten(logs: &[&TimeLogEntry], index: &ProjectIndex<'_>) -> Vec<DepartmentLine> {
    let mut lines: IndexMap<(String, String, String), DepartmentLine> = IndexMap::new();
    for log in logs {
        let fields = resolve(log, index);
        let key = (
            fields.department.clone(),
            fields.project_type.clone(),
            log.project_id.clone(),
        );
        let line = lines.entry(key).or_insert_with(|| DepartmentLine {
            department_key: fields.department,
            type_key: fields.project_type,
            project_id: log.project_id.clone(),
            project_name: String::new(),
            hours: 0.0,
            people: IndexSet::new(),
        });
        line.hours += log.hours;
        line.people.insert(log.worker_name.clone());
        line.project_name = fields.project_name;
    }
    lines.into_values().collect()
}

pub fn nest(lines: &[DepartmentLine]) -> DepartmentReport {
    let mut departments: IndexMap<String, DepartmentStats> = IndexMap::new();
    for line in lines {
        let department = departments
            .entry(line.department_key.clone())
            .or_default();
        department.total_hours += line.hours;
        let project = department
            .types
            .entry(line.type_key.clone())
            .or_default()
            .projects
            .entry(line.project_id.clone())
            .or_insert_with(|| ProjectStats {
                name: line.project_name.clone(),
                hours: 0.0,
                people: IndexSet::new(),
            });
        project.hours += line.hours;
        project.people.extend(line.people.iter().cloned());
        project.name = line.project_name.clone();
    }
    DepartmentReport { departments }
}

pub fn build_department_report(
    logs: &[&TimeLogEntry],
    index: &ProjectIndex<'_>,
) -> DepartmentReport {
    nest(&flatten(logs, index))
}
