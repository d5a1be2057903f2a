// Weekly time log as stored in the `work_logs` collection.
//
// Purpose
// - "worker W spent H hours on project P during the week starting D, and wrote C."
//
// Notes
// - `snapshot` is a denormalised copy of the project classification taken when the log was saved.
//   It is the fallback when the project is later edited away or deleted.
// - `expand` is the live project reference the backend may embed when asked to expand `projectId`.
// - `week_start_date` is always the Monday of the week, formatted `YYYY-MM-DD`.

use crate::shared::core::project::Project;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_dept: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_sub_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_platform: Option<String>,
}

impl ProjectSnapshot {
    pub fn of(project: &Project) -> Self {
        Self {
            project_name: Some(project.name.clone()),
            project_dept: Some(project.department.clone()),
            project_type: Some(project.project_type.clone()),
            project_sub_type: project.sub_type.clone(),
            project_platform: Some(project.platform.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogExpand {
    #[serde(rename = "projectId", default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLogEntry {
    pub id: String,
    pub project_id: String,
    #[serde(flatten)]
    pub snapshot: ProjectSnapshot,
    pub worker_name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub hours: f64,
    pub week_start_date: String,
    #[serde(default)]
    pub created: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand: Option<LogExpand>,
}

impl TimeLogEntry {
    /// Live project reference embedded by the backend, if any.
    pub fn expanded_project(&self) -> Option<&Project> {
        self.expand.as_ref().and_then(|expand| expand.project.as_ref())
    }
}
