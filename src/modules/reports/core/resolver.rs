// Per-log field resolution ("current truth").
//
// Every field is resolved on its own, in this order:
// 1. the live project from the project index,
// 2. the project reference the backend expanded onto the log,
// 3. the snapshot stored on the log when it was saved,
// 4. a sentinel, so grouping keys are always defined.
// Blank strings count as absent at every step.

use crate::shared::core::project::Project;
use crate::shared::core::time_log::TimeLogEntry;
use std::collections::HashMap;

pub const UNKNOWN_KEY: &str = "unknown";
/// Name shown for a log whose project left no trace; English like the built-in dictionary labels.
pub const UNKNOWN_PROJECT_NAME: &str = "Unknown project";

/// Project identifier to current project record.
#[derive(Debug, Default)]
pub struct ProjectIndex<'a> {
    by_id: HashMap<&'a str, &'a Project>,
}

impl<'a> ProjectIndex<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self {
            by_id: projects
                .iter()
                .map(|project| (project.id.as_str(), project))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&'a Project> {
        self.by_id.get(id).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFields {
    pub project_name: String,
    pub department: String,
    pub project_type: String,
    /// `None` when no source carries a subtype; a missing subtype is not an error.
    pub sub_type: Option<String>,
    pub attribute: String,
    pub level: String,
    pub platform: String,
}

fn first_present<'a>(candidates: [Option<&'a str>; 3]) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

pub fn resolve(log: &TimeLogEntry, index: &ProjectIndex<'_>) -> ResolvedFields {
    let live = index.get(&log.project_id);
    let expanded = log.expanded_project();
    let snapshot = &log.snapshot;

    let pick = |field: fn(&Project) -> &str, stored: Option<&str>, fallback: &str| -> String {
        first_present([live.map(field), expanded.map(field), stored])
            .unwrap_or(fallback)
            .to_string()
    };

    ResolvedFields {
        project_name: pick(
            |project| &project.name,
            snapshot.project_name.as_deref(),
            UNKNOWN_PROJECT_NAME,
        ),
        department: pick(
            |project| &project.department,
            snapshot.project_dept.as_deref(),
            UNKNOWN_KEY,
        ),
        project_type: pick(
            |project| &project.project_type,
            snapshot.project_type.as_deref(),
            UNKNOWN_KEY,
        ),
        sub_type: first_present([
            live.and_then(|project| project.sub_type.as_deref()),
            expanded.and_then(|project| project.sub_type.as_deref()),
            snapshot.project_sub_type.as_deref(),
        ])
        .map(str::to_string),
        attribute: pick(|project| &project.attribute, None, UNKNOWN_KEY),
        level: pick(|project| &project.level, None, UNKNOWN_KEY),
        platform: pick(
            |project| &project.platform,
            snapshot.project_platform.as_deref(),
            UNKNOWN_KEY,
        ),
    }
}

#[cfg(test)]
mod resolver_tests {
    use super::*;
    use crate::shared::core::time_log::LogExpand;
    use crate::tests::fixtures::projects::ProjectBuilder;
    use crate::tests::fixtures::time_logs::TimeLogBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn projects() -> Vec<Project> {
        vec![
            ProjectBuilder::new()
                .id("p-live")
                .name("Live name")
                .department("brand")
                .project_type("")
                .level("A")
                .attribute("routine")
                .platform("ios")
                .build(),
        ]
    }

    #[rstest]
    fn it_should_prefer_the_live_project(projects: Vec<Project>) {
        let index = ProjectIndex::new(&projects);
        let log = TimeLogBuilder::new()
            .project_id("p-live")
            .snapshot_department("rd_center")
            .snapshot_name("Old name")
            .build();
        let resolved = resolve(&log, &index);
        assert_eq!(resolved.department, "brand");
        assert_eq!(resolved.project_name, "Live name");
        assert_eq!(resolved.level, "A");
        assert_eq!(resolved.platform, "ios");
    }

    #[rstest]
    fn it_should_fall_back_independently_per_field(projects: Vec<Project>) {
        let index = ProjectIndex::new(&projects);
        let log = TimeLogBuilder::new()
            .project_id("p-live")
            .snapshot_type("ui_design")
            .build();
        let resolved = resolve(&log, &index);
        assert_eq!(resolved.department, "brand");
        assert_eq!(resolved.project_type, "ui_design");
    }

    #[rstest]
    fn it_should_use_the_expanded_reference_when_the_project_is_not_indexed() {
        let index = ProjectIndex::default();
        let mut log = TimeLogBuilder::new()
            .project_id("p-expanded")
            .snapshot_department("rd_center")
            .build();
        log.expand = Some(LogExpand {
            project: Some(
                ProjectBuilder::new()
                    .id("p-expanded")
                    .department("marketing")
                    .level("S")
                    .build(),
            ),
        });
        let resolved = resolve(&log, &index);
        assert_eq!(resolved.department, "marketing");
        assert_eq!(resolved.level, "S");
    }

    #[rstest]
    fn it_should_fall_back_to_the_snapshot_for_deleted_projects() {
        let index = ProjectIndex::default();
        let log = TimeLogBuilder::new()
            .project_id("p-deleted")
            .snapshot_name("Archived campaign")
            .snapshot_department("brand")
            .snapshot_type("video_edit")
            .snapshot_sub_type("cut")
            .snapshot_platform("social")
            .build();
        let resolved = resolve(&log, &index);
        assert_eq!(
            resolved,
            ResolvedFields {
                project_name: "Archived campaign".into(),
                department: "brand".into(),
                project_type: "video_edit".into(),
                sub_type: Some("cut".into()),
                attribute: UNKNOWN_KEY.into(),
                level: UNKNOWN_KEY.into(),
                platform: "social".into(),
            }
        );
    }

    #[rstest]
    fn it_should_use_sentinels_when_no_source_knows_the_field() {
        let index = ProjectIndex::default();
        let log = TimeLogBuilder::new()
            .project_id("p-void")
            .snapshot_department("   ")
            .build();
        let resolved = resolve(&log, &index);
        assert_eq!(resolved.project_name, "Unknown project");
        assert_eq!(resolved.department, UNKNOWN_KEY);
        assert_eq!(resolved.project_type, UNKNOWN_KEY);
        assert_eq!(resolved.sub_type, None);
        assert_eq!(resolved.platform, UNKNOWN_KEY);
    }

    #[rstest]
    fn it_should_resolve_the_same_way_twice(projects: Vec<Project>) {
        let index = ProjectIndex::new(&projects);
        let log = TimeLogBuilder::new()
            .project_id("p-live")
            .snapshot_type("ui_design")
            .build();
        assert_eq!(resolve(&log, &index), resolve(&log, &index));
    }
}
