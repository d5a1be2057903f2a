use crate::modules::time_logs::use_cases::register_time_log::{
    command::RegisterTimeLog,
    decision::{DecideError, Decision},
};
use crate::shared::core::project::Project;
use crate::shared::core::time_log::{ProjectSnapshot, TimeLogEntry};
use crate::shared::core::week::week_key;

/// `project` is the current record for `command.project_id`, if any.
pub fn decide_register(project: Option<&Project>, command: RegisterTimeLog) -> Decision {
    let Some(week_start_date) = week_key(&command.week_of) else {
        return Decision::Rejected {
            reason: DecideError::InvalidWeek(command.week_of),
        };
    };
    let worker_name = command.worker_name.trim();
    if worker_name.is_empty() {
        return Decision::Rejected {
            reason: DecideError::MissingWorker,
        };
    }
    let content = command.content.trim();
    if content.is_empty() {
        return Decision::Rejected {
            reason: DecideError::EmptyContent,
        };
    }
    if !command.hours.is_finite() || command.hours <= 0.0 {
        return Decision::Rejected {
            reason: DecideError::InvalidHours,
        };
    }
    let Some(project) = project.filter(|project| project.id == command.project_id) else {
        return Decision::Rejected {
            reason: DecideError::UnknownProject(command.project_id),
        };
    };

    Decision::Accepted {
        log: TimeLogEntry {
            id: String::new(),
            project_id: project.id.clone(),
            snapshot: ProjectSnapshot::of(project),
            worker_name: worker_name.to_string(),
            content: content.to_string(),
            hours: command.hours,
            week_start_date,
            created: String::new(),
            created_by: command.created_by,
            expand: None,
        },
    }
}
