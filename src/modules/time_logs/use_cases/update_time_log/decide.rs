use crate::modules::time_logs::use_cases::register_time_log::command::RegisterTimeLog;
use crate::modules::time_logs::use_cases::register_time_log::decide::decide_register;
use crate::modules::time_logs::use_cases::register_time_log::decision::Decision;
use crate::modules::time_logs::use_cases::update_time_log::command::UpdateTimeLog;
use crate::shared::core::project::Project;
use crate::shared::core::time_log::TimeLogEntry;

/// Applies `command` to `stored` under the same rules as a new entry.
///
/// The snapshot is taken again from `project`, the current record of the target project.
/// Identity, creation time and author of the stored log are kept.
pub fn decide_update(
    stored: &TimeLogEntry,
    project: Option<&Project>,
    command: UpdateTimeLog,
) -> Decision {
    let merged = RegisterTimeLog {
        project_id: command
            .project_id
            .unwrap_or_else(|| stored.project_id.clone()),
        worker_name: command
            .worker_name
            .unwrap_or_else(|| stored.worker_name.clone()),
        content: command.content.unwrap_or_else(|| stored.content.clone()),
        hours: command.hours.unwrap_or(stored.hours),
        week_of: command
            .week_of
            .unwrap_or_else(|| stored.week_start_date.clone()),
        created_by: stored.created_by.clone(),
    };

    match decide_register(project, merged) {
        Decision::Accepted { log } => Decision::Accepted {
            log: TimeLogEntry {
                id: stored.id.clone(),
                created: stored.created.clone(),
                ..log
            },
        },
        rejected => rejected,
    }
}
