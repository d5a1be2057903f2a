use crate::modules::time_logs::use_cases::register_time_log::decision::Decision;
use crate::modules::time_logs::use_cases::update_time_log::command::UpdateTimeLog;
use crate::modules::time_logs::use_cases::update_time_log::decide::decide_update;
use crate::shared::application::ApplicationError;
use crate::shared::core::time_log::TimeLogEntry;
use crate::shared::infrastructure::storage::{StorageBackend, StorageError};
use std::sync::Arc;

pub struct UpdateTimeLogHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    storage: Arc<TStorage>,
}

impl<TStorage> UpdateTimeLogHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    pub fn new(storage: Arc<TStorage>) -> Self {
        Self { storage }
    }

    #[tracing::instrument(skip(self, command), fields(id = %command.id))]
    pub async fn handle(&self, command: UpdateTimeLog) -> Result<TimeLogEntry, ApplicationError> {
        let stored = self
            .storage
            .get_log(&command.id)
            .await
            .inspect_err(|error| tracing::warn!(%error, "time log lookup failed"))?
            .ok_or_else(|| ApplicationError::NotFound(command.id.clone()))?;

        let project = self
            .storage
            .get_project(command.target_project_id(&stored.project_id))
            .await
            .inspect_err(|error| tracing::warn!(%error, "project lookup failed"))?;

        match decide_update(&stored, project.as_ref(), command) {
            Decision::Accepted { log } => match self.storage.save_log(log).await {
                Ok(saved) => {
                    tracing::debug!(week = %saved.week_start_date, "time log updated");
                    Ok(saved)
                }
                Err(StorageError::NotFound { id, .. }) => Err(ApplicationError::NotFound(id)),
                Err(error) => {
                    tracing::warn!(%error, "saving time log failed");
                    Err(error.into())
                }
            },
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
