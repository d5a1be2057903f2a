use crate::modules::projects::use_cases::register_project::decision::Decision;
use crate::modules::projects::use_cases::update_project::command::UpdateProject;
use crate::modules::projects::use_cases::update_project::decide::decide_update_project;
use crate::shared::application::ApplicationError;
use crate::shared::core::project::Project;
use crate::shared::infrastructure::storage::{StorageBackend, StorageError};
use std::sync::Arc;

pub struct UpdateProjectHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    storage: Arc<TStorage>,
}

impl<TStorage> UpdateProjectHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    pub fn new(storage: Arc<TStorage>) -> Self {
        Self { storage }
    }

    /// Logs keep the snapshot taken when they were written; reports follow the updated record.
    #[tracing::instrument(skip(self, command), fields(id = %command.id))]
    pub async fn handle(&self, command: UpdateProject) -> Result<Project, ApplicationError> {
        let (stored, dictionaries) = tokio::try_join!(
            self.storage.get_project(&command.id),
            self.storage.get_dictionaries()
        )
        .inspect_err(|error| tracing::warn!(%error, "project lookup failed"))?;
        let stored = stored.ok_or_else(|| ApplicationError::NotFound(command.id.clone()))?;

        match decide_update_project(&dictionaries, stored, command) {
            Decision::Accepted { project } => match self.storage.save_project(project).await {
                Ok(saved) => {
                    tracing::debug!("project updated");
                    Ok(saved)
                }
                Err(StorageError::NotFound { id, .. }) => Err(ApplicationError::NotFound(id)),
                Err(error) => {
                    tracing::warn!(%error, "saving project failed");
                    Err(error.into())
                }
            },
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
