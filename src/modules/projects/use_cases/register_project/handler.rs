use crate::modules::projects::use_cases::register_project::command::RegisterProject;
use crate::modules::projects::use_cases::register_project::decide::decide_register_project;
use crate::modules::projects::use_cases::register_project::decision::Decision;
use crate::shared::application::ApplicationError;
use crate::shared::core::project::Project;
use crate::shared::infrastructure::storage::StorageBackend;
use std::sync::Arc;

pub struct RegisterProjectHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    storage: Arc<TStorage>,
}

impl<TStorage> RegisterProjectHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    pub fn new(storage: Arc<TStorage>) -> Self {
        Self { storage }
    }

    #[tracing::instrument(skip(self, command), fields(name = %command.name))]
    pub async fn handle(&self, command: RegisterProject) -> Result<Project, ApplicationError> {
        let dictionaries = self
            .storage
            .get_dictionaries()
            .await
            .inspect_err(|error| tracing::warn!(%error, "dictionary lookup failed"))?;

        match decide_register_project(&dictionaries, command) {
            Decision::Accepted { project } => {
                let saved = self
                    .storage
                    .save_project(project)
                    .await
                    .inspect_err(|error| tracing::warn!(%error, "saving project failed"))?;
                tracing::debug!(id = %saved.id, "project registered");
                Ok(saved)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
