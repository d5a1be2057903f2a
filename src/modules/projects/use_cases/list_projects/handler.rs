use crate::modules::projects::use_cases::list_projects::query::ListProjects;
use crate::shared::application::ApplicationError;
use crate::shared::core::project::Project;
use crate::shared::infrastructure::storage::StorageBackend;
use std::sync::Arc;

pub struct ListProjectsHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    storage: Arc<TStorage>,
}

impl<TStorage> ListProjectsHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    pub fn new(storage: Arc<TStorage>) -> Self {
        Self { storage }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, query: ListProjects) -> Result<Vec<Project>, ApplicationError> {
        let projects = self
            .storage
            .get_projects()
            .await
            .inspect_err(|error| tracing::warn!(%error, "listing projects failed"))?;
        let matching: Vec<Project> = projects
            .into_iter()
            .filter(|project| query.matches(project))
            .collect();
        tracing::debug!(count = matching.len(), "projects listed");
        Ok(matching)
    }
}
