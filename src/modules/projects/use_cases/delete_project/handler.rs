use crate::shared::application::ApplicationError;
use crate::shared::infrastructure::storage::{StorageBackend, StorageError};
use std::sync::Arc;

pub struct DeleteProjectHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    storage: Arc<TStorage>,
}

impl<TStorage> DeleteProjectHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    pub fn new(storage: Arc<TStorage>) -> Self {
        Self { storage }
    }

    /// Logs of the project stay; reports fall back to their snapshots.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, id: &str) -> Result<(), ApplicationError> {
        match self.storage.delete_project(id).await {
            Ok(()) => {
                tracing::debug!("project deleted");
                Ok(())
            }
            Err(StorageError::NotFound { id, .. }) => Err(ApplicationError::NotFound(id)),
            Err(error) => {
                tracing::warn!(%error, "deleting project failed");
                Err(error.into())
            }
        }
    }
}
