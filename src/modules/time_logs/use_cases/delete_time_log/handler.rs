use crate::shared::application::ApplicationError;
use crate::shared::infrastructure::storage::{StorageBackend, StorageError};
use std::sync::Arc;

pub struct DeleteTimeLogHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    storage: Arc<TStorage>,
}

impl<TStorage> DeleteTimeLogHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    pub fn new(storage: Arc<TStorage>) -> Self {
        Self { storage }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, id: &str) -> Result<(), ApplicationError> {
        match self.storage.delete_log(id).await {
            Ok(()) => {
                tracing::debug!("time log deleted");
                Ok(())
            }
            Err(StorageError::NotFound { id, .. }) => Err(ApplicationError::NotFound(id)),
            Err(error) => {
                tracing::warn!(%error, "deleting time log failed");
                Err(error.into())
            }
        }
    }
}
