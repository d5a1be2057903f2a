use crate::modules::time_logs::use_cases::list_time_logs::query::ListTimeLogs;
use crate::shared::application::ApplicationError;
use crate::shared::core::time_log::TimeLogEntry;
use crate::shared::infrastructure::storage::StorageBackend;
use std::sync::Arc;

pub struct ListTimeLogsHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    storage: Arc<TStorage>,
}

impl<TStorage> ListTimeLogsHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    pub fn new(storage: Arc<TStorage>) -> Self {
        Self { storage }
    }

    /// Matching logs, newest first.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, query: ListTimeLogs) -> Result<Vec<TimeLogEntry>, ApplicationError> {
        let logs = self
            .storage
            .get_logs()
            .await
            .inspect_err(|error| tracing::warn!(%error, "listing time logs failed"))?;
        let matching: Vec<TimeLogEntry> = logs.into_iter().filter(|log| query.matches(log)).collect();
        tracing::debug!(count = matching.len(), "time logs listed");
        Ok(matching)
    }
}
