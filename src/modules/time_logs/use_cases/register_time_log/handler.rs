use crate::modules::time_logs::use_cases::register_time_log::command::RegisterTimeLog;
use crate::modules::time_logs::use_cases::register_time_log::decide::decide_register;
use crate::modules::time_logs::use_cases::register_time_log::decision::Decision;
use crate::shared::application::ApplicationError;
use crate::shared::core::time_log::TimeLogEntry;
use crate::shared::infrastructure::storage::StorageBackend;
use std::sync::Arc;

pub struct RegisterTimeLogHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    storage: Arc<TStorage>,
}

impl<TStorage> RegisterTimeLogHandler<TStorage>
where
    TStorage: StorageBackend + ?Sized,
{
    pub fn new(storage: Arc<TStorage>) -> Self {
        Self { storage }
    }

    #[tracing::instrument(
        skip(self, command),
        fields(project_id = %command.project_id, worker = %command.worker_name)
    )]
    pub async fn handle(&self, command: RegisterTimeLog) -> Result<TimeLogEntry, ApplicationError> {
        let project = self
            .storage
            .get_project(&command.project_id)
            .await
            .inspect_err(|error| tracing::warn!(%error, "project lookup failed"))?;

        match decide_register(project.as_ref(), command) {
            Decision::Accepted { log } => {
                let saved = self
                    .storage
                    .save_log(log)
                    .await
                    .inspect_err(|error| tracing::warn!(%error, "saving time log failed"))?;
                tracing::debug!(id = %saved.id, week = %saved.week_start_date, "time log registered");
                Ok(saved)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}

#[cfg(test)]
mod register_time_log_handler_tests {
    use crate::modules::time_logs::use_cases::register_time_log::command::RegisterTimeLog;
    use crate::modules::time_logs::use_cases::register_time_log::decision::DecideError;
    use crate::modules::time_logs::use_cases::register_time_log::handler::RegisterTimeLogHandler;
    use crate::shared::application::ApplicationError;
    use crate::shared::core::dictionary::Dictionaries;
    use crate::shared::infrastructure::storage::in_memory::InMemoryStorage;
    use crate::shared::infrastructure::storage::{StorageBackend, StorageError};
    use crate::tests::fixtures::commands::register_time_log::RegisterTimeLogBuilder;
    use crate::tests::fixtures::projects::ProjectBuilder;
    use rstest::{fixture, rstest};
    use std::sync::Arc;

    type BeforeEachReturn = (RegisterTimeLog, InMemoryStorage);

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let storage = InMemoryStorage::with_records(
            vec![
                ProjectBuilder::new()
                    .id("p_001")
                    .name("Brand refresh")
                    .department("brand")
                    .build(),
            ],
            Vec::new(),
            Dictionaries::default(),
        );
        let command = RegisterTimeLogBuilder::new().build();
        (command, storage)
    }

    #[rstest]
    #[tokio::test]
    async fn handle_register_saves_the_log_with_a_snapshot(before_each: BeforeEachReturn) {
        let (command, storage) = before_each;
        let storage = Arc::new(storage);
        let handler = RegisterTimeLogHandler::new(storage.clone());

        let saved = handler.handle(command).await.expect("handle failed");

        assert!(!saved.id.is_empty());
        assert!(!saved.created.is_empty());
        let logs = storage.get_logs().await.expect("get_logs failed");
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].snapshot.project_dept.as_deref(), Some("brand"));
        assert_eq!(logs[0].week_start_date, "2024-03-04");
    }

    #[rstest]
    #[tokio::test]
    async fn handle_register_fails_if_the_project_does_not_exist(before_each: BeforeEachReturn) {
        let (_, storage) = before_each;
        let handler = RegisterTimeLogHandler::new(Arc::new(storage));
        let command = RegisterTimeLogBuilder::new().project_id("p_missing").build();

        let result = handler.handle(command).await;

        assert_eq!(
            result.unwrap_err().to_string(),
            ApplicationError::Domain(DecideError::UnknownProject("p_missing".into()).to_string())
                .to_string()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn handle_register_fails_if_storage_is_offline(before_each: BeforeEachReturn) {
        let (command, mut storage) = before_each;
        storage.toggle_offline();
        let handler = RegisterTimeLogHandler::new(Arc::new(storage));

        let result = handler.handle(command).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Storage(StorageError::Unavailable(_)))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn handle_register_works_through_a_trait_object(before_each: BeforeEachReturn) {
        let (command, storage) = before_each;
        let storage: Arc<dyn StorageBackend> = Arc::new(storage);
        let handler = RegisterTimeLogHandler::new(storage);
        assert!(handler.handle(command).await.is_ok());
    }
}
