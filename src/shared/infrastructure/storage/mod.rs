// Storage port: what the use cases need from the document database.
//
// Purpose
// - Describe record access as a trait so handlers never know which backend they talk to.
//
// Adapters
// - in_memory: local fixture-backed store for demos, tests and development.
// - remote: REST client for the document database.
//
// The backend is chosen once at startup and injected as `Arc<dyn StorageBackend>`.

pub mod in_memory;
pub mod remote;

use crate::shared::core::dictionary::Dictionaries;
use crate::shared::core::project::Project;
use crate::shared::core::time_log::TimeLogEntry;
use async_trait::async_trait;
use thiserror::Error;

pub const LOGS_COLLECTION: &str = "work_logs";
pub const PROJECTS_COLLECTION: &str = "projects";
pub const CONFIG_COLLECTION: &str = "app_config";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("record not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    #[error("backend responded with {status}: {body}")]
    Backend { status: u16, body: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("malformed record: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// All logs, newest first, with the live project expanded when it still exists.
    async fn get_logs(&self) -> Result<Vec<TimeLogEntry>, StorageError>;

    async fn get_projects(&self) -> Result<Vec<Project>, StorageError>;

    async fn get_dictionaries(&self) -> Result<Dictionaries, StorageError>;

    /// Creates the log when its id is empty, updates it otherwise.
    async fn save_log(&self, log: TimeLogEntry) -> Result<TimeLogEntry, StorageError>;

    async fn delete_log(&self, id: &str) -> Result<(), StorageError>;

    /// Creates the project when its id is empty, updates it otherwise.
    async fn save_project(&self, project: Project) -> Result<Project, StorageError>;

    async fn delete_project(&self, id: &str) -> Result<(), StorageError>;

    async fn get_log(&self, id: &str) -> Result<Option<TimeLogEntry>, StorageError> {
        Ok(self.get_logs().await?.into_iter().find(|log| log.id == id))
    }

    async fn get_project(&self, id: &str) -> Result<Option<Project>, StorageError> {
        Ok(self
            .get_projects()
            .await?
            .into_iter()
            .find(|project| project.id == id))
    }
}
