use crate::modules::reports::core::sort::SortError;
use crate::shared::infrastructure::storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Sort(#[from] SortError),
}
