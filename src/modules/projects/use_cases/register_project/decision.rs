use crate::shared::core::project::Project;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("project type {0} requires a sub type")]
    MissingSubType(String),

    #[error("a project needs at least one owner")]
    MissingOwner,
}

pub enum Decision {
    Accepted { project: Project },
    Rejected { reason: DecideError },
}
