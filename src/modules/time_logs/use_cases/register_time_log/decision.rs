use crate::shared::core::time_log::TimeLogEntry;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("project {0} does not exist")]
    UnknownProject(String),

    #[error("work content must not be empty")]
    EmptyContent,

    #[error("worker name must not be empty")]
    MissingWorker,

    #[error("hours must be a positive number")]
    InvalidHours,

    #[error("{0:?} is not a valid date")]
    InvalidWeek(String),
}

pub enum Decision {
    Accepted { log: TimeLogEntry },
    Rejected { reason: DecideError },
}
