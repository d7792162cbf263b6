use thiserror::Error;

use crate::scheduler::SnapshotState;

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("Snapshot is empty, no turnaround statistics available")]
    EmptySnapshot,

    #[error("Snapshot has not been scheduled yet (current state: {state:?})")]
    NotScheduled { state: SnapshotState },

    #[error("Failed to read process list: {0}")]
    SourceUnavailable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<procfs::ProcError> for SchedError {
    fn from(e: procfs::ProcError) -> Self {
        SchedError::SourceUnavailable(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchedError>;
