//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown task: {0} (expected one of: buildApi, exportApi, checkApi)")]
    UnknownTask(String),

    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),

    #[error("Project name must not be empty")]
    EmptyProjectName,
}

impl DomainError {
    /// Check if this error was caused by an unrecognized task name
    pub fn is_unknown_task(&self) -> bool {
        matches!(self, DomainError::UnknownTask(_))
    }
}
