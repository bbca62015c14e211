//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown request type: {0}")]
    UnknownRequestType(String),

    #[error("Unknown agent role: {0}")]
    UnknownAgentRole(String),

    #[error("Invalid task: {0}")]
    InvalidTask(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Task {0} is not completed and cannot be archived")]
    NotArchivable(String),

    #[error("No tasks selected")]
    EmptySelection,

    #[error("Operation cancelled")]
    Cancelled,
}

impl DomainError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DomainError::Cancelled)
    }
}
