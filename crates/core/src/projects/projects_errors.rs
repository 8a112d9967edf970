use thiserror::Error;

/// Custom error type for project-related operations
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Command rejected: {0}")]
    InvalidCommand(String),
}
