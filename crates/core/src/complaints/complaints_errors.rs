use thiserror::Error;

/// Custom error type for complaint-related operations
#[derive(Debug, Error)]
pub enum ComplaintError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
