use thiserror::Error;

/// Custom error type for authentication operations
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Session store error: {0}")]
    StoreError(String),
}
