//! Shared error types for the portal client.

use crate::api::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Failures reading or writing the persisted session blob.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Persisted session is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Outcome of a rejected login, displayed to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Username and password are required")]
    MissingCredentials,
    #[error("Invalid Credentials")]
    InvalidCredentials,
    #[error("Server error")]
    Server,
    #[error("Unexpected error")]
    Unexpected,
}

impl From<ApiError> for LoginError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::UnauthorizedAccess => LoginError::InvalidCredentials,
            ApiError::InternalServerError => LoginError::Server,
            _ => LoginError::Unexpected,
        }
    }
}
