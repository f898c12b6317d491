//! Error types for the collaboration core

use thiserror::Error;

/// Result type alias for the collaboration core
pub type Result<T> = std::result::Result<T, CoreError>;

/// Main error type for the collaboration core
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Referenced entity absent or inactive
    #[error("Not found: {0}")]
    NotFound(String),

    /// Capability check failed
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Caller has no standing in the workspace at all
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Malformed input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Concurrent state change rejected a conditional write
    #[error("Conflict: {0}")]
    Conflict(String),

    /// File storage errors
    #[error("File storage error: {0}")]
    FileStorage(String),

    /// Email delivery errors
    #[error("Email error: {0}")]
    Email(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Persistence or other failures unrelated to caller input
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// HTTP status the error kind maps to, for callers translating the
    /// library result into a response.
    pub fn status_code(&self) -> u16 {
        match self {
            CoreError::NotFound(_) => 404,
            CoreError::PermissionDenied(_) | CoreError::Forbidden(_) => 403,
            CoreError::Validation(_) => 400,
            CoreError::Conflict(_) => 409,
            CoreError::Config(_)
            | CoreError::FileStorage(_)
            | CoreError::Email(_)
            | CoreError::Serialization(_)
            | CoreError::Yaml(_)
            | CoreError::Io(_)
            | CoreError::Internal(_) => 500,
        }
    }

    /// Whether the error is the caller's fault (4xx-equivalent)
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
