//! Error types for the kanban board core

use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur around the board core.
///
/// The transition function itself never fails; these cover input validation
/// in [`BoardActions`](crate::BoardActions), storage and configuration.
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Missing required field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Lock is held by another process
    #[error("lock busy - another write in progress")]
    LockBusy,

    /// Storage backend failure that is not plain IO
    #[error("storage error: {message}")]
    Storage { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be extracted
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl KanbanError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Check if this is a retryable error
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::LockBusy)
    }
}

impl From<figment::Error> for KanbanError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
