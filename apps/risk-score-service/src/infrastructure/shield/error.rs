//! Shield-specific error types.

use thiserror::Error;

use crate::application::ports::ProviderError;

/// Errors from the Shield adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShieldError {
    /// HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Non-success HTTP status, after any retries.
    #[error("Shield API responded with status {status}")]
    Status {
        /// Last status received.
        status: u16,
    },

    /// Network error (retryable).
    #[error("Network error: {0}")]
    Network(String),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),
}

impl From<ShieldError> for ProviderError {
    fn from(err: ShieldError) -> Self {
        match err {
            ShieldError::Status { status } => Self::Status { status },
            ShieldError::Client(message) | ShieldError::Network(message) => {
                Self::Connection { message }
            }
            ShieldError::JsonParse(message) => Self::InvalidResponse { message },
        }
    }
}
