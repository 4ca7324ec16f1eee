//! Warning Provider Port (Driven Port)
//!
//! Interface for fetching third-party security warnings about a mint.

use async_trait::async_trait;

use crate::domain::risk_scoring::RawWarning;

/// Warning provider port error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// Provider answered with a non-success HTTP status.
    #[error("Shield API responded with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Request could not be completed (DNS, connect, timeout).
    #[error("Shield API request failed: {message}")]
    Connection {
        /// Error details.
        message: String,
    },

    /// Response body was not valid JSON.
    #[error("Shield API returned an invalid response: {message}")]
    InvalidResponse {
        /// Error details.
        message: String,
    },
}

impl ProviderError {
    /// HTTP status reported by the provider, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            Self::Connection { .. } | Self::InvalidResponse { .. } => None,
        }
    }
}

/// Port for warning lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WarningProviderPort: Send + Sync {
    /// Fetch the raw warnings reported for `mint`, in provider order.
    ///
    /// A mint the provider knows nothing about yields an empty list, not an
    /// error.
    async fn fetch_warnings(&self, mint: &str) -> Result<Vec<RawWarning>, ProviderError>;
}
