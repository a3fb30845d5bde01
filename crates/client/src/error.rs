//! Error types for the Typesense clients.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Typesense client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error (DNS, connection, request cancellation).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx API response. The raw body is preserved verbatim so operators
    /// can diagnose upstream API contract changes without verbose logging.
    #[error("API error ({status}) at {url}: {body}")]
    ApiError { status: u16, url: String, body: String },

    /// Response decoded but did not match the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O error while streaming documents to or from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A cluster did not reach `in_service` before the caller's deadline.
    #[error("Cluster {cluster_id} did not become ready within {timeout:?}")]
    ClusterReadyTimeout {
        cluster_id: String,
        timeout: Duration,
    },

    /// A cluster reached a terminal failure status while being polled.
    #[error("Cluster {cluster_id} entered terminal status '{status}'")]
    ClusterProvisioningFailed { cluster_id: String, status: String },
}

impl ClientError {
    /// The HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True if this error represents a connection-level failure.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::HttpError(e) if e.is_connect() || e.is_timeout())
    }
}
