//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error
//!   types.
//! - Map ClientError and ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs for SIGINT handling).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use typesense_client::ClientError;
use typesense_config::ConfigError;

/// Structured exit codes for typesense-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Configuration error - missing/invalid flags, nonexistent source
    /// directory. Detected before any network call.
    ConfigurationError = 2,

    /// Connection error - network, timeout, or DNS failure.
    ConnectionError = 3,

    /// Authentication failure - the server rejected the API key.
    AuthenticationFailed = 4,

    /// Resource not found.
    NotFound = 5,

    /// Validation error - the server rejected a request payload.
    ValidationError = 6,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::ApiError { status: 401, .. } | ClientError::ApiError { status: 403, .. } => {
                ExitCode::AuthenticationFailed
            }
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,
            ClientError::ApiError { status: 400, .. } | ClientError::ApiError { status: 422, .. } => {
                ExitCode::ValidationError
            }
            ClientError::ApiError { .. } => ExitCode::GeneralError,
            ClientError::InvalidUrl(_) => ExitCode::ConfigurationError,
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }
            ClientError::ClusterReadyTimeout { .. } => ExitCode::ConnectionError,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Walks the error chain for a ClientError or ConfigError; defaults to
    /// GeneralError.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ConfigurationError;
            }
        }
        ExitCode::GeneralError
    }
}
