//! Shared error type across osrmd crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Requested service is not registered.
    InvalidService,
    /// Requested protocol version is not supported by the service.
    InvalidVersion,
    /// Invalid configuration or query options.
    InvalidOptions,
    /// Internal server error.
    Internal,
}

impl ErrorCode {
    /// String representation used in `code` fields of error responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidService => "InvalidService",
            ErrorCode::InvalidVersion => "InvalidVersion",
            ErrorCode::InvalidOptions => "InvalidOptions",
            ErrorCode::Internal => "InternalError",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, OsrmdError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum OsrmdError {
    #[error("Service {0} not found!")]
    InvalidService(String),
    #[error("Service {service} does not support version {requested} (supported: {supported})")]
    InvalidVersion {
        service: String,
        requested: u32,
        supported: u32,
    },
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl OsrmdError {
    /// Map internal error to a stable client-facing code.
    pub fn code(&self) -> ErrorCode {
        match self {
            OsrmdError::InvalidService(_) => ErrorCode::InvalidService,
            OsrmdError::InvalidVersion { .. } => ErrorCode::InvalidVersion,
            OsrmdError::InvalidOptions(_) => ErrorCode::InvalidOptions,
            OsrmdError::Internal(_) => ErrorCode::Internal,
        }
    }
}
