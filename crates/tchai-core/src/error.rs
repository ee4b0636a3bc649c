//! Error types for tchai-core
//!
//! `ValidationError` covers rejected input and always maps to a client error.
//! `CoreError` covers everything that goes wrong behind the API: the backing
//! file, its contents, and timestamps that cannot be ordered.

use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Timestamp could not be parsed
    InvalidTimestamp,
    /// IO error
    IoError,
    /// Stored data is not a JSON array of transactions
    CorruptStore,
    /// Transactions could not be encoded
    EncodeError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::InvalidTimestamp => write!(f, "INVALID_TIMESTAMP"),
            ErrorCode::IoError => write!(f, "IO_ERROR"),
            ErrorCode::CorruptStore => write!(f, "CORRUPT_STORE"),
            ErrorCode::EncodeError => write!(f, "ENCODE_ERROR"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning - operation may be affected
    Warning,
    /// Error - operation failed
    Error,
    /// Critical - persisted state is unusable
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
            ErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Main error type for tchai-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid timestamp: {value}")]
    InvalidTimestamp { value: String },

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored transactions in {path} could not be decoded: {message}")]
    CorruptStore { path: String, message: String },

    #[error("Transactions could not be encoded: {message}")]
    Encode { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::InvalidTimestamp { .. } => ErrorCode::InvalidTimestamp,
            CoreError::Io { .. } => ErrorCode::IoError,
            CoreError::CorruptStore { .. } => ErrorCode::CorruptStore,
            CoreError::Encode { .. } => ErrorCode::EncodeError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::InvalidTimestamp { .. } => ErrorSeverity::Warning,
            CoreError::Io { .. } => ErrorSeverity::Error,
            CoreError::CorruptStore { .. } => ErrorSeverity::Critical,
            CoreError::Encode { .. } => ErrorSeverity::Error,
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

/// A candidate transaction was rejected
///
/// Display output is the exact message returned to API callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing field: {field}")]
    MissingField { field: String },

    #[error("{message}")]
    InvalidField { message: String },
}

impl ValidationError {
    pub(crate) fn missing(field: &str) -> Self {
        ValidationError::MissingField { field: field.to_string() }
    }

    pub(crate) fn invalid(message: &str) -> Self {
        ValidationError::InvalidField { message: message.to_string() }
    }
}

// ==================== Tests ====================
