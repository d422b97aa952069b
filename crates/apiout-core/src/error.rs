// Rust guideline compliant 2026-10-16

//! Error types for response dispatch and configuration.

use thiserror::Error;

/// Failure while serializing an envelope or handing it to the transport.
///
/// This is the only failure the implicit entry points (`success`, `error`
/// and their wrappers) can report. The status line and headers may already
/// have been written when it occurs.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The envelope payload could not be serialized to JSON.
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The transport rejected the body bytes.
    #[error("IO error: {0}")]
    Transport(#[from] std::io::Error),
}

/// Failure of the explicit `send` path.
#[derive(Debug, Error)]
pub enum SendError {
    /// The response code is not a valid HTTP status. Nothing was written.
    #[error("output: invalid HTTP response code {0}")]
    InvalidResponseCode(u16),

    /// Serialization or transport failure after validation passed.
    #[error(transparent)]
    Write(#[from] WriteError),
}

impl SendError {
    /// Returns true when the failure happened before anything was written.
    #[must_use]
    pub fn is_invalid_response_code(&self) -> bool {
        matches!(self, SendError::InvalidResponseCode(_))
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error while reading the configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML for [`crate::Config`].
    #[error("Invalid config file: {0}")]
    InvalidFile(#[from] toml::de::Error),

    /// An environment override holds an unusable value.
    #[error("Invalid environment override: {0}")]
    InvalidEnv(String),
}

/// Pre-canned errors for the shorthand error responses.
///
/// These carry no extra data; their `Display` text is what ends up in the
/// `ErrorData.Error` field of the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Input validation failed.
    #[error("input validation error")]
    InputInvalid,

    /// The resource being created already exists.
    #[error("already exists")]
    AlreadyExists,
}
