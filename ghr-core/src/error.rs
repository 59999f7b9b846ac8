//! Error types for the ghr crates.
//!
//! Transport failures, API-level errors, and malformed payloads are unified
//! into a single `GhrError` enum so every send and decode operation returns
//! the same result type.

use thiserror::Error;

/// Convenience type alias for Results using GhrError.
pub type GhrResult<T> = Result<T, GhrError>;

/// Unified error type covering all error categories.
#[derive(Error, Debug)]
pub enum GhrError {
    // -- Configuration errors --
    /// Failed to load or parse client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- Transport errors --
    /// The HTTP round trip did not complete (DNS, connect, TLS, body read).
    #[error("http error: {0}")]
    Http(String),

    /// The HTTP round trip exceeded the configured timeout.
    #[error("request timeout: {0}")]
    Timeout(String),

    // -- API errors --
    /// The service answered with a non-2xx status.
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message extracted from the response body.
        message: String,
    },

    /// The token was rejected (401/403).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The requested resource does not exist (404).
    #[error("not found: {0}")]
    NotFound(String),

    // -- Payload errors --
    /// A payload could not be serialized or parsed as JSON.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A field the domain object cannot default was absent.
    #[error("missing field `{field}` in {object}")]
    MissingField {
        /// Domain object being constructed.
        object: &'static str,
        /// Upstream field name.
        field: &'static str,
    },

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // -- Generic --
    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GhrError {
    /// Whether this error means the HTTP round trip never completed.
    pub fn is_transport(&self) -> bool {
        matches!(self, GhrError::Http(_) | GhrError::Timeout(_))
    }

    /// HTTP status code, for errors produced from a completed response.
    pub fn status(&self) -> Option<u16> {
        match self {
            GhrError::Api { status, .. } => Some(*status),
            GhrError::NotFound(_) => Some(404),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GhrError {
    fn from(e: serde_json::Error) -> Self {
        GhrError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for GhrError {
    fn from(e: toml::de::Error) -> Self {
        GhrError::Config(e.to_string())
    }
}
