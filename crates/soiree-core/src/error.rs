//! Error types for the soiree client library.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Error type shared by every client operation.
///
/// Transport-level failures are surfaced as-is: there is no translation into
/// domain errors, so callers branch on [`SoireeError::Status`] to react to
/// specific HTTP status codes.
#[derive(Error, Debug)]
pub enum SoireeError {
    /// The request could not be sent or its response could not be read
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status code
    #[error("Server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    /// Credential file could not be read, written or removed
    #[error("Storage error at path '{path}': {source}")]
    Storage {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// The cached credential could not be resolved to a user in time
    #[error("Session hydration timed out after {}ms", limit.as_millis())]
    HydrationTimeout { limit: Duration },
}

/// Builder for creating transport errors with context.
pub struct TransportErrorBuilder {
    message: String,
}

impl TransportErrorBuilder {
    /// Create a new transport error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: reqwest::Error) -> SoireeError {
        SoireeError::Transport {
            message: self.message,
            source,
        }
    }
}

impl SoireeError {
    /// Creates a builder for transport errors.
    pub fn transport(message: impl Into<String>) -> TransportErrorBuilder {
        TransportErrorBuilder::new(message)
    }

    /// Creates a storage error for the given path.
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// Returns the HTTP status code if the server rejected the request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for `401 Unauthorized` responses.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Extension trait for Results coming out of the HTTP stack.
pub trait TransportResultExt<T> {
    /// Map reqwest errors with a message.
    fn transport_context(self, message: &str) -> Result<T>;
}

impl<T> TransportResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn transport_context(self, message: &str) -> Result<T> {
        self.map_err(|e| SoireeError::transport(message).with_source(e))
    }
}

/// Extension trait for turning arbitrary errors into configuration errors.
pub trait ConfigResultExt<T> {
    /// Map any displayable error into [`SoireeError::Configuration`].
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T, E> ConfigResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| SoireeError::Configuration {
            message: format!("{context}: {e}"),
        })
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, SoireeError>;
