//! Structured error handling for snapshot operations.

use strum::{AsRefStr, Display, IntoStaticStr};
use thiserror::Error;

/// Type alias for boxed dynamic errors that can be sent across threads.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for Results with our custom Error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Categories of errors that can occur in snapshot operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// No usable AWS authentication method was found.
    MissingCredentials,
    /// A required parameter is absent, empty, or the operation is ambiguous.
    InvalidArgument,
    /// Network or HTTP-level failure reaching the Elasticsearch endpoint.
    TransportFailure,
    /// Elasticsearch returned a non-2xx status.
    UpstreamError,
}

/// Structured error type with classification and context tracking.
#[must_use]
#[derive(Debug, Error)]
#[error("[{kind}]{}", message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Primary error message.
    pub message: Option<String>,
    /// Underlying source error, if any.
    #[source]
    pub source: Option<BoxedError>,
}

impl Error {
    /// Creates a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
        }
    }

    /// Adds a message to this error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a source error to this error.
    pub fn with_source(mut self, source: impl Into<BoxedError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Creates a new missing credentials error.
    pub fn missing_credentials() -> Self {
        Self::new(ErrorKind::MissingCredentials)
    }

    /// Creates a new invalid argument error.
    pub fn invalid_argument() -> Self {
        Self::new(ErrorKind::InvalidArgument)
    }

    /// Creates a new transport failure error.
    pub fn transport_failure() -> Self {
        Self::new(ErrorKind::TransportFailure)
    }

    /// Creates a new upstream error.
    pub fn upstream_error() -> Self {
        Self::new(ErrorKind::UpstreamError)
    }
}
