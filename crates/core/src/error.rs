//! Error model for the guard's surroundings.
//!
//! Navigation decisions themselves are infallible; these errors come from
//! loading configuration, decoding query values and driving the host pipeline.

use thiserror::Error;

/// Result type used across the navigation guard crates.
pub type GuardResult<T> = Result<T, GuardError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuardError {
    /// Configuration parsed but describes a catalog the guard cannot settle on.
    #[error("invalid guard configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed.
    #[error("malformed guard configuration: {0}")]
    Config(String),

    /// Configuration could not be read.
    #[error("io error: {0}")]
    Io(String),

    /// A percent-encoded value did not decode to UTF-8.
    #[error("invalid percent-encoding in '{0}'")]
    InvalidEncoding(String),

    #[error("unknown annotation key '{0}'")]
    UnknownAnnotation(String),

    /// The guard redirected a redirect it had already issued.
    #[error("redirect to '{0}' did not settle")]
    UnsettledRedirect(String),
}

impl GuardError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn invalid_encoding(value: impl Into<String>) -> Self {
        Self::InvalidEncoding(value.into())
    }
}
