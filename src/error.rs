//! Crate-level error type
//!
//! Every configuration problem, whether a YAML/JSON syntax error, a missing
//! or misspelled field, or a value outside its documented domain, surfaces
//! as [`Error::MalformedConfiguration`] at load time.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ValidationError;

/// Result type alias for allstar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while loading, validating or writing a configuration
#[derive(Debug, Error)]
pub enum Error {
    /// A required field is missing, unknown, mistyped or out of its domain.
    #[error("Malformed configuration: {0}")]
    MalformedConfiguration(String),

    /// The configuration file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the configuration failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create an I/O error for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Check if the error is caused by the configuration content itself
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedConfiguration(_))
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::MalformedConfiguration(err.to_string())
    }
}
