//! Error types for the capability registry.
//!
//! Failure is reserved strictly for use-before-initialization, double
//! initialization, or a corrupt manifest. Querying an unknown name is not an
//! error anywhere in this crate: unknown means "not supported".

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for capability registry operations.
#[derive(Debug, Error)]
pub enum CapabilityError {
    /// A query was issued before `initialize` completed.
    #[error("Registry queried before initialization")]
    NotInitialized,

    /// A second call to `initialize`. The state installed by the first
    /// successful call is left untouched.
    #[error("Registry already initialized with version {version}")]
    AlreadyInitialized { version: String },

    /// The manifest could not be decomposed into a version string plus two
    /// name collections. The registry remains uninitialized, so a corrected
    /// `initialize` call may still succeed.
    #[error("Malformed manifest: {message}")]
    MalformedManifest { message: String },

    /// Reading a manifest file from disk failed.
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },
}

/// Result type alias for capability registry operations.
pub type Result<T> = std::result::Result<T, CapabilityError>;

impl From<serde_json::Error> for CapabilityError {
    fn from(err: serde_json::Error) -> Self {
        // A manifest document that does not parse is a malformed manifest,
        // not a distinct serialization failure.
        CapabilityError::MalformedManifest {
            message: err.to_string(),
        }
    }
}

impl CapabilityError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        CapabilityError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }
}
