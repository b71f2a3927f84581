//! Error types for document loading and deserialization.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed error returned by [`RelationshipResolver`] hooks.
///
/// [`RelationshipResolver`]: crate::RelationshipResolver
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors during document loading and deserialization.
#[derive(Debug, Error)]
pub enum DeserializeError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "remote")]
    #[error("failed to fetch {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON:API document: {source}")]
    InvalidDocument {
        #[source]
        source: serde_json::Error,
    },

    // Resolution errors (exit code 2)
    #[error("relationship resolver for type \"{kind}\" failed: {source}")]
    Resolver {
        kind: String,
        #[source]
        source: BoxError,
    },

    #[error("relationship recursion exceeded {limit} level(s)")]
    DepthExceeded { limit: usize },
}

impl DeserializeError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } | Self::ReadError { .. } => 3,
            #[cfg(feature = "remote")]
            Self::NetworkError { .. } => 3,
            _ => 2,
        }
    }
}
