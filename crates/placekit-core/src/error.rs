//! Error handling for PlaceKit
//!
//! Provides the error types for the placement engine:
//! - Cache errors (local position store)
//! - Remote errors (position store network calls)
//!
//! All error types use `thiserror`. Note that most failure modes in this
//! engine are deliberately swallowed at the point they occur (logged, then
//! degraded to a less-enriched but valid placement); these types exist for
//! the few boundaries where a caller can meaningfully react.

use std::io;
use thiserror::Error;

/// Errors raised by the local position cache.
///
/// Callers of the cache's read path never see these: a corrupt or
/// unreadable entry is treated as absent. They surface only through
/// maintenance operations that report what went wrong.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The cache directory could not be created or opened.
    #[error("Cache directory error: {0}")]
    Directory(String),

    /// I/O error while reading or writing an entry.
    #[error("Cache I/O error: {0}")]
    Io(#[from] io::Error),

    /// An entry could not be serialized or deserialized.
    #[error("Cache entry serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An entry's file name does not encode a valid placement key.
    #[error("Unrecognized cache entry name: {name}")]
    UnrecognizedEntry {
        /// The offending file name.
        name: String,
    },
}

/// Errors raised by the remote position store.
#[derive(Error, Debug, Clone)]
pub enum RemoteError {
    /// The remote store rejected or failed the request.
    #[error("Remote request failed: {reason}")]
    RequestFailed {
        /// Description of the failure.
        reason: String,
    },

    /// The remote store returned a payload the engine cannot interpret.
    #[error("Invalid remote response: {0}")]
    InvalidResponse(String),

    /// The remote store is unreachable.
    #[error("Remote store unavailable")]
    Unavailable,
}

/// Unified error type for PlaceKit.
#[derive(Error, Debug)]
pub enum Error {
    /// Cache error.
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// Remote store error.
    #[error("Remote error: {0}")]
    Remote(#[from] RemoteError),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Convenience constructor for generic errors.
    pub fn other(message: impl Into<String>) -> Self {
        Error::Other(message.into())
    }
}

/// Result type alias for PlaceKit operations.
pub type Result<T> = std::result::Result<T, Error>;
