//! Error types for the karaoke engine

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, KaraokeError>;

/// Errors raised by the store, persistence and form handling
#[derive(Error, Debug)]
pub enum KaraokeError {
    /// The embedded dataset is absent or could not be parsed
    #[error("Dataset missing: {0}")]
    DatasetMissing(String),

    /// Locally persisted songs could not be decoded
    #[error("Local song storage is corrupt: {0}")]
    LocalStoreCorrupt(String),

    /// User input rejected by the add-song form
    #[error("{0}")]
    Validation(String),

    /// A song id that does not exist in the store
    #[error("Song not found: {0}")]
    NotFound(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error (wraps serde_json::Error)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
