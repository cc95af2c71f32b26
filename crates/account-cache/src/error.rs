//! Error types for the account cache crate.

use thiserror::Error;

/// Result type alias for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

/// Errors surfaced by cache operations.
///
/// Missing or undecodable data is never an error — reads collapse both to
/// `None`. Only writing can fail, and failures are reported to the caller
/// without being retried here; a higher layer may re-run the originating
/// fetch-then-write sequence.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Filesystem failure while persisting a domain blob
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure while encoding a domain collection
    #[error("cache encode error: {0}")]
    Encode(#[from] serde_json::Error),
}
