//! Error types for the chunk cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the chunk cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Payload is larger than the configured chunk size
    #[error("Payload of {actual} bytes exceeds chunk size of {limit} bytes")]
    OversizedPayload { actual: usize, limit: usize },

    /// Chunk was built for a different chunk size than the cache uses
    #[error("Chunk size {actual} does not match configured chunk size {expected}")]
    ChunkSizeMismatch { actual: usize, expected: usize },
}

// == Result Type Alias ==
/// Convenience Result type for the chunk cache.
pub type Result<T> = std::result::Result<T, CacheError>;
