//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;

/// Default size of a cached chunk in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 128;

/// Default maximum number of resident chunks.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Fixed size of every cached chunk, in bytes
    pub chunk_size: usize,
    /// Maximum number of chunks the cache can hold (count, not bytes)
    pub capacity: usize,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CHUNK_SIZE` - Chunk size in bytes (default: 128)
    /// - `CACHE_CAPACITY` - Maximum resident chunks (default: 1000)
    pub fn from_env() -> Self {
        Self {
            chunk_size: env::var("CHUNK_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CHUNK_SIZE),
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CAPACITY),
        }
    }

    /// Sets the chunk size in bytes.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Sets the maximum number of resident chunks.
    ///
    /// A capacity of zero is legal: the cache accepts operations but
    /// never retains a chunk.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            capacity: DEFAULT_CAPACITY,
        }
    }
}
