//! Chunk Cache - A fixed-capacity in-memory chunk cache
//!
//! Stores fixed-size byte chunks addressed by byte range, evicting the
//! least recently used chunk when the cache is full.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheStats, Chunk, ChunkCache, ChunkKey, SharedChunkCache};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
