//! Cache Module
//!
//! Provides fixed-capacity in-memory chunk caching with LRU eviction.

mod chunk;
mod key;
mod ledger;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use chunk::Chunk;
pub use key::ChunkKey;
pub use ledger::RecencyLedger;
pub use shared::SharedChunkCache;
pub use stats::CacheStats;
pub use store::ChunkCache;
