//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU recency tracking.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheStats, Chunk, ChunkKey, RecencyLedger};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Chunk Cache ==
/// Fixed-capacity chunk storage with LRU eviction.
///
/// The storage map, the recency ledger, and the ledger's key index move
/// in lockstep: every resident chunk has exactly one ledger entry, and
/// the resident count never exceeds the configured capacity.
#[derive(Debug)]
pub struct ChunkCache {
    /// Key to chunk storage
    chunks: HashMap<ChunkKey, Chunk>,
    /// LRU recency ledger
    ledger: RecencyLedger,
    /// Performance statistics
    stats: CacheStats,
    /// Chunk size and capacity limits
    config: CacheConfig,
}

impl ChunkCache {
    // == Constructor ==
    /// Creates a new ChunkCache with the given configuration.
    ///
    /// # Arguments
    /// * `config` - Chunk size in bytes and capacity in chunks
    pub fn new(config: CacheConfig) -> Self {
        Self {
            chunks: HashMap::new(),
            ledger: RecencyLedger::new(),
            stats: CacheStats::new(),
            config,
        }
    }

    // == Put ==
    /// Stores a chunk under the byte range `[start, end]`.
    ///
    /// If the range is already resident, its chunk is overwritten in
    /// place and refreshed as most recently used; no eviction happens.
    /// If the range is new and the cache is full, the least recently
    /// used chunk is evicted first, so the resident count never exceeds
    /// capacity. With a capacity of zero the chunk is counted as
    /// inserted and immediately evicted, and nothing is retained.
    ///
    /// # Arguments
    /// * `start` - First byte offset covered by the chunk
    /// * `end` - Last byte offset covered by the chunk
    /// * `chunk` - The chunk to store
    ///
    /// # Returns
    /// - `Ok(())` on success
    /// - `Err(CacheError::ChunkSizeMismatch)` if the chunk was built for
    ///   a different chunk size than this cache uses
    pub fn put(&mut self, start: u64, end: u64, chunk: Chunk) -> Result<()> {
        // Validate chunk size against configuration
        if chunk.size() != self.config.chunk_size {
            return Err(CacheError::ChunkSizeMismatch {
                actual: chunk.size(),
                expected: self.config.chunk_size,
            });
        }

        // Zero capacity: the insertion is undone by its own eviction
        if self.config.capacity == 0 {
            self.stats.record_insertion();
            self.stats.record_eviction();
            debug!(start, end, "discarded chunk, cache capacity is zero");
            return Ok(());
        }

        let key = ChunkKey::from_range(start, end);

        // Check if the range is already resident (overwrite case)
        let is_overwrite = self.chunks.contains_key(&key);

        // If not overwriting and at capacity, evict the oldest chunk
        if !is_overwrite && self.chunks.len() >= self.config.capacity {
            self.evict_oldest();
        }

        // Store the chunk and refresh recency
        self.chunks.insert(key, chunk);
        self.ledger.touch(key);

        // Update stats
        if is_overwrite {
            self.stats.record_overwrite();
        } else {
            self.stats.record_insertion();
        }
        self.stats.set_resident(self.chunks.len());

        Ok(())
    }

    // == Get ==
    /// Retrieves the chunk stored for the byte range `[start, end]`.
    ///
    /// A hit returns the chunk and refreshes it as most recently used,
    /// which is observable through the eviction order. A miss changes
    /// nothing but the miss counter.
    ///
    /// # Arguments
    /// * `start` - First byte offset of the range
    /// * `end` - Last byte offset of the range
    pub fn get(&mut self, start: u64, end: u64) -> Option<Chunk> {
        let key = ChunkKey::from_range(start, end);

        if let Some(chunk) = self.chunks.get(&key) {
            // Hit: clone the chunk out, then refresh recency
            let chunk = chunk.clone();
            self.stats.record_hit();
            self.ledger.touch(key);
            Some(chunk)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Contains ==
    /// Checks whether the byte range `[start, end]` is resident.
    ///
    /// Unlike `get`, this never refreshes recency: probing a key does
    /// not protect it from eviction.
    pub fn contains(&self, start: u64, end: u64) -> bool {
        self.chunks.contains_key(&ChunkKey::from_range(start, end))
    }

    // == Peek Oldest ==
    /// Returns the key next in line for eviction, if any.
    pub fn peek_oldest(&self) -> Option<ChunkKey> {
        self.ledger.peek_oldest()
    }

    // == Last Access ==
    /// Returns the logical tick at which a resident range was last
    /// accessed, or None if the range is not resident.
    pub fn last_access(&self, start: u64, end: u64) -> Option<u64> {
        self.ledger.last_access(&ChunkKey::from_range(start, end))
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_resident(self.chunks.len());
        stats
    }

    // == Length ==
    /// Returns the current number of resident chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    // == Is Empty ==
    /// Returns true if no chunks are resident.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    // == Capacity ==
    /// Returns the maximum number of resident chunks.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    // == Chunk Size ==
    /// Returns the fixed chunk size in bytes.
    pub fn chunk_size(&self) -> usize {
        self.config.chunk_size
    }

    // == Config ==
    /// Returns the cache configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Evict Oldest ==
    /// Removes the least recently used chunk from storage and ledger.
    fn evict_oldest(&mut self) {
        if let Some(evicted) = self.ledger.evict_oldest() {
            self.chunks.remove(&evicted);
            self.stats.record_eviction();
            debug!(
                start = evicted.start,
                end = evicted.end,
                "evicted least recently used chunk"
            );
        }
    }
}
