//! Shared Cache Module
//!
//! Cloneable thread-safe handle around the chunk cache.

use std::sync::{Arc, Mutex};

use crate::cache::{CacheStats, Chunk, ChunkCache};
use crate::config::CacheConfig;
use crate::error::Result;

// == Shared Chunk Cache ==
/// Cloneable handle sharing one chunk cache across threads.
///
/// Every operation takes the single exclusive lock for its full
/// duration, so the storage map and the recency ledger always mutate
/// together. An exclusive lock is required even for lookups because a
/// hit refreshes recency.
#[derive(Debug, Clone)]
pub struct SharedChunkCache {
    /// Thread-safe chunk cache
    inner: Arc<Mutex<ChunkCache>>,
}

impl SharedChunkCache {
    // == Constructors ==
    /// Creates a new shared handle owning the given cache.
    pub fn new(cache: ChunkCache) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Creates a new shared handle from configuration.
    pub fn from_config(config: CacheConfig) -> Self {
        Self::new(ChunkCache::new(config))
    }

    // == Operations ==
    /// Stores a chunk under the byte range `[start, end]`.
    pub fn put(&self, start: u64, end: u64, chunk: Chunk) -> Result<()> {
        self.inner.lock().unwrap().put(start, end, chunk)
    }

    /// Retrieves the chunk for the byte range `[start, end]`,
    /// refreshing its recency on a hit.
    pub fn get(&self, start: u64, end: u64) -> Option<Chunk> {
        self.inner.lock().unwrap().get(start, end)
    }

    /// Checks residency without refreshing recency.
    pub fn contains(&self, start: u64, end: u64) -> bool {
        self.inner.lock().unwrap().contains(start, end)
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().unwrap().stats()
    }

    /// Returns the current number of resident chunks.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    /// Returns true if no chunks are resident.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }

    /// Returns the maximum number of resident chunks.
    pub fn capacity(&self) -> usize {
        self.inner.lock().unwrap().capacity()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn chunk(fill: u8) -> Chunk {
        Chunk::from_bytes(128, &[fill; 128]).unwrap()
    }

    #[test]
    fn test_shared_put_and_get() {
        let shared = SharedChunkCache::from_config(CacheConfig::default());

        shared.put(0, 127, chunk(1)).unwrap();

        assert_eq!(shared.get(0, 127), Some(chunk(1)));
        assert_eq!(shared.len(), 1);
    }

    #[test]
    fn test_shared_clones_share_state() {
        let shared = SharedChunkCache::from_config(CacheConfig::default());
        let other = shared.clone();

        shared.put(0, 127, chunk(1)).unwrap();

        // The clone sees the same cache
        assert_eq!(other.get(0, 127), Some(chunk(1)));
        assert_eq!(other.stats().hits, 1);
    }

    #[test]
    fn test_shared_concurrent_puts_stay_bounded() {
        let config = CacheConfig::default().with_capacity(10);
        let shared = SharedChunkCache::from_config(config);

        let handles: Vec<_> = (0..4u64)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for n in 0..50u64 {
                        let id = t * 50 + n;
                        let start = id * 128;
                        shared.put(start, start + 127, chunk(id as u8)).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // 200 distinct ranges through a 10-slot cache
        assert_eq!(shared.len(), 10);
        let stats = shared.stats();
        assert_eq!(stats.insertions, 200);
        assert_eq!(stats.evictions, 190);
        assert_eq!(stats.resident, 10);
    }

    #[test]
    fn test_shared_concurrent_reads_count_hits() {
        let shared = SharedChunkCache::from_config(CacheConfig::default());
        shared.put(0, 127, chunk(9)).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        assert_eq!(shared.get(0, 127), Some(chunk(9)));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.stats().hits, 100);
    }
}
