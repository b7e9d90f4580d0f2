//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and evictions.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not resident)
    pub misses: u64,
    /// Number of chunks evicted due to LRU policy
    pub evictions: u64,
    /// Number of chunks stored under a key not previously resident
    pub insertions: u64,
    /// Number of chunks that replaced an already-resident key in place
    pub overwrites: u64,
    /// Current number of resident chunks
    pub resident: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Insertion ==
    /// Increments the insertion counter.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    // == Record Overwrite ==
    /// Increments the overwrite counter.
    pub fn record_overwrite(&mut self) {
        self.overwrites += 1;
    }

    // == Update Resident Count ==
    /// Updates the resident chunk count.
    pub fn set_resident(&mut self, count: usize) {
        self.resident = count;
    }
}
