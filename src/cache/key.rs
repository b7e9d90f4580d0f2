//! Chunk Key Module
//!
//! Defines the lookup key derived from a chunk's byte range.

// == Chunk Key ==
/// Identity of a cached chunk, derived from its byte range.
///
/// Both endpoints participate in the key, so distinct ranges always map
/// to distinct keys. Folding the endpoints into a single value (for
/// example XOR) would collide ranges like `(0, 3)` and `(1, 2)` and make
/// one range's chunk answer lookups for another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkKey {
    /// First byte offset covered by the chunk
    pub start: u64,
    /// Last byte offset covered by the chunk
    pub end: u64,
}

impl ChunkKey {
    // == Constructor ==
    /// Creates a key for the byte range `[start, end]`.
    ///
    /// The endpoints are taken as given: no normalization, ordering, or
    /// validation is applied. Callers own their range convention, and
    /// `(a, b)` is a different key than `(b, a)`.
    ///
    /// # Arguments
    /// * `start` - First byte offset of the range
    /// * `end` - Last byte offset of the range
    pub fn from_range(start: u64, end: u64) -> Self {
        Self { start, end }
    }
}
