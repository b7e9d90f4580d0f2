//! Chunk Module
//!
//! Defines the fixed-size payload unit stored by the cache.

use crate::error::{CacheError, Result};

// == Chunk ==
/// A fixed-size block of bytes, the unit of storage for the cache.
///
/// Every chunk owns a buffer of exactly the configured chunk size. A
/// payload shorter than the buffer (the final chunk of a file, for
/// example) occupies a prefix of it; the remainder stays zeroed and
/// `used_len` records the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Fixed-size backing buffer, length equals the chunk size
    buf: Box<[u8]>,
    /// Number of payload bytes occupying the front of the buffer
    used: usize,
}

impl Chunk {
    // == Constructor ==
    /// Creates a chunk of `chunk_size` bytes holding `bytes` as payload.
    ///
    /// Boundary condition: a payload of exactly `chunk_size` bytes fills
    /// the chunk; one byte more is rejected. Payloads are never silently
    /// truncated.
    ///
    /// # Arguments
    /// * `chunk_size` - Fixed buffer size in bytes
    /// * `bytes` - Payload to copy into the front of the buffer
    ///
    /// # Returns
    /// - `Ok(Chunk)` when the payload fits
    /// - `Err(CacheError::OversizedPayload)` when it does not
    pub fn from_bytes(chunk_size: usize, bytes: &[u8]) -> Result<Self> {
        if bytes.len() > chunk_size {
            return Err(CacheError::OversizedPayload {
                actual: bytes.len(),
                limit: chunk_size,
            });
        }

        let mut buf = vec![0u8; chunk_size].into_boxed_slice();
        buf[..bytes.len()].copy_from_slice(bytes);

        Ok(Self {
            buf,
            used: bytes.len(),
        })
    }

    // == Accessors ==
    /// Returns the payload bytes (the occupied prefix of the buffer).
    pub fn bytes(&self) -> &[u8] {
        &self.buf[..self.used]
    }

    /// Returns the number of payload bytes.
    pub fn used_len(&self) -> usize {
        self.used
    }

    /// Returns the fixed buffer size in bytes.
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    /// Checks whether the payload fills the entire buffer.
    pub fn is_full(&self) -> bool {
        self.used == self.buf.len()
    }
}
