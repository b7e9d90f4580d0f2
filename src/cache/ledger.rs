//! Recency Ledger Module
//!
//! Tracks chunk access order for LRU eviction with O(1) operations.

use std::collections::HashMap;

use crate::cache::ChunkKey;

/// Sentinel value for null links in the ledger's doubly-linked list.
const NIL: usize = usize::MAX;

// == Recency Entry ==
/// One ledger record: which chunk, and when it was last touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyEntry {
    /// Key of the tracked chunk
    pub key: ChunkKey,
    /// Logical tick of the most recent access
    pub last_access: u64,
}

/// A ledger slot: an entry plus its list links. Slots are arena-allocated
/// so a relink never moves or invalidates other entries.
#[derive(Debug, Clone, Copy)]
struct Slot {
    entry: RecencyEntry,
    prev: usize,
    next: usize,
}

// == Recency Ledger ==
/// Tracks access order for LRU eviction.
///
/// Entries live in a slot arena threaded into a doubly-linked list:
/// - Head = least recently used (the eviction candidate)
/// - Tail = most recently used
///
/// A key-to-slot index makes `touch` a constant-time relink instead of a
/// scan, and freed slots are recycled through a free list so a full
/// cache stops allocating. A logical clock stamps every access; ticks
/// are monotonic and never reused.
#[derive(Debug)]
pub struct RecencyLedger {
    /// Slot arena holding entries and their links
    slots: Vec<Slot>,
    /// Key to slot index, one slot per tracked key
    index: HashMap<ChunkKey, usize>,
    /// Oldest entry (next to evict), NIL when empty
    head: usize,
    /// Newest entry, NIL when empty
    tail: usize,
    /// Head of the free-slot list, NIL when none
    free: usize,
    /// Logical access clock, incremented on every touch
    clock: u64,
}

impl RecencyLedger {
    // == Constructor ==
    /// Creates a new empty recency ledger.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
            head: NIL,
            tail: NIL,
            free: NIL,
            clock: 0,
        }
    }

    // == Touch ==
    /// Marks a key as most recently used.
    ///
    /// If the key is already tracked, its entry is restamped with a fresh
    /// tick and relinked at the tail. If the key is new, a slot is
    /// allocated (reusing a freed one when available) and linked at the
    /// tail. Either way the operation is O(1).
    pub fn touch(&mut self, key: ChunkKey) {
        self.clock += 1;
        let tick = self.clock;

        if let Some(&idx) = self.index.get(&key) {
            self.slots[idx].entry.last_access = tick;
            // Already newest: links are correct as-is
            if self.tail != idx {
                self.unlink(idx);
                self.link_tail(idx);
            }
        } else {
            let idx = self.alloc_slot(RecencyEntry {
                key,
                last_access: tick,
            });
            self.link_tail(idx);
            self.index.insert(key, idx);
        }
    }

    // == Evict Oldest ==
    /// Removes and returns the least recently used key.
    ///
    /// Returns None if the ledger is empty.
    pub fn evict_oldest(&mut self) -> Option<ChunkKey> {
        if self.head == NIL {
            return None;
        }

        let idx = self.head;
        let key = self.slots[idx].entry.key;

        self.unlink(idx);
        self.index.remove(&key);
        self.free_slot(idx);

        Some(key)
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<ChunkKey> {
        if self.head == NIL {
            None
        } else {
            Some(self.slots[self.head].entry.key)
        }
    }

    // == Last Access ==
    /// Returns the tick at which a key was last touched.
    ///
    /// Returns None if the key is not tracked.
    pub fn last_access(&self, key: &ChunkKey) -> Option<u64> {
        self.index
            .get(key)
            .map(|&idx| self.slots[idx].entry.last_access)
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    /// Returns true if no keys are tracked.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    #[allow(dead_code)]
    pub fn contains(&self, key: &ChunkKey) -> bool {
        self.index.contains_key(key)
    }

    // == Internal Link Operations ==

    /// Allocates a slot for `entry`, reusing a freed slot if available.
    fn alloc_slot(&mut self, entry: RecencyEntry) -> usize {
        if self.free != NIL {
            let idx = self.free;
            self.free = self.slots[idx].next;
            self.slots[idx] = Slot {
                entry,
                prev: NIL,
                next: NIL,
            };
            idx
        } else {
            let idx = self.slots.len();
            self.slots.push(Slot {
                entry,
                prev: NIL,
                next: NIL,
            });
            idx
        }
    }

    /// Detaches the slot at `idx` from the list without freeing it.
    fn unlink(&mut self, idx: usize) {
        let prev = self.slots[idx].prev;
        let next = self.slots[idx].next;

        if prev != NIL {
            self.slots[prev].next = next;
        } else {
            self.head = next;
        }

        if next != NIL {
            self.slots[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.slots[idx].prev = NIL;
        self.slots[idx].next = NIL;
    }

    /// Links the slot at `idx` at the tail (most recently used).
    fn link_tail(&mut self, idx: usize) {
        self.slots[idx].prev = self.tail;
        self.slots[idx].next = NIL;

        if self.tail != NIL {
            self.slots[self.tail].next = idx;
        }
        self.tail = idx;

        if self.head == NIL {
            self.head = idx;
        }
    }

    /// Returns the slot at `idx` to the free list.
    fn free_slot(&mut self, idx: usize) {
        self.slots[idx].next = self.free;
        self.free = idx;
    }
}

// Derived Default would zero the links; they must start at NIL
impl Default for RecencyLedger {
    fn default() -> Self {
        Self::new()
    }
}
