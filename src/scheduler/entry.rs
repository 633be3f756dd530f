/*!
 * Ready Queue Entry
 * Heap ordering for key-based ready sets
 */

use crate::core::Time;
use std::cmp::Ordering;

/// Ready-set entry referencing a process by its index in the caller's slice
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the entry with the
/// smallest `key`, then the earliest `arrival`, then the lowest `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ReadyEntry {
    pub key: u64,
    pub arrival: Time,
    pub index: usize,
}

impl ReadyEntry {
    #[inline]
    pub const fn new(key: u64, arrival: Time, index: usize) -> Self {
        Self {
            key,
            arrival,
            index,
        }
    }
}

impl Ord for ReadyEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on every field: smaller values are "greater" for the max-heap
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.arrival.cmp(&self.arrival))
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for ReadyEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
