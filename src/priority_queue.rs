use std::fmt::Debug;

use crate::error::{HuffmanError, Result};

/// Integer key type usable by [`PriorityQueue`].
pub trait Weight: Copy + Ord + Debug {
    /// Less than or equal to every weight a caller can insert.
    const SENTINEL: Self;
}

macro_rules! impl_weight {
    ($($t:ty),*) => {
        $(impl Weight for $t {
            const SENTINEL: Self = <$t>::MIN;
        })*
    };
}

impl_weight!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

#[derive(Debug)]
struct HeapEntry<W, T> {
    weight: W,
    payload: Option<T>,
}

impl<W: Weight, T> HeapEntry<W, T> {
    fn vacant() -> Self {
        HeapEntry {
            weight: W::SENTINEL,
            payload: None,
        }
    }
}

/// A min-priority-queue of payloads keyed by integer weights.
///
/// Backed by a 1-indexed binary heap. Slot 0 holds a sentinel whose weight
/// is `W::SENTINEL`, so the sift-up walk stops at the root without a bounds
/// check. Equal weights come out in whatever order the heap shape yields.
#[derive(Debug)]
pub struct PriorityQueue<W, T> {
    slots: Vec<HeapEntry<W, T>>,
}

impl<W: Weight, T> PriorityQueue<W, T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity + 1);
        slots.push(HeapEntry::vacant());
        PriorityQueue { slots }
    }

    /// Number of entries, not counting the sentinel.
    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.slots.len() == 1
    }

    /// Inserts `payload` keyed by `weight`. O(log n).
    pub fn insert(&mut self, weight: W, payload: T) {
        let mut i = self.slots.len();
        self.slots.push(HeapEntry::vacant());

        // Strict comparison: the sentinel at slot 0 never moves.
        while self.slots[i / 2].weight > weight {
            self.slots.swap(i / 2, i);
            i /= 2;
        }

        self.slots[i] = HeapEntry {
            weight,
            payload: Some(payload),
        };
    }

    /// Returns the smallest weight currently stored.
    pub fn peek_min_weight(&self) -> Result<W> {
        self.slots
            .get(1)
            .map(|entry| entry.weight)
            .ok_or(HuffmanError::EmptyQueue)
    }

    /// Borrows the payload with the smallest weight without removing it.
    pub fn peek_min(&self) -> Result<&T> {
        self.slots
            .get(1)
            .and_then(|entry| entry.payload.as_ref())
            .ok_or(HuffmanError::EmptyQueue)
    }

    /// Removes and returns the payload with the smallest weight. O(log n).
    pub fn remove_min(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(HuffmanError::EmptyQueue);
        }

        let last = self.slots.pop().ok_or(HuffmanError::EmptyQueue)?;
        let min = if self.is_empty() {
            last
        } else {
            let min = std::mem::replace(&mut self.slots[1], last);
            self.sift_down(1);
            min
        };

        min.payload.ok_or(HuffmanError::EmptyQueue)
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.slots.len();
        let mut child = 2 * i;

        while child < len {
            if child + 1 < len && self.slots[child + 1].weight < self.slots[child].weight {
                child += 1;
            }
            if self.slots[child].weight >= self.slots[i].weight {
                break;
            }
            self.slots.swap(i, child);
            i = child;
            child = 2 * i;
        }
    }

    #[cfg(test)]
    fn is_heap_ordered(&self) -> bool {
        (2..self.slots.len()).all(|i| self.slots[i / 2].weight <= self.slots[i].weight)
    }
}

impl<W: Weight, T> Default for PriorityQueue<W, T> {
    fn default() -> Self {
        Self::new()
    }
}
