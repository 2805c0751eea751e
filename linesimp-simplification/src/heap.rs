//! Indexed binary min-heap
//!
//! Items are identified by dense ids in `0..capacity`. Alongside the heap
//! array the structure keeps an id -> heap-position map, so the key of any
//! queued item can be changed or the item removed in O(log n) without
//! leaving stale entries behind.

use std::cmp::Ordering;

const ABSENT: usize = usize::MAX;

/// Min-heap over `f64` keys addressed by item id.
///
/// Ordering is `(key, id)`: keys compare with [`f64::total_cmp`] and equal
/// keys pop the smallest id first, so the pop order is fully deterministic.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    /// Item ids in heap order
    heap: Vec<usize>,
    /// Heap position of each id (ABSENT when not queued)
    positions: Vec<usize>,
    /// Current key of each id
    keys: Vec<f64>,
}

impl IndexedMinHeap {
    /// Create an empty heap accepting ids in `0..capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: vec![ABSENT; capacity],
            keys: vec![0.0; capacity],
        }
    }

    /// Number of queued items
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if no items are queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `id` is currently queued
    pub fn contains(&self, id: usize) -> bool {
        self.positions.get(id).is_some_and(|&pos| pos != ABSENT)
    }

    /// Current key of a queued item
    pub fn key(&self, id: usize) -> Option<f64> {
        self.contains(id).then(|| self.keys[id])
    }

    /// Queue `id` with `key`, or change its key if it is already queued.
    ///
    /// # Panics
    /// If `id` is outside the capacity the heap was created with.
    pub fn push(&mut self, id: usize, key: f64) {
        if self.contains(id) {
            self.update(id, key);
            return;
        }
        self.keys[id] = key;
        self.positions[id] = self.heap.len();
        self.heap.push(id);
        self.sift_up(self.heap.len() - 1);
    }

    /// Change the key of `id`, queueing it if absent.
    ///
    /// Works for both decreases and increases.
    pub fn update(&mut self, id: usize, key: f64) {
        let pos = self.positions[id];
        if pos == ABSENT {
            self.push(id, key);
            return;
        }
        let old = self.keys[id];
        self.keys[id] = key;
        match key.total_cmp(&old) {
            Ordering::Less => self.sift_up(pos),
            Ordering::Greater => self.sift_down(pos),
            Ordering::Equal => {}
        }
    }

    /// Smallest item without removing it
    pub fn peek(&self) -> Option<(usize, f64)> {
        self.heap.first().map(|&id| (id, self.keys[id]))
    }

    /// Remove and return the smallest item
    pub fn pop(&mut self) -> Option<(usize, f64)> {
        let &id = self.heap.first()?;
        self.remove(id).map(|key| (id, key))
    }

    /// Remove `id` from the queue, returning its key if it was queued
    pub fn remove(&mut self, id: usize) -> Option<f64> {
        let pos = *self.positions.get(id)?;
        if pos == ABSENT {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(pos, last);
        self.heap.pop();
        self.positions[id] = ABSENT;
        if pos < self.heap.len() {
            // The moved element may need to travel in either direction
            self.sift_down(pos);
            self.sift_up(pos);
        }
        Some(self.keys[id])
    }

    fn less(&self, a: usize, b: usize) -> bool {
        match self.keys[a].total_cmp(&self.keys[b]) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => a < b,
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.positions[self.heap[i]] = i;
        self.positions[self.heap[j]] = j;
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(self.heap[pos], self.heap[parent]) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < len && self.less(self.heap[left], self.heap[smallest]) {
                smallest = left;
            }
            if right < len && self.less(self.heap[right], self.heap[smallest]) {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        for (pos, &id) in self.heap.iter().enumerate() {
            assert_eq!(self.positions[id], pos, "position map out of sync for id {id}");
            if pos > 0 {
                let parent = self.heap[(pos - 1) / 2];
                assert!(
                    !self.less(id, parent),
                    "heap order violated: id {id} sorts before parent {parent}"
                );
            }
        }
        let queued = self.positions.iter().filter(|&&p| p != ABSENT).count();
        assert_eq!(queued, self.heap.len());
    }
}
