use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::error::{Error, Result};
use crate::utils::Priority;

/// The worklist driving exploration. Lower priority values come out first.
/// No duplicate detection happens here, callers keep their own visited set.
pub trait Frontier<T> {
    fn enqueue(&mut self, item: T, priority: Priority);
    /// Take the next item to explore, `EmptyFrontier` once nothing is left
    fn dequeue(&mut self) -> Result<T>;
    fn count(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

// ---------- Priority queue ----------
struct Entry<T> {
    priority: Priority,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// BinaryHeap pops the greatest entry, so both keys are reversed:
// smallest priority first, then earliest insertion among equals.
impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match other.priority.total_cmp(&self.priority) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            ord => ord,
        }
    }
}

/// Best-first frontier on a binary heap, FIFO among equal priorities
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<Entry<T>>,
    seq: u64,
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self { heap: BinaryHeap::new(), seq: 0 }
    }
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Priority of the entry that would be dequeued next
    pub fn peek_priority(&self) -> Option<Priority> {
        self.heap.peek().map(|e| e.priority)
    }
}

impl<T> Frontier<T> for PriorityFrontier<T> {
    fn enqueue(&mut self, item: T, priority: Priority) {
        self.heap.push(Entry { priority, seq: self.seq, item });
        self.seq += 1;
    }

    fn dequeue(&mut self) -> Result<T> {
        self.heap.pop().map(|e| e.item).ok_or(Error::EmptyFrontier)
    }

    fn count(&self) -> usize {
        self.heap.len()
    }
}

// ---------- Uninformed orders ----------
/// First in, first out (breadth-first). Priorities are ignored.
pub struct QueueFrontier<T>(VecDeque<T>);

impl<T> Default for QueueFrontier<T> {
    fn default() -> Self { QueueFrontier(VecDeque::new()) }
}

impl<T> Frontier<T> for QueueFrontier<T> {
    fn enqueue(&mut self, item: T, _priority: Priority) {
        self.0.push_back(item);
    }
    fn dequeue(&mut self) -> Result<T> {
        self.0.pop_front().ok_or(Error::EmptyFrontier)
    }
    fn count(&self) -> usize {
        self.0.len()
    }
}

/// Last in, first out (depth-first). Priorities are ignored.
pub struct StackFrontier<T>(Vec<T>);

impl<T> Default for StackFrontier<T> {
    fn default() -> Self { StackFrontier(Vec::new()) }
}

impl<T> Frontier<T> for StackFrontier<T> {
    fn enqueue(&mut self, item: T, _priority: Priority) {
        self.0.push(item);
    }
    fn dequeue(&mut self) -> Result<T> {
        self.0.pop().ok_or(Error::EmptyFrontier)
    }
    fn count(&self) -> usize {
        self.0.len()
    }
}
