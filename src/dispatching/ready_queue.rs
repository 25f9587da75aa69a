//! Min-score ready queue.
//!
//! Holds processes that have arrived and are waiting for the CPU, and
//! hands back the one with the smallest rule score. Equal scores leave in
//! enqueue order.
//!
//! # Complexity
//! O(log n) enqueue and dequeue (binary heap).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::rules::LowestPriority;
use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// `(score, sequence)` first.
#[derive(Debug, Clone)]
struct Queued {
    score: RuleScore,
    sequence: u64,
    process: Process,
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: smaller score, then earlier sequence, is "greater".
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.sequence == other.sequence
    }
}

impl Eq for Queued {}

/// Ready queue keyed by a dispatching rule.
///
/// Defaults to [`LowestPriority`]: the process with the numerically
/// smallest priority value leaves first.
///
/// # Example
/// ```
/// use cpu_schedule::dispatching::ReadyQueue;
/// use cpu_schedule::models::Process;
///
/// let mut ready = ReadyQueue::new();
/// ready.enqueue(Process::new(1, 4).with_priority(2));
/// ready.enqueue(Process::new(2, 4).with_priority(1));
/// assert_eq!(ready.dequeue().map(|p| p.id), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct ReadyQueue<R = LowestPriority> {
    rule: R,
    heap: BinaryHeap<Queued>,
    next_sequence: u64,
}

impl ReadyQueue<LowestPriority> {
    /// Creates an empty queue ordered by priority value.
    pub fn new() -> Self {
        Self::with_rule(LowestPriority)
    }
}

impl Default for ReadyQueue<LowestPriority> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: DispatchingRule> ReadyQueue<R> {
    /// Creates an empty queue ordered by `rule`.
    pub fn with_rule(rule: R) -> Self {
        Self {
            rule,
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// Adds a process.
    pub fn enqueue(&mut self, process: Process) {
        let entry = Queued {
            score: self.rule.evaluate(&process),
            sequence: self.next_sequence,
            process,
        };
        self.next_sequence += 1;
        self.heap.push(entry);
    }

    /// Removes and returns the lowest-scoring process.
    pub fn dequeue(&mut self) -> Option<Process> {
        self.heap.pop().map(|q| q.process)
    }

    /// The process `dequeue` would return, without removing it.
    pub fn peek(&self) -> Option<&Process> {
        self.heap.peek().map(|q| &q.process)
    }

    /// Whether the queue holds no processes.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued processes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
