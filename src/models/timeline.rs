//! Execution timeline (Gantt chart) model.
//!
//! A timeline is the ordered record of which process held the simulated
//! CPU over which interval. Round-Robin produces several entries per
//! process; the other engines produce exactly one.

use serde::{Deserialize, Serialize};

/// One contiguous interval of CPU occupation.
///
/// Covers `[start, stop)` with `start < stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Process that held the CPU.
    pub process_id: i64,
    /// Dispatch time.
    pub start: i64,
    /// Time the process left the CPU.
    pub stop: i64,
}

impl TimelineEntry {
    /// Creates a new entry.
    pub fn new(process_id: i64, start: i64, stop: i64) -> Self {
        Self {
            process_id,
            start,
            stop,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

/// Ordered execution history of one engine run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Entries in dispatch order.
    pub entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `process_id` ran over `[start, stop)`.
    pub fn record(&mut self, process_id: i64, start: i64, stop: i64) {
        debug_assert!(start < stop, "empty dispatch for process {process_id}");
        self.entries.push(TimelineEntry::new(process_id, start, stop));
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = &TimelineEntry> {
        self.entries.iter()
    }

    /// Latest stop time (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.entries.iter().map(|e| e.stop).max().unwrap_or(0)
    }

    /// Stop time of the final entry, if any.
    pub fn last_stop(&self) -> Option<i64> {
        self.entries.last().map(|e| e.stop)
    }

    /// Total time the CPU was occupied.
    pub fn busy_time(&self) -> i64 {
        self.entries.iter().map(TimelineEntry::duration).sum()
    }

    /// Time between 0 and the makespan with no process on the CPU.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Fraction of the makespan the CPU was busy.
    ///
    /// Returns `None` for an empty timeline.
    pub fn utilization(&self) -> Option<f64> {
        let makespan = self.makespan();
        if makespan <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / makespan as f64)
    }

    /// All entries belonging to one process.
    pub fn entries_for(&self, process_id: i64) -> Vec<&TimelineEntry> {
        self.entries
            .iter()
            .filter(|e| e.process_id == process_id)
            .collect()
    }

    /// Process ids in dispatch order (one per entry).
    pub fn dispatch_order(&self) -> Vec<i64> {
        self.entries.iter().map(|e| e.process_id).collect()
    }

    /// Whether every entry is non-empty and no entry overlaps its predecessor.
    pub fn is_ordered(&self) -> bool {
        self.entries.iter().all(|e| e.start < e.stop)
            && self.entries.windows(2).all(|w| w[0].stop <= w[1].start)
    }
}
