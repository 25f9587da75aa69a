//! Process model.
//!
//! A process is a single unit of CPU work in a fixed batch: it becomes
//! eligible at its arrival time and needs `burst` units of CPU to finish.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integer ticks of the simulated clock, relative to t=0.
///
/// # Priority Convention
/// **Lower value = higher priority.** An absent priority in the source
/// data loads as 0, the most urgent level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (> 0).
    pub id: i64,
    /// Clock value at which the process becomes eligible (>= 0).
    pub arrival: i64,
    /// Total CPU time required (> 0).
    pub burst: i64,
    /// Scheduling priority (>= 0, lower = more urgent).
    #[serde(default)]
    pub priority: i64,
}

impl Process {
    /// Creates a process arriving at t=0 with priority 0.
    pub fn new(id: i64, burst: i64) -> Self {
        Self {
            id,
            arrival: 0,
            burst,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival: i64) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the burst duration.
    pub fn with_burst(mut self, burst: i64) -> Self {
        self.burst = burst;
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process is eligible to run at `clock`.
    #[inline]
    pub fn has_arrived(&self, clock: i64) -> bool {
        self.arrival <= clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(3, 7).with_arrival(4).with_priority(2);

        assert_eq!(p.id, 3);
        assert_eq!(p.burst, 7);
        assert_eq!(p.arrival, 4);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_process_defaults() {
        let p = Process::new(1, 5);
        assert_eq!(p.arrival, 0);
        assert_eq!(p.priority, 0);
    }

    #[test]
    fn test_has_arrived() {
        let p = Process::new(1, 5).with_arrival(3);
        assert!(!p.has_arrived(2));
        assert!(p.has_arrived(3));
        assert!(p.has_arrived(10));
    }

    #[test]
    fn test_priority_defaults_when_absent() {
        let p: Process = serde_json::from_str(r#"{"id":1,"arrival":0,"burst":4}"#).unwrap();
        assert_eq!(p.priority, 0);
    }
}
