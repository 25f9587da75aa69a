//! Round-robin with a fixed quantum.
//!
//! # Algorithm
//!
//! Each iteration:
//! 1. Append every process that has arrived by the clock to the ready
//!    queue, in arrival order.
//! 2. If nothing is ready, idle the clock forward to the next arrival.
//! 3. Otherwise run the head of the queue for at most one quantum. A
//!    process with burst left goes back to the tail (ahead of anything
//!    that arrived during its slice); a finished one records its metrics.
//!
//! # Response time
//!
//! [`ResponseTime::FinalDispatch`] (the default) measures from arrival to
//! the start of the slice in which the process *finishes*.
//! [`ResponseTime::FirstDispatch`] gives the textbook definition (arrival
//! to first time on the CPU). The two agree for processes that finish in
//! one slice.

use std::collections::{HashMap, VecDeque};
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use super::{finish_report, Scheduler};
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Process, ScheduleReport, ScheduleRow, Timeline};
use crate::workload::Workload;

/// Default time quantum.
pub const DEFAULT_QUANTUM: u32 = 2;

/// How round-robin measures response time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseTime {
    /// Start of the completing slice minus arrival.
    #[default]
    FinalDispatch,
    /// Start of the first slice minus arrival.
    FirstDispatch,
}

/// A ready process and its progress.
#[derive(Debug, Clone)]
struct Slot {
    process: Process,
    left: i64,
    first_start: Option<i64>,
}

/// Round-robin scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{RoundRobin, Scheduler};
/// use cpu_schedule::Workload;
///
/// let workload = Workload::new(vec![Process::new(1, 4), Process::new(2, 2)]).unwrap();
/// let report = RoundRobin::new().schedule(&workload);
/// assert_eq!(report.timeline.dispatch_order(), vec![1, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct RoundRobin {
    title: String,
    quantum: NonZeroU32,
    response: ResponseTime,
}

impl RoundRobin {
    /// Creates the scheduler with quantum 2 and final-dispatch response time.
    pub fn new() -> Self {
        Self {
            title: "Round-robin".to_string(),
            quantum: NonZeroU32::new(DEFAULT_QUANTUM).unwrap_or(NonZeroU32::MIN),
            response: ResponseTime::default(),
        }
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: NonZeroU32) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the response-time definition.
    pub fn with_response_time(mut self, response: ResponseTime) -> Self {
        self.response = response;
        self
    }

    /// Overrides the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The time quantum.
    pub fn quantum(&self) -> i64 {
        i64::from(self.quantum.get())
    }

    /// The response-time definition in use.
    pub fn response_time(&self) -> ResponseTime {
        self.response
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for RoundRobin {
    fn title(&self) -> &str {
        &self.title
    }

    #[instrument(skip_all, fields(engine = "rr", quantum = self.quantum.get(), processes = workload.len()))]
    fn schedule(&self, workload: &Workload) -> ScheduleReport {
        let quantum = self.quantum();

        let mut batch = workload.to_vec();
        RuleEngine::new().with_rule(rules::Fifo).sort(&mut batch);

        let mut remaining: VecDeque<Process> = batch.into();
        let mut ready: VecDeque<Slot> = VecDeque::with_capacity(workload.len());
        let mut clock = 0;
        let mut timeline = Timeline::new();
        let mut finished: HashMap<i64, ScheduleRow> = HashMap::with_capacity(workload.len());

        while !remaining.is_empty() || !ready.is_empty() {
            while remaining.front().is_some_and(|p| p.has_arrived(clock)) {
                if let Some(process) = remaining.pop_front() {
                    ready.push_back(Slot {
                        process,
                        left: process.burst,
                        first_start: None,
                    });
                }
            }

            let Some(mut slot) = ready.pop_front() else {
                if let Some(next) = remaining.front() {
                    trace!(from = clock, to = next.arrival, "cpu idle until next arrival");
                    clock = next.arrival;
                }
                continue;
            };

            let start = clock;
            let first_start = *slot.first_start.get_or_insert(start);
            let pid = slot.process.id;

            if slot.left > quantum {
                clock += quantum;
                slot.left -= quantum;
                debug!(pid, start, stop = clock, left = slot.left, "slice expired");
                timeline.record(pid, start, clock);
                ready.push_back(slot);
                continue;
            }

            clock += slot.left;
            debug!(pid, start, stop = clock, "finished");
            timeline.record(pid, start, clock);

            let process = slot.process;
            let turnaround = clock - process.arrival;
            let response = match self.response {
                ResponseTime::FinalDispatch => start - process.arrival,
                ResponseTime::FirstDispatch => first_start - process.arrival,
            };
            finished.insert(
                pid,
                ScheduleRow::finished(&process, turnaround - process.burst)
                    .with_response(response),
            );
        }

        // Rows in source order
        let rows = workload
            .processes()
            .iter()
            .filter_map(|p| finished.remove(&p.id))
            .collect();

        finish_report(&self.title, timeline, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineEntry;
    use pretty_assertions::assert_eq;

    fn run(rr: RoundRobin, processes: Vec<Process>) -> ScheduleReport {
        rr.schedule(&Workload::new(processes).unwrap())
    }

    fn quantum(q: u32) -> NonZeroU32 {
        NonZeroU32::new(q).unwrap()
    }

    #[test]
    fn test_rr_basic_interleaving() {
        let report = run(RoundRobin::new(), vec![Process::new(1, 4), Process::new(2, 2)]);

        assert_eq!(
            report.timeline.entries,
            vec![
                TimelineEntry::new(1, 0, 2),
                TimelineEntry::new(2, 2, 4),
                TimelineEntry::new(1, 4, 6),
            ]
        );

        let p2 = report.row_for(2).unwrap();
        assert_eq!((p2.completion, p2.turnaround, p2.wait), (4, 4, 2));
        let p1 = report.row_for(1).unwrap();
        assert_eq!((p1.completion, p1.turnaround, p1.wait), (6, 6, 2));
        assert_eq!(report.summary.last_completion, 6);
    }

    #[test]
    fn test_rr_response_final_dispatch() {
        let report = run(RoundRobin::new(), vec![Process::new(1, 4), Process::new(2, 2)]);
        // 1 first ran at 0 but its completing slice started at 4
        assert_eq!(report.row_for(1).unwrap().response, Some(4));
        assert_eq!(report.row_for(2).unwrap().response, Some(2));
        assert_eq!(report.summary.average_response, Some(3.0));
    }

    #[test]
    fn test_rr_response_first_dispatch() {
        let rr = RoundRobin::new().with_response_time(ResponseTime::FirstDispatch);
        let report = run(rr, vec![Process::new(1, 4), Process::new(2, 2)]);
        assert_eq!(report.row_for(1).unwrap().response, Some(0));
        assert_eq!(report.row_for(2).unwrap().response, Some(2));
        assert_eq!(report.summary.average_response, Some(1.0));
    }

    #[test]
    fn test_rr_idle_gap() {
        let report = run(
            RoundRobin::new(),
            vec![Process::new(1, 1), Process::new(2, 2).with_arrival(5)],
        );

        assert_eq!(
            report.timeline.entries,
            vec![TimelineEntry::new(1, 0, 1), TimelineEntry::new(2, 5, 7)]
        );
        assert_eq!(report.row_for(2).unwrap().wait, 0);
        assert_eq!(report.timeline.idle_time(), 4);
    }

    #[test]
    fn test_rr_far_future_arrival() {
        let report = run(
            RoundRobin::new(),
            vec![Process::new(1, 3).with_arrival(1_000_000_000_000)],
        );
        assert_eq!(
            report.timeline.entries,
            vec![
                TimelineEntry::new(1, 1_000_000_000_000, 1_000_000_000_002),
                TimelineEntry::new(1, 1_000_000_000_002, 1_000_000_000_003),
            ]
        );
        assert_eq!(report.row_for(1).unwrap().wait, 0);
    }

    #[test]
    fn test_rr_unordered_input_is_sorted_by_arrival() {
        let report = run(
            RoundRobin::new(),
            vec![
                Process::new(1, 3).with_arrival(6),
                Process::new(2, 4),
            ],
        );
        assert_eq!(
            report.timeline.entries,
            vec![
                TimelineEntry::new(2, 0, 2),
                TimelineEntry::new(2, 2, 4),
                TimelineEntry::new(1, 6, 8),
                TimelineEntry::new(1, 8, 9),
            ]
        );
        assert_eq!(
            report.rows.iter().map(|r| (r.id, r.wait)).collect::<Vec<_>>(),
            vec![(1, 0), (2, 0)]
        );
    }

    #[test]
    fn test_rr_requeued_process_ahead_of_new_arrival() {
        // 2 arrives during 1's first slice and queues behind it
        let report = run(
            RoundRobin::new(),
            vec![Process::new(1, 5), Process::new(2, 2).with_arrival(1)],
        );
        assert_eq!(report.timeline.dispatch_order(), vec![1, 1, 2, 1]);
        assert_eq!(report.row_for(2).unwrap().completion, 6);
        assert_eq!(report.row_for(1).unwrap().completion, 7);
    }

    #[test]
    fn test_rr_custom_quantum() {
        let report = run(
            RoundRobin::new().with_quantum(quantum(3)),
            vec![Process::new(1, 4), Process::new(2, 3)],
        );
        assert_eq!(
            report.timeline.entries,
            vec![
                TimelineEntry::new(1, 0, 3),
                TimelineEntry::new(2, 3, 6),
                TimelineEntry::new(1, 6, 7),
            ]
        );
    }

    #[test]
    fn test_rr_large_quantum_is_fcfs() {
        let processes = vec![
            Process::new(1, 3),
            Process::new(2, 5).with_arrival(1),
            Process::new(3, 2).with_arrival(2),
        ];
        let rr = run(RoundRobin::new().with_quantum(quantum(100)), processes.clone());
        let fcfs = crate::scheduler::Fcfs::new().schedule(&Workload::new(processes).unwrap());
        assert_eq!(rr.timeline, fcfs.timeline);
    }

    #[test]
    fn test_rr_rows_in_source_order() {
        let report = run(
            RoundRobin::new(),
            vec![Process::new(3, 6), Process::new(1, 1), Process::new(2, 2)],
        );
        assert_eq!(
            report.rows.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![3, 1, 2]
        );
        assert!(report.rows_consistent());
    }

    #[test]
    fn test_defaults() {
        let rr = RoundRobin::default();
        assert_eq!(rr.quantum(), 2);
        assert_eq!(rr.response_time(), ResponseTime::FinalDispatch);
        assert_eq!(rr.title(), "Round-robin");
    }
}
