//! First-come, first-served.
//!
//! # Algorithm
//!
//! 1. Stable-sort a private copy of the batch by arrival.
//! 2. Dispatch each process once, to completion, in that order.
//! 3. If the CPU is free before the next arrival, the clock idles forward
//!    to it, so no wait is ever negative.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for dispatch.

use tracing::{debug, instrument, trace};

use super::{finish_report, Scheduler};
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Process, ScheduleReport, ScheduleRow, Timeline};
use crate::workload::Workload;

/// First-come, first-served scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{Fcfs, Scheduler};
/// use cpu_schedule::Workload;
///
/// let workload = Workload::new(vec![Process::new(1, 5), Process::new(2, 3)]).unwrap();
/// let report = Fcfs::new().schedule(&workload);
/// assert_eq!(report.row_for(2).unwrap().wait, 5);
/// ```
#[derive(Debug, Clone)]
pub struct Fcfs {
    title: String,
}

impl Fcfs {
    /// Creates the scheduler with its default title.
    pub fn new() -> Self {
        Self {
            title: "First-come, first-serve".to_string(),
        }
    }

    /// Overrides the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Default for Fcfs {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for Fcfs {
    fn title(&self) -> &str {
        &self.title
    }

    #[instrument(skip_all, fields(engine = "fcfs", processes = workload.len()))]
    fn schedule(&self, workload: &Workload) -> ScheduleReport {
        let mut batch = workload.to_vec();
        RuleEngine::new().with_rule(rules::Fifo).sort(&mut batch);
        run_in_order(&self.title, &batch)
    }
}

/// Dispatches `batch` in the given order, each process to completion.
///
/// Shared by FCFS and SJF, which differ only in how they order the batch.
pub(crate) fn run_in_order(title: &str, batch: &[Process]) -> ScheduleReport {
    let mut clock = 0;
    let mut timeline = Timeline::new();
    let mut rows = Vec::with_capacity(batch.len());

    for process in batch {
        let start = clock.max(process.arrival);
        if start > clock {
            trace!(from = clock, to = start, "cpu idle until next arrival");
        }

        let wait = start - process.arrival;
        clock = start + process.burst;

        debug!(pid = process.id, start, stop = clock, wait, "dispatch");
        timeline.record(process.id, start, clock);
        rows.push(ScheduleRow::finished(process, wait));
    }

    finish_report(title, timeline, rows)
}
