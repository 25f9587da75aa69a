//! Priority scheduling with dynamic admission.
//!
//! # Algorithm
//!
//! 1. Sort a private copy of the batch by arrival (`remaining`).
//! 2. While processes remain:
//!    - If the ready queue is empty, idle the clock forward to the next
//!      arrival and admit every process that has arrived by then.
//!    - Otherwise dequeue the lowest priority value (earliest admitted on
//!      ties), run it to completion, then admit everything that arrived
//!      while it ran.
//!
//! Selection happens only between dispatches; a running process is never
//! preempted. Each process therefore gets exactly one timeline entry.
//!
//! # Complexity
//! O(n log n): one heap push and pop per process.

use std::collections::{BTreeMap, VecDeque};

use tracing::{debug, instrument, trace};

use super::{finish_report, Scheduler};
use crate::dispatching::{rules, ReadyQueue, RuleEngine};
use crate::models::{Process, ScheduleReport, ScheduleRow, Timeline};
use crate::workload::Workload;

/// Non-preemptive priority scheduler.
///
/// Lower priority values run first. Results are keyed by process ID, so
/// IDs need not be dense.
#[derive(Debug, Clone)]
pub struct PrioritySjf {
    title: String,
}

impl PrioritySjf {
    /// Creates the scheduler with its default title.
    pub fn new() -> Self {
        Self {
            title: "Priority".to_string(),
        }
    }

    /// Overrides the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Default for PrioritySjf {
    fn default() -> Self {
        Self::new()
    }
}

/// Moves every process that has arrived by `clock` from `remaining` into `ready`.
///
/// `remaining` must be sorted by arrival.
fn admit(remaining: &mut VecDeque<Process>, ready: &mut ReadyQueue, clock: i64) {
    while let Some(process) = remaining.front() {
        if !process.has_arrived(clock) {
            break;
        }
        trace!(pid = process.id, clock, "admitted");
        if let Some(process) = remaining.pop_front() {
            ready.enqueue(process);
        }
    }
}

impl Scheduler for PrioritySjf {
    fn title(&self) -> &str {
        &self.title
    }

    #[instrument(skip_all, fields(engine = "priority", processes = workload.len()))]
    fn schedule(&self, workload: &Workload) -> ScheduleReport {
        let mut batch = workload.to_vec();
        RuleEngine::new().with_rule(rules::Fifo).sort(&mut batch);

        let mut remaining: VecDeque<Process> = batch.into();
        let mut ready = ReadyQueue::new();
        let mut clock = 0;
        let mut timeline = Timeline::new();
        let mut rows: BTreeMap<i64, ScheduleRow> = BTreeMap::new();

        while !remaining.is_empty() || !ready.is_empty() {
            let Some(process) = ready.dequeue() else {
                if let Some(next) = remaining.front() {
                    if next.arrival > clock {
                        trace!(from = clock, to = next.arrival, "cpu idle until next arrival");
                        clock = next.arrival;
                    }
                }
                admit(&mut remaining, &mut ready, clock);
                continue;
            };

            let start = clock;
            let wait = start - process.arrival;
            clock += process.burst;

            debug!(
                pid = process.id,
                priority = process.priority,
                start,
                stop = clock,
                wait,
                "dispatch"
            );
            timeline.record(process.id, start, clock);
            rows.insert(process.id, ScheduleRow::finished(&process, wait));

            admit(&mut remaining, &mut ready, clock);
        }

        finish_report(&self.title, timeline, rows.into_values().collect())
    }
}
