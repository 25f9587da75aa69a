//! Non-preemptive shortest job first.
//!
//! # Algorithm
//!
//! 1. Sort a private copy of the batch by `(arrival, burst)`, keeping
//!    input order for full ties.
//! 2. Dispatch in that order exactly like FCFS.
//!
//! The ranking is static: a shorter job arriving later never overtakes a
//! job that was ranked ahead of it.

use tracing::instrument;

use super::fcfs::run_in_order;
use super::Scheduler;
use crate::dispatching::{rules, RuleEngine};
use crate::models::ScheduleReport;
use crate::workload::Workload;

/// Shortest-job-first scheduler.
#[derive(Debug, Clone)]
pub struct Sjf {
    title: String,
    ordering: RuleEngine,
}

impl Sjf {
    /// Creates the scheduler with its default title.
    pub fn new() -> Self {
        Self {
            title: "Shortest-job-first".to_string(),
            ordering: RuleEngine::new()
                .with_rule(rules::Fifo)
                .with_tie_breaker(rules::Spt),
        }
    }

    /// Overrides the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Default for Sjf {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for Sjf {
    fn title(&self) -> &str {
        &self.title
    }

    #[instrument(skip_all, fields(engine = "sjf", processes = workload.len()))]
    fn schedule(&self, workload: &Workload) -> ScheduleReport {
        let mut batch = workload.to_vec();
        self.ordering.sort(&mut batch);
        run_in_order(&self.title, &batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sjf_orders_by_burst_within_arrival() {
        let workload = Workload::new(vec![
            Process::new(1, 5),
            Process::new(2, 3),
            Process::new(3, 2),
        ])
        .unwrap();
        let report = Sjf::new().schedule(&workload);

        assert_eq!(report.timeline.dispatch_order(), vec![3, 2, 1]);
        assert_eq!(
            report.rows.iter().map(|r| (r.id, r.wait)).collect::<Vec<_>>(),
            vec![(3, 0), (2, 2), (1, 5)]
        );
    }

    #[test]
    fn test_sjf_arrival_dominates_burst() {
        let workload = Workload::new(vec![
            Process::new(1, 8),
            Process::new(2, 1).with_arrival(1),
        ])
        .unwrap();
        let report = Sjf::new().schedule(&workload);

        // Static ranking: the long job at t=0 still runs first
        assert_eq!(report.timeline.dispatch_order(), vec![1, 2]);
        assert_eq!(report.row_for(2).unwrap().wait, 7);
    }

    #[test]
    fn test_sjf_equal_bursts_keep_input_order() {
        let workload = Workload::new(vec![
            Process::new(4, 2),
            Process::new(2, 2),
            Process::new(9, 1),
        ])
        .unwrap();
        let report = Sjf::new().schedule(&workload);
        assert_eq!(report.timeline.dispatch_order(), vec![9, 4, 2]);
    }

    #[test]
    fn test_sjf_does_not_reorder_workload() {
        let workload = Workload::new(vec![Process::new(1, 5), Process::new(2, 1)]).unwrap();
        let before = workload.clone();
        let _ = Sjf::new().schedule(&workload);
        assert_eq!(workload, before);
        assert_eq!(workload.processes()[0].id, 1);
    }
}
