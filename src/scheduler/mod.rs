//! CPU scheduling engines.
//!
//! Four classical disciplines over a fixed batch of processes:
//!
//! | Engine | Selection | Preemptive |
//! |--------|-----------|------------|
//! | [`Fcfs`] | arrival order | no |
//! | [`Sjf`] | arrival, then shortest burst (static sort) | no |
//! | [`PrioritySjf`] | lowest priority value among arrived processes | no |
//! | [`RoundRobin`] | FIFO ready queue, fixed quantum | at quantum expiry |
//!
//! Every engine works on a private copy of the workload and owns its
//! clock, so engines can run in any order (or in parallel) against the
//! same [`Workload`] and produce identical results.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod metrics;
mod priority;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use metrics::MetricAggregator;
pub use priority::PrioritySjf;
pub use round_robin::{ResponseTime, RoundRobin, DEFAULT_QUANTUM};
pub use sjf::Sjf;

use std::fmt::Debug;
use std::str::FromStr;

use tracing::info;

use crate::error::Error;
use crate::models::{ScheduleReport, ScheduleRow, Timeline};
use crate::workload::Workload;

/// A scheduling discipline.
///
/// Implementations are pure: the same workload always yields the same
/// report, and the workload itself is never modified.
pub trait Scheduler: Send + Sync + Debug {
    /// Label used as the report title.
    fn title(&self) -> &str;

    /// Simulates the workload to completion.
    fn schedule(&self, workload: &Workload) -> ScheduleReport;
}

/// Identifies one of the built-in engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// First-come, first-served.
    Fcfs,
    /// Non-preemptive shortest job first.
    Sjf,
    /// Priority selection with dynamic admission.
    Priority,
    /// Round-robin.
    RoundRobin,
}

impl EngineKind {
    /// All engines, in reporting order.
    pub const ALL: [EngineKind; 4] = [
        EngineKind::Fcfs,
        EngineKind::Sjf,
        EngineKind::Priority,
        EngineKind::RoundRobin,
    ];

    /// Instantiates the engine; `round_robin` supplies the RR settings.
    pub fn build(self, round_robin: &RoundRobin) -> Box<dyn Scheduler> {
        match self {
            EngineKind::Fcfs => Box::new(Fcfs::new()),
            EngineKind::Sjf => Box::new(Sjf::new()),
            EngineKind::Priority => Box::new(PrioritySjf::new()),
            EngineKind::RoundRobin => Box::new(round_robin.clone()),
        }
    }
}

impl FromStr for EngineKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fcfs" => Ok(EngineKind::Fcfs),
            "sjf" => Ok(EngineKind::Sjf),
            "priority" => Ok(EngineKind::Priority),
            "rr" | "round-robin" => Ok(EngineKind::RoundRobin),
            other => Err(Error::invalid_args(format!("unknown engine '{other}'"))),
        }
    }
}

/// The four engines with default settings, in reporting order.
pub fn default_engines() -> Vec<Box<dyn Scheduler>> {
    let rr = RoundRobin::new();
    EngineKind::ALL.iter().map(|k| k.build(&rr)).collect()
}

/// Runs each engine against the workload, in order.
pub fn run_all(workload: &Workload, engines: &[Box<dyn Scheduler>]) -> Vec<ScheduleReport> {
    engines.iter().map(|e| e.schedule(workload)).collect()
}

/// Assembles a report and logs its summary.
pub(crate) fn finish_report(title: &str, timeline: Timeline, rows: Vec<ScheduleRow>) -> ScheduleReport {
    let summary = rows.iter().collect::<MetricAggregator>().summary();
    debug_assert_eq!(timeline.last_stop(), Some(summary.last_completion));

    info!(
        engine = title,
        processes = summary.process_count,
        avg_wait = summary.average_wait,
        avg_turnaround = summary.average_turnaround,
        throughput = summary.throughput,
        "schedule complete"
    );

    ScheduleReport {
        title: title.to_string(),
        timeline,
        rows,
        summary,
    }
}
