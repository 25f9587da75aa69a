//! Dispatching rules, rule engine and ready queue.
//!
//! Provides the ordering primitives the engines share: scoring rules
//! (FIFO, SPT, lowest priority value), a composable rule engine for
//! multi-key sorting, and a min-score ready queue.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{rules, RuleEngine};
//! use cpu_schedule::models::Process;
//!
//! // Shortest-job-first order: arrival, then burst.
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Fifo)
//!     .with_tie_breaker(rules::Spt);
//!
//! let mut batch = vec![Process::new(1, 5), Process::new(2, 3), Process::new(3, 2)];
//! engine.sort(&mut batch);
//! assert_eq!(batch.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3, 2, 1]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
mod ready_queue;
pub mod rules;

pub use engine::RuleEngine;
pub use ready_queue::ReadyQueue;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A dispatching rule that scores a process.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Scores a process; lower runs first.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
