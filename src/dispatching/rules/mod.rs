//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Arrival-based**: FIFO
//! - **Time-based**: SPT
//! - **Priority**: LOWEST_PRIORITY
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

// ======================== Arrival-based rules ========================

/// First In, First Out.
///
/// Prioritizes processes by arrival time. The basis of FCFS and the
/// admission order of every engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival
    }

    fn description(&self) -> &'static str {
        "First In, First Out"
    }
}

// ======================== Time-based rules ========================

/// Shortest Processing Time.
///
/// Prioritizes processes with shorter bursts. Minimizes average waiting
/// time among processes that are ready together.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

// ======================== Priority rules ========================

/// Lowest priority value first.
///
/// Priority 0 is the most urgent level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowestPriority;

impl DispatchingRule for LowestPriority {
    fn name(&self) -> &'static str {
        "LOWEST_PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.priority
    }

    fn description(&self) -> &'static str {
        "Lowest Priority Value"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_scores_arrival() {
        let p = Process::new(1, 5).with_arrival(7);
        assert_eq!(Fifo.evaluate(&p), 7);
    }

    #[test]
    fn test_spt_prefers_short_burst() {
        let short = Process::new(1, 2);
        let long = Process::new(2, 9);
        assert!(Spt.evaluate(&short) < Spt.evaluate(&long));
    }

    #[test]
    fn test_lowest_priority() {
        let urgent = Process::new(1, 4).with_priority(0);
        let relaxed = Process::new(2, 4).with_priority(3);
        assert!(LowestPriority.evaluate(&urgent) < LowestPriority.evaluate(&relaxed));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Fifo.name(), "FIFO");
        assert_eq!(Spt.description(), "Shortest Processing Time");
        assert_eq!(LowestPriority.name(), "LOWEST_PRIORITY");
    }
}
