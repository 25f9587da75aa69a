//! Engine output model.
//!
//! A [`ScheduleReport`] is everything one engine run produces: a title,
//! the timeline, one row per finished process and the run-level summary.

use serde::{Deserialize, Serialize};

use super::{Process, Timeline};

/// Timing results for one finished process.
///
/// Invariants: `turnaround = burst + wait` and
/// `completion = arrival + wait + burst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Process identifier.
    pub id: i64,
    /// Process priority.
    pub priority: i64,
    /// Burst duration.
    pub burst: i64,
    /// Arrival time.
    pub arrival: i64,
    /// Time spent eligible but not running.
    pub wait: i64,
    /// Completion minus arrival.
    pub turnaround: i64,
    /// Clock value at which the process finished.
    pub completion: i64,
    /// Response time (Round-Robin only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<i64>,
}

impl ScheduleRow {
    /// Builds a row for a process that waited `wait` ticks before running
    /// its whole burst.
    pub fn finished(process: &Process, wait: i64) -> Self {
        Self {
            id: process.id,
            priority: process.priority,
            burst: process.burst,
            arrival: process.arrival,
            wait,
            turnaround: process.burst + wait,
            completion: process.arrival + wait + process.burst,
            response: None,
        }
    }

    /// Sets the response time.
    pub fn with_response(mut self, response: i64) -> Self {
        self.response = Some(response);
        self
    }
}

/// Run-level averages.
///
/// Averages are integer sums divided once by the process count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of processes completed.
    pub process_count: usize,
    /// `sum(wait) / N`.
    pub average_wait: f64,
    /// `sum(turnaround) / N`.
    pub average_turnaround: f64,
    /// `sum(response) / N`, when the engine measures response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_response: Option<f64>,
    /// `N / last_completion`.
    pub throughput: f64,
    /// Clock value of the last completion.
    pub last_completion: i64,
}

/// Complete output of one engine run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Run label (e.g. "First-come, first-serve").
    pub title: String,
    /// Execution history in dispatch order.
    pub timeline: Timeline,
    /// Per-process results.
    pub rows: Vec<ScheduleRow>,
    /// Run-level summary.
    pub summary: RunSummary,
}

impl ScheduleReport {
    /// Finds the row for a process.
    pub fn row_for(&self, process_id: i64) -> Option<&ScheduleRow> {
        self.rows.iter().find(|r| r.id == process_id)
    }

    /// Whether every row satisfies the turnaround and completion identities.
    pub fn rows_consistent(&self) -> bool {
        self.rows.iter().all(|r| {
            r.wait >= 0
                && r.turnaround == r.burst + r.wait
                && r.completion == r.arrival + r.wait + r.burst
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finished_row() {
        let p = Process::new(2, 3).with_arrival(1).with_priority(4);
        let row = ScheduleRow::finished(&p, 5);

        assert_eq!(row.id, 2);
        assert_eq!(row.priority, 4);
        assert_eq!(row.wait, 5);
        assert_eq!(row.turnaround, 8);
        assert_eq!(row.completion, 9);
        assert_eq!(row.response, None);
    }

    #[test]
    fn test_row_response_skipped_when_absent() {
        let row = ScheduleRow::finished(&Process::new(1, 2), 0);
        let json = serde_json::to_string(&row).unwrap();
        assert!(!json.contains("response"));

        let json = serde_json::to_string(&row.with_response(3)).unwrap();
        assert!(json.contains("\"response\":3"));
    }

    #[test]
    fn test_rows_consistent() {
        let good = ScheduleRow::finished(&Process::new(1, 4), 2);
        let mut bad = good;
        bad.turnaround += 1;

        let report = ScheduleReport {
            title: "t".into(),
            timeline: Timeline::new(),
            rows: vec![good],
            summary: RunSummary {
                process_count: 1,
                average_wait: 2.0,
                average_turnaround: 6.0,
                average_response: None,
                throughput: 1.0 / 6.0,
                last_completion: 6,
            },
        };
        assert!(report.rows_consistent());
        assert_eq!(report.row_for(1), Some(&good));

        let report = ScheduleReport {
            rows: vec![bad],
            ..report
        };
        assert!(!report.rows_consistent());
    }
}
