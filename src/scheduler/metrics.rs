//! Run-level metric aggregation.
//!
//! Accumulates per-process results and derives the run summary.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average wait | sum(wait) / N |
//! | Average turnaround | sum(completion - arrival) / N |
//! | Average response | sum(response) / N (engines that measure it) |
//! | Throughput | N / last completion |
//!
//! Sums are kept as `i128` and divided once, so averages are exact up
//! to a single floating-point rounding and never overflow.

use crate::models::{RunSummary, ScheduleRow};

/// Accumulator for wait/turnaround/response sums.
#[derive(Debug, Clone, Default)]
pub struct MetricAggregator {
    count: usize,
    total_wait: i128,
    total_turnaround: i128,
    total_response: i128,
    response_count: usize,
    last_completion: i64,
}

impl MetricAggregator {
    /// Creates an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one finished process.
    pub fn record(&mut self, row: &ScheduleRow) {
        self.count += 1;
        self.total_wait += i128::from(row.wait);
        self.total_turnaround += i128::from(row.turnaround);
        if let Some(response) = row.response {
            self.total_response += i128::from(response);
            self.response_count += 1;
        }
        self.last_completion = self.last_completion.max(row.completion);
    }

    /// Number of processes recorded so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Latest completion recorded so far.
    pub fn last_completion(&self) -> i64 {
        self.last_completion
    }

    /// Derives the run summary.
    ///
    /// An aggregator with nothing recorded yields zero averages and zero
    /// throughput rather than dividing by zero.
    pub fn summary(&self) -> RunSummary {
        let n = self.count as f64;
        let average = |total: i128| if self.count == 0 { 0.0 } else { total as f64 / n };

        let average_response = if self.response_count == 0 {
            None
        } else {
            Some(self.total_response as f64 / self.response_count as f64)
        };

        let throughput = if self.last_completion <= 0 {
            0.0
        } else {
            n / self.last_completion as f64
        };

        RunSummary {
            process_count: self.count,
            average_wait: average(self.total_wait),
            average_turnaround: average(self.total_turnaround),
            average_response,
            throughput,
            last_completion: self.last_completion,
        }
    }
}

impl<'a> FromIterator<&'a ScheduleRow> for MetricAggregator {
    fn from_iter<I: IntoIterator<Item = &'a ScheduleRow>>(iter: I) -> Self {
        let mut agg = Self::new();
        for row in iter {
            agg.record(row);
        }
        agg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    #[test]
    fn test_summary_basic() {
        // Bursts 5, 3, 2 back to back from t=0
        let rows = [
            ScheduleRow::finished(&Process::new(1, 5), 0),
            ScheduleRow::finished(&Process::new(2, 3), 5),
            ScheduleRow::finished(&Process::new(3, 2), 8),
        ];
        let summary = rows.iter().collect::<MetricAggregator>().summary();

        assert_eq!(summary.process_count, 3);
        assert_eq!(summary.last_completion, 10);
        assert!((summary.average_wait - 13.0 / 3.0).abs() < 1e-12);
        assert!((summary.average_turnaround - 23.0 / 3.0).abs() < 1e-12);
        assert!((summary.throughput - 0.3).abs() < 1e-12);
        assert!(summary.average_response.is_none());
    }

    #[test]
    fn test_summary_with_response() {
        let rows = [
            ScheduleRow::finished(&Process::new(1, 4), 2).with_response(4),
            ScheduleRow::finished(&Process::new(2, 2), 2).with_response(2),
        ];
        let summary = rows.iter().collect::<MetricAggregator>().summary();
        assert_eq!(summary.average_response, Some(3.0));
    }

    #[test]
    fn test_last_completion_is_max_not_last() {
        let mut agg = MetricAggregator::new();
        agg.record(&ScheduleRow::finished(&Process::new(1, 9), 0));
        agg.record(&ScheduleRow::finished(&Process::new(2, 1), 0));
        assert_eq!(agg.count(), 2);
        assert_eq!(agg.last_completion(), 9);
    }

    #[test]
    fn test_sums_past_i64_range() {
        let rows = [
            ScheduleRow::finished(&Process::new(1, 1), i64::MAX - 1),
            ScheduleRow::finished(&Process::new(2, 1), i64::MAX - 1),
        ];
        let summary = rows.iter().collect::<MetricAggregator>().summary();
        assert_eq!(summary.average_wait, (i64::MAX - 1) as f64);
        assert_eq!(summary.average_turnaround, i64::MAX as f64);
    }

    #[test]
    fn test_empty_summary() {
        let summary = MetricAggregator::new().summary();
        assert_eq!(summary.process_count, 0);
        assert_eq!(summary.average_wait, 0.0);
        assert_eq!(summary.throughput, 0.0);
        assert_eq!(summary.last_completion, 0);
    }
}
