//! Validated process batches.
//!
//! A [`Workload`] can only be built through validation, so every engine
//! can rely on its preconditions: at least one process, unique positive
//! IDs, positive bursts, non-negative arrivals and priorities, and a
//! latest arrival plus total burst that fits in an `i64` clock.
//!
//! # CSV Format
//!
//! One process per line, `id, burst, arrival[, priority]`:
//!
//! ```text
//! 1,5,0
//! 2,3,1,2
//! ```
//!
//! Blank lines are skipped. A missing priority loads as 0.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Process;
use crate::validation::{validate_processes, ValidationErrorKind};

/// An immutable, validated batch of processes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    processes: Vec<Process>,
}

impl Workload {
    /// Validates and wraps a process batch.
    ///
    /// # Errors
    /// [`Error::EmptyWorkload`] for an empty batch, otherwise
    /// [`Error::MalformedInput`] listing every violation found.
    pub fn new(processes: Vec<Process>) -> Result<Self> {
        if let Err(errors) = validate_processes(&processes) {
            if errors
                .iter()
                .any(|e| e.kind == ValidationErrorKind::EmptyWorkload)
            {
                return Err(Error::EmptyWorkload);
            }
            let message = errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(Error::malformed(message));
        }
        Ok(Self { processes })
    }

    /// Parses CSV records (`id, burst, arrival[, priority]`).
    pub fn parse_csv(input: &str) -> Result<Self> {
        let mut processes = Vec::new();

        for (idx, raw) in input.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if !(3..=4).contains(&fields.len()) {
                return Err(Error::malformed_at(
                    line_no,
                    format!("expected 3 or 4 fields, found {}", fields.len()),
                ));
            }

            let parse = |pos: usize, name: &str| -> Result<i64> {
                fields[pos].parse::<i64>().map_err(|e| {
                    Error::malformed_at(line_no, format!("{name} {:?}: {e}", fields[pos]))
                })
            };

            let mut process = Process::new(parse(0, "id")?, parse(1, "burst")?)
                .with_arrival(parse(2, "arrival")?);
            if fields.len() == 4 {
                process = process.with_priority(parse(3, "priority")?);
            }
            processes.push(process);
        }

        debug!(count = processes.len(), "parsed workload records");
        Self::new(processes)
    }

    /// Reads CSV records from any reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse_csv(&input)
    }

    /// Reads CSV records from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading workload");
        Self::from_reader(File::open(path)?)
    }

    /// Generates a deterministic random batch with ids `1..=count`.
    ///
    /// Arrivals are drawn from `0..=max_arrival`, bursts from
    /// `1..=max_burst` and priorities from `0..=max_priority`. The batch
    /// is returned in arrival order.
    pub fn random(
        seed: u64,
        count: usize,
        max_arrival: i64,
        max_burst: i64,
        max_priority: i64,
    ) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut processes: Vec<Process> = (1..=count as i64)
            .map(|id| {
                Process::new(id, rng.random_range(1..=max_burst.max(1)))
                    .with_arrival(rng.random_range(0..=max_arrival.max(0)))
                    .with_priority(rng.random_range(0..=max_priority.max(0)))
            })
            .collect();
        processes.sort_by_key(|p| p.arrival);
        Self::new(processes)
    }

    /// Processes in source order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Number of processes (always at least 1).
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the batch holds no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Private copy of the batch for an engine to reorder freely.
    pub(crate) fn to_vec(&self) -> Vec<Process> {
        self.processes.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let w = Workload::parse_csv("1,5,0\n2,3,1,2\n").unwrap();
        assert_eq!(w.len(), 2);
        assert_eq!(w.processes()[0], Process::new(1, 5));
        assert_eq!(
            w.processes()[1],
            Process::new(2, 3).with_arrival(1).with_priority(2)
        );
    }

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let w = Workload::parse_csv("\n 1 , 5 , 0 \n\n2,3,1\n").unwrap();
        assert_eq!(w.len(), 2);
        assert_eq!(w.processes()[0].burst, 5);
    }

    #[test]
    fn test_parse_non_integer_field() {
        let err = Workload::parse_csv("1,5,0\n2,x,1\n").unwrap_err();
        match err {
            Error::MalformedInput { line, message } => {
                assert_eq!(line, Some(2));
                assert!(message.contains("burst"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let err = Workload::parse_csv("1,5\n").unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: Some(1), .. }));

        let err = Workload::parse_csv("1,5,0,1,9\n").unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: Some(1), .. }));
    }

    #[test]
    fn test_parse_empty_input() {
        let err = Workload::parse_csv("\n\n").unwrap_err();
        assert!(matches!(err, Error::EmptyWorkload));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Workload::parse_csv("1,5,0\n1,3,0\n").unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: None, .. }));
    }

    #[test]
    fn test_non_positive_burst_rejected() {
        let err = Workload::new(vec![Process::new(1, 0)]).unwrap_err();
        assert!(err.to_string().contains("non-positive burst"));
    }

    #[test]
    fn test_clock_overflow_rejected() {
        let err = Workload::parse_csv("1,9223372036854775807,0\n2,1,0\n").unwrap_err();
        match err {
            Error::MalformedInput { line, message } => {
                assert_eq!(line, None);
                assert!(message.contains("overflows"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_reader() {
        let w = Workload::from_reader("3,2,4\n".as_bytes()).unwrap();
        assert_eq!(w.processes()[0].arrival, 4);
    }

    #[test]
    fn test_from_missing_path() {
        let err = Workload::from_path("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_random_is_deterministic() {
        let a = Workload::random(7, 20, 15, 8, 4).unwrap();
        let b = Workload::random(7, 20, 15, 8, 4).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
        assert!(a.processes().windows(2).all(|w| w[0].arrival <= w[1].arrival));
        assert!(a
            .processes()
            .iter()
            .all(|p| (1..=8).contains(&p.burst) && (0..=15).contains(&p.arrival)));
    }

    #[test]
    fn test_random_empty_count() {
        assert!(matches!(
            Workload::random(1, 0, 5, 5, 5),
            Err(Error::EmptyWorkload)
        ));
    }
}
