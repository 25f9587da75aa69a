//! Input validation for process batches.
//!
//! Checks structural integrity of a workload before any engine runs.
//! Detects:
//! - Empty batches
//! - Duplicate or non-positive process IDs
//! - Negative arrival times or priorities
//! - Non-positive burst durations
//! - Batches whose total run would overflow the clock
//!
//! Process IDs need not be dense (1..N): engines key their results by ID,
//! so only uniqueness matters.

use crate::models::Process;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The batch contains no processes.
    EmptyWorkload,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process ID is zero or negative.
    InvalidId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs no CPU time (or negative time).
    NonPositiveBurst,
    /// A process has a negative priority.
    NegativePriority,
    /// The latest arrival plus all bursts does not fit in an `i64` clock.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process batch.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. All IDs are positive
/// 4. All arrivals are non-negative
/// 5. All bursts are positive
/// 6. All priorities are non-negative
/// 7. The latest arrival plus the sum of all bursts fits in `i64`, which
///    bounds every clock value an engine can reach
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "Workload contains no processes",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.id <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                format!("Process ID must be positive, got {}", p.id),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival {}", p.id, p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst {}", p.id, p.burst),
            ));
        }

        if p.priority < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePriority,
                format!("Process {} has negative priority {}", p.id, p.priority),
            ));
        }
    }

    let horizon = processes
        .iter()
        .try_fold(0i64, |total, p| total.checked_add(p.burst.max(0)))
        .and_then(|total| {
            let latest = processes.iter().map(|p| p.arrival.max(0)).max()?;
            total.checked_add(latest)
        });
    if horizon.is_none() && !processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst overflows the clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
