//! Input validation for workloads.
//!
//! Checks structural integrity of a process list before simulation.
//! Detects:
//! - Empty workloads
//! - Duplicate IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Negative deadlines
//! - Times beyond [`MAX_TIME`], or a horizon that overflows the clock

use std::collections::HashSet;

use crate::error::SimError;
use crate::models::Process;

/// Largest accepted arrival, burst or deadline, in ticks.
pub const MAX_TIME: i64 = i32::MAX as i64;

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
    /// The workload has no processes.
    EmptyWorkload,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process demands no CPU time.
    NonPositiveBurst,
    /// A process has an explicit deadline before t=0.
    NegativeDeadline,
    /// A time exceeds [`MAX_TIME`], or the workload cannot finish within
    /// the clock's range.
    OutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a workload.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. Arrival time ≥ 0
/// 4. Burst time > 0
/// 5. Explicit deadline ≥ 0
/// 6. Arrival, burst and deadline ≤ [`MAX_TIME`]; latest arrival plus
///    total burst fits the clock
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "No processes loaded",
        ));
    }
    check_processes(processes, &mut errors);
    into_result(errors)
}

/// Validates every process without requiring a non-empty workload.
///
/// Runs checks 2–6 of [`validate_workload`].
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    check_processes(processes, &mut errors);
    into_result(errors)
}

/// Joins validation failures into one workload error.
pub fn workload_error(errors: Vec<ValidationError>) -> SimError {
    let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
    SimError::workload(messages.join("; "))
}

fn check_processes(processes: &[Process], errors: &mut Vec<ValidationError>) {
    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id()),
            ));
        }

        if p.arrival_time() < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' arrives at {}", p.id(), p.arrival_time()),
            ));
        }

        if p.burst_time() <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has burst time {}", p.id(), p.burst_time()),
            ));
        }

        if let Some(deadline) = p.deadline().filter(|&d| d < 0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeDeadline,
                format!("Process '{}' has deadline {deadline}", p.id()),
            ));
        }

        let times = [
            ("arrival time", Some(p.arrival_time())),
            ("burst time", Some(p.burst_time())),
            ("deadline", p.deadline()),
        ];
        for (name, value) in times {
            if let Some(value) = value.filter(|&v| v > MAX_TIME) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OutOfRange,
                    format!("Process '{}' {name} {value} exceeds {MAX_TIME}", p.id()),
                ));
            }
        }
    }

    let latest_arrival = processes.iter().map(|p| p.arrival_time().max(0)).max().unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time().max(0)));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            "Latest arrival plus total burst time overflows the clock",
        ));
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::sample_workload;

    #[test]
    fn test_valid_input() {
        assert!(validate_workload(&sample_workload()).is_ok());
    }

    #[test]
    fn test_empty_workload() {
        let errors = validate_workload(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyWorkload);
    }

    #[test]
    fn test_duplicate_id() {
        let procs = vec![Process::new("P1", 0, 1, 0), Process::new("P1", 2, 3, 0)];
        let errors = validate_workload(&procs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("P1")));
    }

    #[test]
    fn test_bad_times() {
        let procs = vec![
            Process::new("neg", -1, 2, 0),
            Process::new("zero", 0, 0, 0),
            Process::new("late", 0, 2, 0).with_deadline(-5),
        ];
        let errors = validate_workload(&procs).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::NegativeArrival,
                ValidationErrorKind::NonPositiveBurst,
                ValidationErrorKind::NegativeDeadline,
            ]
        );
    }

    #[test]
    fn test_oversized_burst_rejected() {
        let procs = vec![Process::new("P1", 0, 5_000_000_000_000_000_000, 1)];
        let errors = validate_workload(&procs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::OutOfRange && e.message.contains("burst")));
    }

    #[test]
    fn test_horizon_overflow_rejected() {
        let half = i64::MAX / 2 + 1;
        let procs = vec![Process::new("A", 0, half, 0), Process::new("B", 0, half, 0)];
        let errors = validate_workload(&procs).unwrap_err();
        assert!(errors.iter().any(|e| e.message.contains("overflows")));
    }

    #[test]
    fn test_time_limits_are_inclusive() {
        let procs = vec![Process::new("edge", MAX_TIME, MAX_TIME, 0).with_deadline(MAX_TIME)];
        assert!(validate_workload(&procs).is_ok());

        let late = vec![Process::new("late", MAX_TIME + 1, 1, 0)];
        let errors = validate_workload(&late).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::OutOfRange);
    }

    #[test]
    fn test_validate_processes_allows_empty() {
        assert!(validate_processes(&[]).is_ok());
        let bad = [Process::new("neg", 0, -3, 0)];
        let errors = validate_processes(&bad).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
    }

    #[test]
    fn test_workload_error_joins_messages() {
        let procs = vec![Process::new("A", 0, 0, 0), Process::new("A", 0, 1, 0)];
        let err = workload_error(validate_workload(&procs).unwrap_err());
        assert!(err.is_workload());
        assert!(err.to_string().contains("; "));
    }

    #[test]
    fn test_single_process_is_valid() {
        assert!(validate_workload(&[Process::new("solo", 0, 1, 0)]).is_ok());
    }
}
