//! Built-in selection rules.
//!
//! # Score Convention
//! All rules return lower keys for processes that should run first. Ties
//! are resolved by [`select_best`](super::select_best) using admission rank.

use super::SelectionRule;
use crate::models::Process;

/// Shortest Job First: total burst time.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, process: &Process) -> i64 {
        process.burst_time()
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time First.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn key(&self, process: &Process) -> i64 {
        process.remaining_time()
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Lowest priority value (most urgent) first.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process) -> i64 {
        i64::from(process.priority())
    }

    fn description(&self) -> &'static str {
        "Highest Priority (lowest value)"
    }
}

/// Earliest effective deadline first.
#[derive(Debug, Clone, Copy)]
pub struct EarliestDeadline;

impl SelectionRule for EarliestDeadline {
    fn name(&self) -> &'static str {
        "EDF"
    }

    fn key(&self, process: &Process) -> i64 {
        process.effective_deadline()
    }

    fn description(&self) -> &'static str {
        "Earliest Deadline First"
    }
}
