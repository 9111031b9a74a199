//! Process model.
//!
//! A process is a unit of CPU demand in the simulated workload. Its identity
//! (`id`, `arrival_time`, `burst_time`) is fixed at load time; the remaining
//! fields are run state mutated by the active policy.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::Serialize;

/// A simulated process.
///
/// Identity fields are read through accessors so policies cannot rewrite
/// them. Run state (`remaining_time`, `priority`, `vruntime`) is mutated
/// through crate-internal methods only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Process {
    id: String,
    arrival_time: i64,
    burst_time: i64,
    /// Scheduling priority (lower = more urgent). Mutable under aging.
    priority: i32,
    /// Explicit deadline. `None` = derive as arrival + 2 × burst.
    deadline: Option<i64>,
    remaining_time: i64,
    completion_time: Option<i64>,
    waiting_time: i64,
    turnaround_time: i64,
    /// Weight-scaled virtual runtime (CFS only).
    vruntime: f64,
}

impl Process {
    /// Creates a process with the given identity and priority.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64, priority: i32) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority,
            deadline: None,
            remaining_time: burst_time,
            completion_time: None,
            waiting_time: 0,
            turnaround_time: 0,
            vruntime: 0.0,
        }
    }

    /// Sets an explicit deadline. A value of `0` means "derive".
    pub fn with_deadline(mut self, deadline: i64) -> Self {
        self.deadline = (deadline != 0).then_some(deadline);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn arrival_time(&self) -> i64 {
        self.arrival_time
    }

    pub fn burst_time(&self) -> i64 {
        self.burst_time
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The explicitly configured deadline, if any.
    pub fn deadline(&self) -> Option<i64> {
        self.deadline
    }

    /// Deadline used by EDF: the explicit one, else arrival + 2 × burst.
    pub fn effective_deadline(&self) -> i64 {
        let derived = self.arrival_time.saturating_add(self.burst_time.saturating_mul(2));
        self.deadline.unwrap_or(derived)
    }

    pub fn remaining_time(&self) -> i64 {
        self.remaining_time
    }

    /// Absolute time at which the process finished, once finalized.
    pub fn completion_time(&self) -> Option<i64> {
        self.completion_time
    }

    /// completion − arrival. Zero until finalized.
    pub fn turnaround_time(&self) -> i64 {
        self.turnaround_time
    }

    /// turnaround − burst. Zero until finalized.
    pub fn waiting_time(&self) -> i64 {
        self.waiting_time
    }

    pub fn vruntime(&self) -> f64 {
        self.vruntime
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Whether the process finished after its effective deadline.
    pub fn missed_deadline(&self) -> bool {
        self.completion_time.is_some_and(|c| c > self.effective_deadline())
    }

    /// Restores run state so the same record can be simulated again.
    pub(crate) fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.completion_time = None;
        self.waiting_time = 0;
        self.turnaround_time = 0;
        self.vruntime = 0.0;
    }

    /// Consumes up to `ticks` of CPU time and returns how much was used.
    pub(crate) fn consume(&mut self, ticks: i64) -> i64 {
        let used = ticks.min(self.remaining_time).max(0);
        self.remaining_time -= used;
        used
    }

    /// Records completion and derives turnaround and waiting time.
    pub(crate) fn finalize(&mut self, now: i64) {
        debug_assert!(self.is_complete());
        debug_assert!(self.completion_time.is_none());
        self.completion_time = Some(now);
        self.turnaround_time = now - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }

    /// Lowers the priority value by one, never below zero.
    pub(crate) fn age(&mut self) {
        if self.priority > 0 {
            self.priority -= 1;
        }
    }

    pub(crate) fn add_vruntime(&mut self, delta: f64) {
        self.vruntime += delta;
    }
}
