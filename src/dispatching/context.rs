//! Shared simulation state passed to every policy.
//!
//! The context owns the clock, the ready-set cursor and the timeline, and
//! holds exclusive access to the process arena for one run. Policies keep
//! their own queues of arena indices and call back into the context to
//! admit arrivals, idle, and run processes.

use tracing::{debug, trace};

use super::ReadySet;
use crate::models::{Process, Timeline};

/// Result of running one process for a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    /// Ticks actually consumed (≤ requested slice).
    pub ran: i64,
    /// Whether the process finished during this slice.
    pub completed: bool,
}

/// Runtime scheduling state for one simulation run.
#[derive(Debug)]
pub struct SchedulingContext<'a> {
    processes: &'a mut [Process],
    ready: ReadySet,
    timeline: Timeline,
    now: i64,
    completed: usize,
}

impl<'a> SchedulingContext<'a> {
    /// Starts a run at t=0, resetting every process's run state.
    pub fn new(processes: &'a mut [Process]) -> Self {
        for p in processes.iter_mut() {
            p.reset();
        }
        let ready = ReadySet::new(processes);
        Self {
            processes,
            ready,
            timeline: Timeline::new(),
            now: 0,
            completed: 0,
        }
    }

    /// Current simulation time.
    #[inline]
    pub fn now(&self) -> i64 {
        self.now
    }

    #[inline]
    pub fn process(&self, idx: usize) -> &Process {
        &self.processes[idx]
    }

    pub fn processes(&self) -> &[Process] {
        &*self.processes
    }

    /// Admission rank of a process (arrival, then id).
    #[inline]
    pub fn rank(&self, idx: usize) -> usize {
        self.ready.rank(idx)
    }

    /// Whether every process has completed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.completed == self.processes.len()
    }

    /// Admits arrivals up to the current time.
    pub fn admit(&mut self) -> Vec<usize> {
        let admitted = self.ready.admit(self.now);
        for &idx in &admitted {
            debug!(t = self.now, process = self.processes[idx].id(), "admitted");
        }
        admitted
    }

    /// Jumps the clock to the next arrival, recording the gap as idle.
    ///
    /// Returns `false` when no arrivals remain, in which case nothing changes.
    pub fn idle_until_next_arrival(&mut self) -> bool {
        let Some(next) = self.ready.next_arrival() else {
            return false;
        };
        if next > self.now {
            debug!(from = self.now, to = next, "cpu idle");
            self.timeline.record_idle(next - self.now);
            self.now = next;
        }
        true
    }

    /// Runs a process for up to `slice` ticks, finalizing it on completion.
    pub fn run(&mut self, idx: usize, slice: i64) -> Dispatch {
        let p = &mut self.processes[idx];
        debug_assert!(p.arrival_time() <= self.now, "{} run before arrival", p.id());
        debug_assert!(!p.is_complete(), "{} reselected after completion", p.id());

        let ran = p.consume(slice);
        self.timeline.record(p.id(), ran);
        self.now += ran;
        trace!(t = self.now, process = p.id(), ran, remaining = p.remaining_time(), "ran");

        let completed = p.is_complete();
        if completed {
            p.finalize(self.now);
            self.completed += 1;
            debug!(
                t = self.now,
                process = p.id(),
                turnaround = p.turnaround_time(),
                waiting = p.waiting_time(),
                "completed"
            );
        }
        Dispatch { ran, completed }
    }

    /// Applies one aging step to a process's priority.
    pub(crate) fn age(&mut self, idx: usize) {
        self.processes[idx].age();
    }

    pub(crate) fn add_vruntime(&mut self, idx: usize, delta: f64) {
        self.processes[idx].add_vruntime(delta);
    }

    /// Ends the run, returning the timeline and the makespan.
    pub fn finish(self) -> (Timeline, i64) {
        debug_assert!(self.is_finished());
        (self.timeline, self.now)
    }
}
