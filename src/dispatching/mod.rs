//! Shared dispatch machinery for every policy.
//!
//! Provides the ready-set admission cursor, the per-run scheduling context
//! (clock, timeline, finalization), and key-based selection rules.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, select_best, SchedulingContext};
//! use u_cpusched::models::Process;
//!
//! let mut procs = vec![Process::new("P1", 0, 8, 2), Process::new("P2", 0, 4, 1)];
//! let mut ctx = SchedulingContext::new(&mut procs);
//! let ready = ctx.admit();
//! let pos = select_best(&rules::ShortestBurst, &ready, &ctx).unwrap();
//! assert_eq!(ctx.process(ready[pos]).id(), "P2");
//! ```

mod context;
mod engine;
mod ready;
pub mod rules;

pub use context::{Dispatch, SchedulingContext};
pub use engine::{compare, select_best};
pub use ready::ReadySet;

use crate::models::Process;
use std::fmt::Debug;

/// A key-based rule for choosing the next process.
///
/// # Key Convention
/// **Lower key = runs first.** Equal keys fall back to admission rank
/// (arrival time, then identifier).
pub trait SelectionRule: Debug {
    /// Rule name (e.g., "SJF", "EDF").
    fn name(&self) -> &'static str;

    /// Ordering key for a process.
    fn key(&self, process: &Process) -> i64;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
