//! Earliest Deadline First.
//!
//! Preemptive at one-tick granularity. Deadlines default to
//! arrival + 2 × burst. No feasibility check is made: a missed deadline only
//! shows up as a completion past the deadline.

use crate::dispatching::{rules, select_best, SchedulingContext};

/// Runs the workload earliest-deadline first.
pub fn schedule(ctx: &mut SchedulingContext<'_>) {
    let mut ready: Vec<usize> = Vec::new();

    while !ctx.is_finished() {
        ready.extend(ctx.admit());
        let Some(pos) = select_best(&rules::EarliestDeadline, &ready, ctx) else {
            if !ctx.idle_until_next_arrival() {
                break;
            }
            continue;
        };
        if ctx.run(ready[pos], 1).completed {
            ready.swap_remove(pos);
        }
    }
}
