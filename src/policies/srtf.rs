//! Shortest Remaining Time First.
//!
//! Preemptive at one-tick granularity: every tick the eligible process with
//! the least remaining time runs. Consecutive ticks of the same process
//! merge into one timeline segment.

use crate::dispatching::{rules, select_best, SchedulingContext};

/// Runs the workload shortest-remaining first.
pub fn schedule(ctx: &mut SchedulingContext<'_>) {
    let mut ready: Vec<usize> = Vec::new();

    while !ctx.is_finished() {
        ready.extend(ctx.admit());
        let Some(pos) = select_best(&rules::ShortestRemaining, &ready, ctx) else {
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
