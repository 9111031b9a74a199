//! Shortest Job First (non-preemptive).
//!
//! Selects the eligible process with the smallest burst time and runs it
//! to completion. Selection happens only at completions.

use crate::dispatching::{rules, select_best, SchedulingContext};

/// Runs the workload shortest-burst first.
pub fn schedule(ctx: &mut SchedulingContext<'_>) {
    let mut ready: Vec<usize> = Vec::new();

    while !ctx.is_finished() {
        ready.extend(ctx.admit());
        let Some(pos) = select_best(&rules::ShortestBurst, &ready, ctx) else {
            if !ctx.idle_until_next_arrival() {
                break;
            }
            continue;
        };
        let idx = ready.swap_remove(pos);
        let burst = ctx.process(idx).remaining_time();
        ctx.run(idx, burst);
    }
}
