//! Non-preemptive priority scheduling with aging.
//!
//! At every selection point each waiting process loses one priority step
//! (value − 1, floor 0) per `aging_interval` ticks waited since arrival.
//! The lowest value runs to completion.

use tracing::debug;

use crate::dispatching::{rules, select_best, SchedulingContext};

/// Runs the workload by aged priority.
pub fn schedule(ctx: &mut SchedulingContext<'_>, aging_interval: i64) {
    let mut ready: Vec<usize> = Vec::new();
    // Aging steps already applied per process.
    let mut aged = vec![0i64; ctx.processes().len()];

    while !ctx.is_finished() {
        ready.extend(ctx.admit());
        if ready.is_empty() {
            if !ctx.idle_until_next_arrival() {
                break;
            }
            continue;
        }

        for &idx in &ready {
            let waited = ctx.now() - ctx.process(idx).arrival_time();
            let due = waited / aging_interval;
            let before = aged[idx];
            while aged[idx] < due {
                ctx.age(idx);
                aged[idx] += 1;
            }
            if aged[idx] > before {
                debug!(
                    process = ctx.process(idx).id(),
                    waited,
                    priority = ctx.process(idx).priority(),
                    "aged"
                );
            }
        }

        let Some(pos) = select_best(&rules::HighestPriority, &ready, ctx) else {
            break;
        };
        let idx = ready.swap_remove(pos);
        let burst = ctx.process(idx).remaining_time();
        ctx.run(idx, burst);
    }
}
