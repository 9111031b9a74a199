//! First-Come, First-Served.
//!
//! Non-preemptive: processes run to completion in admission order.

use std::collections::VecDeque;

use crate::dispatching::SchedulingContext;

/// Runs the workload in arrival order.
pub fn schedule(ctx: &mut SchedulingContext<'_>) {
    let mut queue: VecDeque<usize> = VecDeque::new();

    while !ctx.is_finished() {
        queue.extend(ctx.admit());
        let Some(idx) = queue.pop_front() else {
            if !ctx.idle_until_next_arrival() {
                break;
            }
            continue;
        };
        let burst = ctx.process(idx).remaining_time();
        ctx.run(idx, burst);
    }
}
