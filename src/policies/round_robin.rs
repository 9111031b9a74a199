//! Round Robin.
//!
//! FIFO ring with a fixed quantum. Arrivals during a slice are admitted
//! before the preempted process is requeued, so they run first.

use std::collections::VecDeque;

use crate::dispatching::SchedulingContext;

/// Runs the workload round-robin with the given quantum.
pub fn schedule(ctx: &mut SchedulingContext<'_>, quantum: i64) {
    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.extend(ctx.admit());

    while !ctx.is_finished() {
        let Some(idx) = queue.pop_front() else {
            if !ctx.idle_until_next_arrival() {
                break;
            }
            queue.extend(ctx.admit());
            continue;
        };
        let dispatch = ctx.run(idx, quantum);
        queue.extend(ctx.admit());
        if !dispatch.completed {
            queue.push_back(idx);
        }
    }
}
