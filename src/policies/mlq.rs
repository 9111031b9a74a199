//! Two-level Multilevel Queue.
//!
//! Processes are routed once, at admission, by priority: below the cutoff
//! into the high queue (Round Robin), otherwise into the low queue (FCFS).
//! The high queue has absolute precedence; a low-queue process is checked
//! for preemption after every tick and, when preempted, rejoins the tail of
//! the low queue.

use std::collections::VecDeque;

use tracing::debug;

use crate::dispatching::SchedulingContext;

#[derive(Debug, Default)]
struct Queues {
    high: VecDeque<usize>,
    low: VecDeque<usize>,
}

impl Queues {
    fn route(&mut self, ctx: &mut SchedulingContext<'_>, high_below: i32) {
        for idx in ctx.admit() {
            if ctx.process(idx).priority() < high_below {
                self.high.push_back(idx);
            } else {
                self.low.push_back(idx);
            }
        }
    }
}

/// Runs the workload on a high RR queue over a low FCFS queue.
pub fn schedule(ctx: &mut SchedulingContext<'_>, quantum: i64, high_below: i32) {
    let mut queues = Queues::default();

    while !ctx.is_finished() {
        queues.route(ctx, high_below);

        if let Some(idx) = queues.high.pop_front() {
            let dispatch = ctx.run(idx, quantum);
            queues.route(ctx, high_below);
            if !dispatch.completed {
                queues.high.push_back(idx);
            }
            continue;
        }

        if let Some(idx) = queues.low.pop_front() {
            loop {
                if ctx.run(idx, 1).completed {
                    break;
                }
                queues.route(ctx, high_below);
                if !queues.high.is_empty() {
                    debug!(
                        t = ctx.now(),
                        process = ctx.process(idx).id(),
                        "preempted by high queue"
                    );
                    queues.low.push_back(idx);
                    break;
                }
            }
            continue;
        }

        if !ctx.idle_until_next_arrival() {
            break;
        }
    }
}
