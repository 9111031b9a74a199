//! Three-level Multilevel Feedback Queue.
//!
//! Arrivals enter level 0. A process that uses its whole quantum drops one
//! level (floor 2); one preempted early keeps its level. Levels below 0 run
//! tick by tick and yield as soon as level 0 has work. A process that has
//! waited `promotion_wait` ticks since its last enqueue is moved up one
//! level instead of being dispatched.

use std::collections::VecDeque;

use tracing::debug;

use crate::dispatching::SchedulingContext;

const LEVELS: usize = 3;

#[derive(Debug)]
struct FeedbackQueues {
    queues: [VecDeque<usize>; LEVELS],
    /// Time of each process's last (re)enqueue.
    enqueued_at: Vec<i64>,
}

impl FeedbackQueues {
    fn new(len: usize) -> Self {
        Self {
            queues: Default::default(),
            enqueued_at: vec![0; len],
        }
    }

    fn enqueue(&mut self, idx: usize, level: usize, now: i64) {
        let level = level.min(LEVELS - 1);
        self.queues[level].push_back(idx);
        self.enqueued_at[idx] = now;
    }

    fn admit(&mut self, ctx: &mut SchedulingContext<'_>) {
        let now = ctx.now();
        for idx in ctx.admit() {
            self.enqueue(idx, 0, now);
        }
    }

    /// Pops the head of the highest non-empty level.
    fn pop(&mut self) -> Option<(usize, usize)> {
        self.queues
            .iter_mut()
            .enumerate()
            .find_map(|(level, q)| q.pop_front().map(|idx| (level, idx)))
    }
}

/// Runs the workload on three feedback levels.
pub fn schedule(ctx: &mut SchedulingContext<'_>, quanta: [i64; LEVELS], promotion_wait: i64) {
    let mut mq = FeedbackQueues::new(ctx.processes().len());

    while !ctx.is_finished() {
        mq.admit(ctx);
        let Some((level, idx)) = mq.pop() else {
            if !ctx.idle_until_next_arrival() {
                break;
            }
            continue;
        };

        if level > 0 && ctx.now() - mq.enqueued_at[idx] >= promotion_wait {
            debug!(t = ctx.now(), process = ctx.process(idx).id(), to = level - 1, "promoted");
            mq.enqueue(idx, level - 1, ctx.now());
            continue;
        }

        let quantum = quanta[level];
        let mut ran = 0;
        let mut completed = false;
        while ran < quantum {
            let dispatch = ctx.run(idx, 1);
            ran += dispatch.ran;
            mq.admit(ctx);
            if dispatch.completed {
                completed = true;
                break;
            }
            if level > 0 && !mq.queues[0].is_empty() {
                break;
            }
        }

        if !completed {
            let next = if ran == quantum { level + 1 } else { level };
            if next != level && next < LEVELS {
                debug!(t = ctx.now(), process = ctx.process(idx).id(), to = next, "demoted");
            }
            mq.enqueue(idx, next, ctx.now());
        }
    }
}
