//! Simplified Completely Fair Scheduler.
//!
//! The runnable set is a min-heap on virtual runtime. Each dispatch runs
//! `min(base_slice, remaining)` ticks and charges `ran / weight` virtual
//! time, where `weight = 1 / max(1, priority)`. New arrivals start at zero
//! virtual runtime.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use crate::dispatching::SchedulingContext;

/// Heap key: virtual runtime, then admission rank.
type Entry = Reverse<(OrderedFloat<f64>, usize, usize)>;

/// Scheduling weight of a process.
pub fn weight(priority: i32) -> f64 {
    1.0 / f64::from(priority.max(1))
}

fn enqueue(tree: &mut BinaryHeap<Entry>, ctx: &SchedulingContext<'_>, idx: usize) {
    let vruntime = OrderedFloat(ctx.process(idx).vruntime());
    tree.push(Reverse((vruntime, ctx.rank(idx), idx)));
}

/// Runs the workload by least virtual runtime.
pub fn schedule(ctx: &mut SchedulingContext<'_>, base_slice: i64) {
    let mut tree: BinaryHeap<Entry> = BinaryHeap::new();

    while !ctx.is_finished() {
        for idx in ctx.admit() {
            enqueue(&mut tree, ctx, idx);
        }
        let Some(Reverse((_, _, idx))) = tree.pop() else {
            if !ctx.idle_until_next_arrival() {
                break;
            }
            continue;
        };

        let dispatch = ctx.run(idx, base_slice);
        let w = weight(ctx.process(idx).priority());
        ctx.add_vruntime(idx, dispatch.ran as f64 / w);

        for new in ctx.admit() {
            enqueue(&mut tree, ctx, new);
        }
        if !dispatch.completed {
            enqueue(&mut tree, ctx, idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, Segment};
    use crate::policies::test_support::{sample_workload, simulate};
    use crate::policies::PolicyKind;

    #[test]
    fn test_weight() {
        assert_eq!(weight(0), 1.0);
        assert_eq!(weight(1), 1.0);
        assert_eq!(weight(4), 0.25);
    }

    #[test]
    fn test_cfs_sample() {
        let (procs, timeline, total) = simulate(PolicyKind::Cfs, sample_workload());
        assert_eq!(total, 26);
        assert_eq!(
            &timeline.segments()[..4],
            &[
                Segment::new("P1", 2),
                Segment::new("P2", 2),
                Segment::new("P3", 2),
                Segment::new("P4", 2),
            ]
        );
        let completions: Vec<i64> = procs.iter().filter_map(|p| p.completion_time()).collect();
        assert_eq!(completions, vec![20, 10, 26, 23]);
        // Charged ran × max(1, priority).
        assert_eq!(procs[1].vruntime(), 4.0);
        assert_eq!(procs[0].vruntime(), 16.0);
    }

    #[test]
    fn test_cfs_heavier_weight_gets_more_cpu() {
        let procs = vec![Process::new("light", 0, 6, 3), Process::new("heavy", 0, 6, 1)];
        let (procs, _, _) = simulate(PolicyKind::Cfs, procs);
        assert!(procs[1].completion_time() < procs[0].completion_time());
    }
}
