//! Rule-driven selection over a candidate list.
//!
//! Applies a [`SelectionRule`] and resolves ties by admission rank, which
//! orders by arrival time and then by identifier.

use std::cmp::Ordering;

use super::{SchedulingContext, SelectionRule};

/// Compares two processes under `rule`, falling back to admission rank.
pub fn compare<R: SelectionRule + ?Sized>(
    rule: &R,
    a: usize,
    b: usize,
    ctx: &SchedulingContext<'_>,
) -> Ordering {
    rule.key(ctx.process(a))
        .cmp(&rule.key(ctx.process(b)))
        .then_with(|| ctx.rank(a).cmp(&ctx.rank(b)))
}

/// Returns the position in `candidates` of the process that should run next.
pub fn select_best<R: SelectionRule + ?Sized>(
    rule: &R,
    candidates: &[usize],
    ctx: &SchedulingContext<'_>,
) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .min_by(|&(_, &a), &(_, &b)| compare(rule, a, b, ctx))
        .map(|(pos, _)| pos)
}
