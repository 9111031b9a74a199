//! Lottery scheduling.
//!
//! Each process holds `max(1, base / max(1, priority))` tickets, fixed at
//! load time. Every dispatch draws one ticket uniformly from the eligible
//! processes and runs the winner for up to one quantum. Outcomes depend on
//! the random source; a seeded source makes a run reproducible.

use rand::Rng;

use crate::dispatching::SchedulingContext;

/// Tickets held by a process of the given priority.
pub fn tickets_for(priority: i32, base_tickets: u32) -> u32 {
    let divisor = u32::try_from(priority.max(1)).unwrap_or(1);
    (base_tickets / divisor).max(1)
}

/// Draws a winner, returning its position in `eligible`.
///
/// `tickets` is indexed by process index. Returns `None` when `eligible`
/// holds no tickets.
pub fn draw<R: Rng>(eligible: &[usize], tickets: &[u32], rng: &mut R) -> Option<usize> {
    let total: u64 = eligible.iter().map(|&idx| u64::from(tickets[idx])).sum();
    if total == 0 {
        return None;
    }
    let mut winner = rng.random_range(0..total);
    for (pos, &idx) in eligible.iter().enumerate() {
        let held = u64::from(tickets[idx]);
        if winner < held {
            return Some(pos);
        }
        winner -= held;
    }
    None
}

/// Runs the workload by lottery.
pub fn schedule<R: Rng>(
    ctx: &mut SchedulingContext<'_>,
    quantum: i64,
    base_tickets: u32,
    rng: &mut R,
) {
    let tickets: Vec<u32> = ctx
        .processes()
        .iter()
        .map(|p| tickets_for(p.priority(), base_tickets))
        .collect();
    let mut eligible: Vec<usize> = Vec::new();

    while !ctx.is_finished() {
        eligible.extend(ctx.admit());
        let Some(pos) = draw(&eligible, &tickets, rng) else {
            if !ctx.idle_until_next_arrival() {
                break;
            }
            continue;
        };
        if ctx.run(eligible[pos], quantum).completed {
            eligible.remove(pos);
        }
    }
}
