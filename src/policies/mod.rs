//! Scheduling policies.
//!
//! Ten interchangeable policies over one shared process arena. Each policy
//! is a free function driving a [`SchedulingContext`]; [`PolicyKind`] is the
//! closed set of names and [`execute`] dispatches over it exhaustively.
//!
//! | Name | Preemptive | Granularity |
//! |------|-----------|-------------|
//! | fcfs | no | whole burst |
//! | sjf | no | whole burst |
//! | srtf | yes | 1 tick |
//! | priority | no | whole burst (with aging) |
//! | rr | yes | quantum |
//! | mlq | yes | quantum (high) / 1 tick (low) |
//! | mlfq | yes | 1 tick within per-level quanta |
//! | lottery | yes | quantum |
//! | cfs | yes | base slice |
//! | edf | yes | 1 tick |
//!
//! # Usage
//!
//! ```
//! use u_cpusched::config::SimConfig;
//! use u_cpusched::models::Process;
//! use u_cpusched::policies::{execute, PolicyKind};
//!
//! let mut procs = vec![Process::new("P1", 0, 3, 0), Process::new("P2", 1, 2, 0)];
//! let (timeline, total) = execute(PolicyKind::Fcfs, &mut procs, &SimConfig::default()).unwrap();
//! assert_eq!(total, 5);
//! assert_eq!(timeline.len(), 2);
//! ```

pub mod cfs;
pub mod edf;
pub mod fcfs;
pub mod lottery;
pub mod mlfq;
pub mod mlq;
pub mod priority;
pub mod round_robin;
pub mod sjf;
pub mod srtf;

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::dispatching::SchedulingContext;
use crate::error::{SimError, SimResult};
use crate::models::{Process, Timeline};
use crate::validation::{validate_processes, workload_error};

/// The closed set of scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Shortest Remaining Time First.
    Srtf,
    /// Non-preemptive priority with aging.
    Priority,
    /// Round Robin.
    #[serde(rename = "rr")]
    RoundRobin,
    /// Two-level multilevel queue.
    Mlq,
    /// Three-level multilevel feedback queue.
    Mlfq,
    /// Randomized lottery.
    Lottery,
    /// Simplified Completely Fair Scheduler.
    Cfs,
    /// Earliest Deadline First.
    Edf,
}

impl PolicyKind {
    /// Every policy, in presentation order.
    pub const ALL: [PolicyKind; 10] = [
        PolicyKind::Fcfs,
        PolicyKind::Sjf,
        PolicyKind::Srtf,
        PolicyKind::Priority,
        PolicyKind::RoundRobin,
        PolicyKind::Mlq,
        PolicyKind::Mlfq,
        PolicyKind::Lottery,
        PolicyKind::Cfs,
        PolicyKind::Edf,
    ];

    /// Canonical command-line name.
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "fcfs",
            PolicyKind::Sjf => "sjf",
            PolicyKind::Srtf => "srtf",
            PolicyKind::Priority => "priority",
            PolicyKind::RoundRobin => "rr",
            PolicyKind::Mlq => "mlq",
            PolicyKind::Mlfq => "mlfq",
            PolicyKind::Lottery => "lottery",
            PolicyKind::Cfs => "cfs",
            PolicyKind::Edf => "edf",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "First-Come, First-Served",
            PolicyKind::Sjf => "Shortest Job First",
            PolicyKind::Srtf => "Shortest Remaining Time First",
            PolicyKind::Priority => "Priority with Aging",
            PolicyKind::RoundRobin => "Round Robin",
            PolicyKind::Mlq => "Multilevel Queue",
            PolicyKind::Mlfq => "Multilevel Feedback Queue",
            PolicyKind::Lottery => "Lottery",
            PolicyKind::Cfs => "Completely Fair Scheduler (simplified)",
            PolicyKind::Edf => "Earliest Deadline First",
        }
    }

    /// Whether a running process can lose the CPU before completing.
    pub fn is_preemptive(&self) -> bool {
        !matches!(
            self,
            PolicyKind::Fcfs | PolicyKind::Sjf | PolicyKind::Priority
        )
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => PolicyKind::Fcfs,
            "sjf" => PolicyKind::Sjf,
            "srtf" => PolicyKind::Srtf,
            "priority" | "prio" => PolicyKind::Priority,
            "rr" => PolicyKind::RoundRobin,
            "mlq" => PolicyKind::Mlq,
            "mlfq" => PolicyKind::Mlfq,
            "lottery" => PolicyKind::Lottery,
            "cfs" => PolicyKind::Cfs,
            "edf" => PolicyKind::Edf,
            _ => {
                let known: Vec<&str> = PolicyKind::ALL.iter().map(|k| k.name()).collect();
                return Err(SimError::configuration(format!(
                    "unknown scheduler '{s}' (expected one of: {})",
                    known.join(", ")
                )));
            }
        };
        Ok(kind)
    }
}

/// Runs one policy over `processes` to completion.
///
/// Rejects malformed processes (see
/// [`validate_processes`](crate::validation::validate_processes)) with a
/// workload error; an empty slice is accepted and yields an empty timeline.
/// Resets remaining time and completion data first. Priorities lowered by
/// aging are kept, so callers wanting a pristine rerun should pass a fresh
/// copy of the workload.
///
/// Returns the timeline and the makespan: the time the last process
/// completed.
pub fn execute(
    kind: PolicyKind,
    processes: &mut [Process],
    config: &SimConfig,
) -> SimResult<(Timeline, i64)> {
    config.validate()?;
    validate_processes(processes).map_err(workload_error)?;
    let mut ctx = SchedulingContext::new(processes);

    match kind {
        PolicyKind::Fcfs => fcfs::schedule(&mut ctx),
        PolicyKind::Sjf => sjf::schedule(&mut ctx),
        PolicyKind::Srtf => srtf::schedule(&mut ctx),
        PolicyKind::Priority => priority::schedule(&mut ctx, config.aging_interval),
        PolicyKind::RoundRobin => round_robin::schedule(&mut ctx, config.quantum),
        PolicyKind::Mlq => mlq::schedule(
            &mut ctx,
            config.mlq_quantum,
            config.mlq_high_priority_below,
        ),
        PolicyKind::Mlfq => {
            mlfq::schedule(&mut ctx, config.mlfq_quanta, config.mlfq_promotion_wait)
        }
        PolicyKind::Lottery => {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            lottery::schedule(
                &mut ctx,
                config.lottery_quantum,
                config.lottery_base_tickets,
                &mut rng,
            )
        }
        PolicyKind::Cfs => cfs::schedule(&mut ctx, config.cfs_base_slice),
        PolicyKind::Edf => edf::schedule(&mut ctx),
    }

    Ok(ctx.finish())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn sample_workload() -> Vec<Process> {
        crate::workload::sample_workload()
    }

    pub fn simulate_with(
        kind: PolicyKind,
        mut procs: Vec<Process>,
        config: &SimConfig,
    ) -> (Vec<Process>, Timeline, i64) {
        let (timeline, total) = execute(kind, &mut procs, config).unwrap();
        (procs, timeline, total)
    }

    pub fn simulate(kind: PolicyKind, procs: Vec<Process>) -> (Vec<Process>, Timeline, i64) {
        simulate_with(kind, procs, &SimConfig::new().with_seed(0))
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{sample_workload, simulate};
    use super::*;
    use crate::models::Segment;
    use proptest::prelude::*;

    #[test]
    fn test_parse_names() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.name().parse::<PolicyKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!("prio".parse::<PolicyKind>().unwrap(), PolicyKind::Priority);
        assert_eq!(" EDF ".parse::<PolicyKind>().unwrap(), PolicyKind::Edf);
    }

    #[test]
    fn test_unknown_name_is_configuration_error() {
        let err = "fifo".parse::<PolicyKind>().unwrap_err();
        assert!(matches!(err, SimError::Configuration(_)));
        assert!(err.to_string().contains("fifo"));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&PolicyKind::RoundRobin).unwrap();
        assert_eq!(json, "\"rr\"");
        let kind: PolicyKind = serde_json::from_str("\"mlfq\"").unwrap();
        assert_eq!(kind, PolicyKind::Mlfq);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut procs = sample_workload();
        let config = SimConfig::new().with_quantum(0);
        let err = execute(PolicyKind::RoundRobin, &mut procs, &config).unwrap_err();
        assert!(matches!(err, SimError::Configuration(_)));
    }

    #[test]
    fn test_malformed_process_rejected_every_policy() {
        let config = SimConfig::new().with_seed(0);
        for kind in PolicyKind::ALL {
            let mut procs = vec![Process::new("A", 0, 2, 0), Process::new("neg", 1, -3, 0)];
            let err = execute(kind, &mut procs, &config).unwrap_err();
            assert!(err.is_workload(), "{kind}");
        }
    }

    #[test]
    fn test_clock_overflow_rejected() {
        let half = i64::MAX / 2 + 1;
        let mut procs = vec![Process::new("A", 0, half, 0), Process::new("B", 0, half, 0)];
        let err = execute(PolicyKind::Fcfs, &mut procs, &SimConfig::default()).unwrap_err();
        assert!(matches!(err, SimError::Workload(_)));
    }

    #[test]
    fn test_idle_gap_every_policy() {
        for kind in PolicyKind::ALL {
            let procs = vec![Process::new("A", 0, 2, 0), Process::new("B", 5, 3, 0)];
            let (procs, timeline, total) = simulate(kind, procs);
            assert_eq!(
                timeline.segments(),
                &[
                    Segment::new("A", 2),
                    Segment::new("IDLE", 3),
                    Segment::new("B", 3)
                ],
                "{kind}"
            );
            assert_eq!(total, 8, "{kind}");
            assert_eq!(procs[1].waiting_time(), 0, "{kind}");
        }
    }

    #[test]
    fn test_leading_idle_every_policy() {
        for kind in PolicyKind::ALL {
            let (_, timeline, total) = simulate(kind, vec![Process::new("late", 4, 1, 0)]);
            assert_eq!(timeline.segments()[0], Segment::new("IDLE", 4), "{kind}");
            assert_eq!(total, 5, "{kind}");
        }
    }

    #[test]
    fn test_empty_arena_every_policy() {
        for kind in PolicyKind::ALL {
            let (_, timeline, total) = simulate(kind, Vec::new());
            assert!(timeline.is_empty(), "{kind}");
            assert_eq!(total, 0, "{kind}");
        }
    }

    #[test]
    fn test_reexecution_resets_state() {
        let mut procs = sample_workload();
        let config = SimConfig::new().with_seed(3);
        let first = execute(PolicyKind::Srtf, &mut procs, &config).unwrap();
        let second = execute(PolicyKind::Srtf, &mut procs, &config).unwrap();
        assert_eq!(first, second);
    }

    fn workload_strategy() -> impl Strategy<Value = Vec<Process>> {
        prop::collection::vec((0i64..=20, 1i64..=10, 0i32..=5), 0..12).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (at, bt, pr))| Process::new(format!("P{}", i + 1), at, bt, pr))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_every_policy_keeps_invariants(procs in workload_strategy()) {
            let burst_sum: i64 = procs.iter().map(|p| p.burst_time()).sum();

            for kind in PolicyKind::ALL {
                let (done, timeline, total) = simulate(kind, procs.clone());

                for p in &done {
                    prop_assert!(p.is_complete());
                    prop_assert_eq!(
                        p.completion_time(),
                        Some(p.arrival_time() + p.turnaround_time())
                    );
                    prop_assert_eq!(p.waiting_time(), p.turnaround_time() - p.burst_time());
                    prop_assert!(p.waiting_time() >= 0);
                }

                prop_assert_eq!(timeline.busy_time(), burst_sum);
                prop_assert_eq!(timeline.span(), total);
                let last = done.iter().filter_map(|p| p.completion_time()).max().unwrap_or(0);
                prop_assert_eq!(total, last);

                // No segment starts before its process arrived.
                let mut t = 0;
                for seg in timeline.segments() {
                    if let Some(p) = done.iter().find(|p| p.id() == seg.label) {
                        prop_assert!(
                            t >= p.arrival_time(),
                            "{} ran at {} before arrival",
                            seg.label,
                            t
                        );
                    }
                    t += seg.duration;
                }

                if !kind.is_preemptive() {
                    for p in &done {
                        prop_assert_eq!(timeline.segments_for(p.id()).len(), 1);
                    }
                }
            }
        }

        #[test]
        fn prop_large_quantum_rr_matches_fcfs(procs in workload_strategy()) {
            let config = SimConfig::new().with_quantum(10);
            let rr = test_support::simulate_with(PolicyKind::RoundRobin, procs.clone(), &config);
            let fcfs = simulate(PolicyKind::Fcfs, procs);
            prop_assert_eq!(rr, fcfs);
        }
    }
}
