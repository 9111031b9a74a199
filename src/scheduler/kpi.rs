//! Simulation performance metrics.
//!
//! Computes aggregate indicators from a finalized process set and the
//! makespan. Reporting only: nothing here feeds back into scheduling.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(turnaround − burst) |
//! | Avg Turnaround Time | mean(completion − arrival) |
//! | CPU Utilization | Σburst / makespan × 100 |
//! | Throughput | processes / makespan |
//! | Deadline Misses | completions past the effective deadline |
//! | Max Tardiness | largest completion − deadline overrun |

use serde::Serialize;

use crate::models::Process;

/// Aggregate performance indicators for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    /// Mean waiting time (ticks).
    pub avg_waiting_time: f64,
    /// Mean turnaround time (ticks).
    pub avg_turnaround_time: f64,
    /// Busy share of the makespan, in percent (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Time of the last completion.
    pub makespan: i64,
    /// Processes completing after their effective deadline.
    pub deadline_misses: usize,
    /// Largest overrun past an effective deadline (ticks).
    pub max_tardiness: i64,
}

impl Metrics {
    /// Computes metrics from finalized processes and the makespan.
    ///
    /// An empty process set yields zero averages; a zero makespan yields
    /// zero utilization and throughput.
    pub fn calculate(processes: &[Process], total_time: i64) -> Self {
        let n = processes.len();
        let (avg_waiting_time, avg_turnaround_time) = if n == 0 {
            (0.0, 0.0)
        } else {
            let wait: i64 = processes.iter().map(|p| p.waiting_time()).sum();
            let turn: i64 = processes.iter().map(|p| p.turnaround_time()).sum();
            (wait as f64 / n as f64, turn as f64 / n as f64)
        };

        let busy: i64 = processes.iter().map(|p| p.burst_time()).sum();
        let (cpu_utilization, throughput) = if total_time > 0 {
            (
                busy as f64 / total_time as f64 * 100.0,
                n as f64 / total_time as f64,
            )
        } else {
            (0.0, 0.0)
        };

        let mut deadline_misses = 0;
        let mut max_tardiness = 0;
        for p in processes {
            if let Some(completion) = p.completion_time() {
                let tardiness = completion - p.effective_deadline();
                if tardiness > 0 {
                    deadline_misses += 1;
                    max_tardiness = max_tardiness.max(tardiness);
                }
            }
        }

        Self {
            avg_waiting_time,
            avg_turnaround_time,
            cpu_utilization,
            throughput,
            makespan: total_time,
            deadline_misses,
            max_tardiness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::policies::{execute, PolicyKind};
    use crate::workload::sample_workload;

    fn finished(kind: PolicyKind) -> (Vec<Process>, i64) {
        let mut procs = sample_workload();
        let (_, total) = execute(kind, &mut procs, &SimConfig::new().with_seed(1)).unwrap();
        (procs, total)
    }

    #[test]
    fn test_metrics_fcfs_sample() {
        let (procs, total) = finished(PolicyKind::Fcfs);
        let m = Metrics::calculate(&procs, total);
        assert!((m.avg_waiting_time - 8.75).abs() < 1e-10); // (0+7+10+18)/4
        assert!((m.avg_turnaround_time - 15.25).abs() < 1e-10); // (8+11+19+23)/4
        assert!((m.cpu_utilization - 100.0).abs() < 1e-10);
        assert!((m.throughput - 4.0 / 26.0).abs() < 1e-10);
        assert_eq!(m.makespan, 26);
    }

    #[test]
    fn test_metrics_with_idle() {
        let mut procs = vec![Process::new("A", 0, 2, 0), Process::new("B", 6, 2, 0)];
        let (_, total) = execute(PolicyKind::Fcfs, &mut procs, &SimConfig::default()).unwrap();
        let m = Metrics::calculate(&procs, total);
        assert_eq!(total, 8);
        assert!((m.cpu_utilization - 50.0).abs() < 1e-10);
        assert!((m.avg_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_deadline_misses() {
        let (procs, total) = finished(PolicyKind::Edf);
        let m = Metrics::calculate(&procs, total);
        // P1 finishes at 17 (deadline 16), P3 at 26 (deadline 20).
        assert_eq!(m.deadline_misses, 2);
        assert_eq!(m.max_tardiness, 6);
    }

    #[test]
    fn test_metrics_empty() {
        let m = Metrics::calculate(&[], 0);
        assert_eq!(m.avg_waiting_time, 0.0);
        assert_eq!(m.avg_turnaround_time, 0.0);
        assert_eq!(m.cpu_utilization, 0.0);
        assert_eq!(m.throughput, 0.0);
        assert_eq!(m.deadline_misses, 0);
    }

    #[test]
    fn test_metrics_zero_makespan_guard() {
        let procs = vec![Process::new("A", 0, 3, 0)];
        let m = Metrics::calculate(&procs, 0);
        assert_eq!(m.cpu_utilization, 0.0);
        assert_eq!(m.throughput, 0.0);
    }
}
