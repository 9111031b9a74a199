//! Simulation driver.
//!
//! Owns a validated workload and configuration, runs a policy over a fresh
//! copy of the workload, and packages the finalized processes, timeline and
//! metrics.
//!
//! # Algorithm
//! 1. Validate the workload (once, at construction).
//! 2. Clone the workload into a run-private arena.
//! 3. Dispatch to the policy; it drives admit → select → run → requeue
//!    until every process completes.
//! 4. Compute metrics over the finalized arena.

use serde::Serialize;
use tracing::info;

use super::Metrics;
use crate::config::SimConfig;
use crate::error::SimResult;
use crate::models::{Process, Timeline};
use crate::policies::{execute, PolicyKind};
use crate::validation::{validate_workload, workload_error};

/// Everything a run produces.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutcome {
    /// Policy that produced this outcome.
    pub policy: PolicyKind,
    /// Finalized processes, in workload order.
    pub processes: Vec<Process>,
    /// Run segments, idle gaps included.
    pub timeline: Timeline,
    /// Makespan (time of the last completion).
    pub total_time: i64,
    /// Aggregate metrics.
    pub metrics: Metrics,
}

/// A validated workload ready to be simulated under any policy.
///
/// # Example
///
/// ```
/// use u_cpusched::policies::PolicyKind;
/// use u_cpusched::scheduler::Simulation;
/// use u_cpusched::workload::sample_workload;
///
/// let sim = Simulation::new(sample_workload()).unwrap();
/// let outcome = sim.run(PolicyKind::Fcfs).unwrap();
/// assert_eq!(outcome.total_time, 26);
/// assert_eq!(outcome.processes[1].waiting_time(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    workload: Vec<Process>,
    config: SimConfig,
}

impl Simulation {
    /// Validates `workload` and wraps it with the default configuration.
    pub fn new(workload: Vec<Process>) -> SimResult<Self> {
        validate_workload(&workload).map_err(workload_error)?;
        Ok(Self {
            workload,
            config: SimConfig::default(),
        })
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn workload(&self) -> &[Process] {
        &self.workload
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Runs one policy over a fresh copy of the workload.
    pub fn run(&self, policy: PolicyKind) -> SimResult<SimulationOutcome> {
        let _span = tracing::info_span!("simulate", %policy).entered();
        info!(processes = self.workload.len(), "starting run");

        let mut processes = self.workload.clone();
        let (timeline, total_time) = execute(policy, &mut processes, &self.config)?;
        let metrics = Metrics::calculate(&processes, total_time);

        info!(
            makespan = total_time,
            segments = timeline.len(),
            avg_waiting = metrics.avg_waiting_time,
            "run finished"
        );
        Ok(SimulationOutcome {
            policy,
            processes,
            timeline,
            total_time,
            metrics,
        })
    }

    /// Parses a policy name and runs it.
    pub fn run_named(&self, name: &str) -> SimResult<SimulationOutcome> {
        self.run(name.parse()?)
    }

    /// Runs every policy in [`PolicyKind::ALL`] order.
    pub fn run_all(&self) -> SimResult<Vec<SimulationOutcome>> {
        PolicyKind::ALL.iter().map(|&kind| self.run(kind)).collect()
    }
}
