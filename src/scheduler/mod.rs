//! Simulation driver and metrics.
//!
//! # Driver
//!
//! `Simulation` validates a workload once and runs any policy over a fresh
//! copy of it, so concurrent or repeated runs never share process state.
//!
//! # Metrics
//!
//! `Metrics` computes average waiting and turnaround time, CPU utilization,
//! throughput and deadline overruns from a finished run.

mod kpi;
mod simulation;

pub use kpi::Metrics;
pub use simulation::{Simulation, SimulationOutcome};
