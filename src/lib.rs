//! Discrete-time CPU scheduling simulator.
//!
//! Runs a workload of processes through one of ten scheduling policies on a
//! single logical CPU and reports the resulting timeline and metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Segment`, `Timeline`
//! - **`dispatching`**: Ready-set admission, the scheduling context, and
//!   selection rules (SJF, SRTF, priority, EDF)
//! - **`policies`**: FCFS, SJF, SRTF, Priority (aging), RR, MLQ, MLFQ,
//!   Lottery, CFS, EDF
//! - **`scheduler`**: Simulation driver and metrics
//! - **`workload`**: Text, random and sample workloads
//! - **`validation`**: Workload integrity checks (empty, duplicate IDs,
//!   negative times)
//! - **`config`**: Per-policy tunables
//! - **`report`**: Text and JSON rendering
//!
//! # Architecture
//!
//! Processes live in an index arena owned by the run. Policies are free
//! functions over a `SchedulingContext`, which owns the clock and the
//! timeline; selection is delegated to rule objects with a shared
//! arrival-then-identifier tie-break.
//!
//! # References
//!
//! - Silberschatz, Galvin, Gagne (2018), "Operating System Concepts", ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", ch. 7–9
//! - Waldspurger & Weihl (1994), "Lottery Scheduling"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod policies;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;
