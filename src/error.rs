//! Error taxonomy.
//!
//! Every error is fatal and raised before a simulation starts. A valid run
//! never fails: degenerate arithmetic falls back to neutral defaults.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while preparing a simulation.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SimError {
    /// Unknown policy name, zero quantum, malformed config.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Empty, malformed or structurally invalid workload.
    #[error("workload error: {0}")]
    Workload(String),

    /// Workload file could not be read.
    #[error("workload error: cannot read {}: {source}", path.display())]
    WorkloadIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SimError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn workload(msg: impl Into<String>) -> Self {
        Self::Workload(msg.into())
    }

    /// Whether this error belongs to the workload class.
    pub fn is_workload(&self) -> bool {
        matches!(self, Self::Workload(_) | Self::WorkloadIo { .. })
    }
}
