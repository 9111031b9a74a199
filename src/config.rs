//! Simulation tunables.
//!
//! Every field has a default, so a partial JSON document is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Per-policy parameters for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Round Robin quantum.
    pub quantum: i64,
    /// Quantum of the MLQ high (Round Robin) queue.
    pub mlq_quantum: i64,
    /// Processes with priority below this value go to the MLQ high queue.
    pub mlq_high_priority_below: i32,
    /// MLFQ quanta for levels 0, 1 and 2.
    pub mlfq_quanta: [i64; 3],
    /// Ticks an MLFQ process may wait in a queue before promotion.
    pub mlfq_promotion_wait: i64,
    /// Ticks of waiting per one-step priority decrement.
    pub aging_interval: i64,
    /// Lottery slice per draw.
    pub lottery_quantum: i64,
    /// Ticket numerator: tickets = max(1, base / max(1, priority)).
    pub lottery_base_tickets: u32,
    /// CFS slice per dispatch.
    pub cfs_base_slice: i64,
    /// Seed for the Lottery random source. `None` = seed from the OS.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            quantum: 4,
            mlq_quantum: 4,
            mlq_high_priority_below: 3,
            mlfq_quanta: [2, 4, 8],
            mlfq_promotion_wait: 10,
            aging_interval: 3,
            lottery_quantum: 4,
            lottery_base_tickets: 10,
            cfs_base_slice: 2,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses a JSON document.
    pub fn from_json(text: &str) -> SimResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| SimError::configuration(format!("invalid config: {e}")))
    }

    /// Reads a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            SimError::configuration(format!("cannot read config {}: {e}", path.display()))
        })?;
        Self::from_json(&text)
    }

    /// Rejects non-positive slices and intervals.
    pub fn validate(&self) -> SimResult<()> {
        let positive = [
            ("quantum", self.quantum),
            ("mlq_quantum", self.mlq_quantum),
            ("mlfq_quanta[0]", self.mlfq_quanta[0]),
            ("mlfq_quanta[1]", self.mlfq_quanta[1]),
            ("mlfq_quanta[2]", self.mlfq_quanta[2]),
            ("mlfq_promotion_wait", self.mlfq_promotion_wait),
            ("aging_interval", self.aging_interval),
            ("lottery_quantum", self.lottery_quantum),
            ("cfs_base_slice", self.cfs_base_slice),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(SimError::configuration(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.lottery_base_tickets == 0 {
            return Err(SimError::configuration(
                "lottery_base_tickets must be positive",
            ));
        }
        Ok(())
    }
}
