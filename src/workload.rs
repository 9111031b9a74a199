//! Workload ingestion.
//!
//! Builds process lists from text, files, or a random generator. Every
//! loader returns processes stably sorted by arrival time.
//!
//! # Text Format
//!
//! One process per line, whitespace-delimited:
//!
//! ```text
//! # id  arrival  burst  priority  [deadline]
//! P1    0        8      2
//! P2    1        4      1         12
//! ```
//!
//! Blank lines and `#` comments are skipped. A deadline of `0` (or none)
//! means "derive as arrival + 2 × burst".

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::models::Process;

/// Default number of processes for random generation.
pub const DEFAULT_RANDOM_COUNT: usize = 10;

/// The built-in four-process demonstration workload.
pub fn sample_workload() -> Vec<Process> {
    vec![
        Process::new("P1", 0, 8, 2),
        Process::new("P2", 1, 4, 1),
        Process::new("P3", 2, 9, 3),
        Process::new("P4", 3, 5, 4),
    ]
}

/// Parses the text workload format.
pub fn parse_workload(text: &str) -> SimResult<Vec<Process>> {
    let mut processes = Vec::new();

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default();
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let line_no = lineno + 1;
        if !(4..=5).contains(&fields.len()) {
            return Err(SimError::workload(format!(
                "line {line_no}: expected `id arrival burst priority [deadline]`, got {} fields",
                fields.len()
            )));
        }

        let arrival = parse_field(fields[1], "arrival", line_no)?;
        let burst = parse_field(fields[2], "burst", line_no)?;
        let priority = parse_field(fields[3], "priority", line_no)?;
        let priority = i32::try_from(priority).map_err(|_| {
            SimError::workload(format!("line {line_no}: priority {priority} out of range"))
        })?;

        let mut process = Process::new(fields[0], arrival, burst, priority);
        if let Some(deadline) = fields.get(4) {
            process = process.with_deadline(parse_field(deadline, "deadline", line_no)?);
        }
        processes.push(process);
    }

    sort_by_arrival(&mut processes);
    debug!(count = processes.len(), "parsed workload");
    Ok(processes)
}

fn parse_field(token: &str, name: &str, line_no: usize) -> SimResult<i64> {
    token.parse().map_err(|_| {
        SimError::workload(format!("line {line_no}: invalid {name} '{token}'"))
    })
}

/// Reads and parses a workload file.
pub fn load_workload(path: impl AsRef<Path>) -> SimResult<Vec<Process>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SimError::WorkloadIo {
        path: path.to_path_buf(),
        source,
    })?;
    parse_workload(&text)
}

/// Generates `count` processes `P1..Pn` with arrival ∈ [0,20],
/// burst ∈ [1,10] and priority ∈ [0,5].
pub fn random_workload<R: Rng>(count: usize, rng: &mut R) -> Vec<Process> {
    let mut processes: Vec<Process> = (1..=count)
        .map(|i| {
            Process::new(
                format!("P{i}"),
                rng.random_range(0..=20),
                rng.random_range(1..=10),
                rng.random_range(0..=5),
            )
        })
        .collect();
    sort_by_arrival(&mut processes);
    processes
}

/// Generates a random workload from an optional seed.
pub fn seeded_random_workload(count: usize, seed: Option<u64>) -> Vec<Process> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    random_workload(count, &mut rng)
}

fn sort_by_arrival(processes: &mut [Process]) {
    processes.sort_by_key(|p| p.arrival_time());
}
