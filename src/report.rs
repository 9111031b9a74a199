//! Report rendering.
//!
//! Turns a [`SimulationOutcome`] into either a human-readable text report
//! (Gantt line, per-process table, metrics) or a JSON document.

use std::fmt::Write as _;

use crate::scheduler::SimulationOutcome;

/// Renders the Gantt line: `(P1 8) (IDLE 2) (P2 4)`.
pub fn gantt_line(outcome: &SimulationOutcome) -> String {
    outcome
        .timeline
        .segments()
        .iter()
        .map(|s| format!("({} {})", s.label, s.duration))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the plain-text report.
pub fn render_text(outcome: &SimulationOutcome) -> String {
    let mut out = String::new();
    let m = &outcome.metrics;

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "Scheduler: {} ({})",
        outcome.policy,
        outcome.policy.description()
    );
    let _ = writeln!(out, "Gantt Chart: {}", gantt_line(outcome));
    let _ = writeln!(out);

    let id_width = outcome
        .processes
        .iter()
        .map(|p| p.id().len())
        .max()
        .unwrap_or(0)
        .max(2);
    let _ = writeln!(
        out,
        "{:<id_width$}  {:>7}  {:>5}  {:>8}  {:>8}  {:>10}  {:>10}  {:>7}",
        "ID", "Arrival", "Burst", "Priority", "Deadline", "Completion", "Turnaround", "Waiting"
    );
    for p in &outcome.processes {
        let completion = p
            .completion_time()
            .map_or_else(|| "-".to_string(), |t| t.to_string());
        let _ = writeln!(
            out,
            "{:<id_width$}  {:>7}  {:>5}  {:>8}  {:>8}  {:>10}  {:>10}  {:>7}{}",
            p.id(),
            p.arrival_time(),
            p.burst_time(),
            p.priority(),
            p.effective_deadline(),
            completion,
            p.turnaround_time(),
            p.waiting_time(),
            if p.missed_deadline() { "  (missed)" } else { "" }
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Total Time: {}", outcome.total_time);
    let _ = writeln!(out, "Average Waiting Time: {:.2}", m.avg_waiting_time);
    let _ = writeln!(out, "Average Turnaround Time: {:.2}", m.avg_turnaround_time);
    let _ = writeln!(out, "CPU Utilization: {:.2}%", m.cpu_utilization);
    let _ = writeln!(out, "Throughput: {:.4} processes/unit time", m.throughput);
    let _ = writeln!(
        out,
        "Deadline Misses: {} (max tardiness {})",
        m.deadline_misses, m.max_tardiness
    );
    out
}

/// Renders the outcome as pretty-printed JSON.
pub fn render_json(outcome: &SimulationOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}
