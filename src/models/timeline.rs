//! Timeline (Gantt) model.
//!
//! An ordered list of `(label, duration)` run segments. Adjacent segments
//! with the same label are merged on insertion, so one-unit stepping
//! produces the same timeline as batched execution.

use serde::Serialize;

/// Label used for gaps where no process is eligible.
pub const IDLE_LABEL: &str = "IDLE";

/// A contiguous stretch of CPU time owned by one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Process ID, or [`IDLE_LABEL`].
    pub label: String,
    /// Length in ticks (always > 0).
    pub duration: i64,
}

impl Segment {
    pub fn new(label: impl Into<String>, duration: i64) -> Self {
        Self {
            label: label.into(),
            duration,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.label == IDLE_LABEL
    }
}

/// Ordered, self-coalescing record of run segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `duration` ticks for `label`, extending the trailing segment
    /// when it carries the same label. Non-positive durations are ignored.
    pub fn record(&mut self, label: &str, duration: i64) {
        if duration <= 0 {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.label == label => last.duration += duration,
            _ => self.segments.push(Segment::new(label, duration)),
        }
    }

    /// Appends an idle gap.
    pub fn record_idle(&mut self, duration: i64) {
        self.record(IDLE_LABEL, duration);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total ticks spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| !s.is_idle())
            .map(|s| s.duration)
            .sum()
    }

    /// Total ticks spent idle.
    pub fn idle_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.is_idle())
            .map(|s| s.duration)
            .sum()
    }

    /// Sum of all segment durations.
    pub fn span(&self) -> i64 {
        self.segments.iter().map(|s| s.duration).sum()
    }

    /// Segments belonging to one process.
    pub fn segments_for(&self, label: &str) -> Vec<&Segment> {
        self.segments.iter().filter(|s| s.label == label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_coalesces_same_label() {
        let mut tl = Timeline::new();
        tl.record("P1", 1);
        tl.record("P1", 1);
        tl.record("P2", 3);
        tl.record("P1", 2);
        assert_eq!(
            tl.segments(),
            &[
                Segment::new("P1", 2),
                Segment::new("P2", 3),
                Segment::new("P1", 2)
            ]
        );
    }

    #[test]
    fn test_zero_duration_ignored() {
        let mut tl = Timeline::new();
        tl.record("P1", 0);
        tl.record_idle(0);
        assert!(tl.is_empty());
    }

    #[test]
    fn test_busy_and_idle_time() {
        let mut tl = Timeline::new();
        tl.record_idle(2);
        tl.record("P1", 5);
        tl.record_idle(1);
        tl.record("P2", 4);
        assert_eq!(tl.busy_time(), 9);
        assert_eq!(tl.idle_time(), 3);
        assert_eq!(tl.span(), 12);
        assert_eq!(tl.segments_for("P1").len(), 1);
        assert!(tl.segments()[0].is_idle());
    }
}
