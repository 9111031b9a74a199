//! Arrival-ordered admission into the ready set.

use crate::models::Process;

/// Admits processes into the eligible set once they have arrived.
///
/// Processes are admitted in ascending `(arrival_time, id)` order. That
/// order also defines each process's *rank*, the default tie-breaker used
/// by every selection rule.
#[derive(Debug, Clone)]
pub struct ReadySet {
    /// Process indices in admission order.
    order: Vec<usize>,
    /// Arrival time per position in `order`.
    arrivals: Vec<i64>,
    /// Process index → position in `order`.
    rank: Vec<usize>,
    /// First position not yet admitted.
    next: usize,
}

impl ReadySet {
    /// Builds the admission order for a process arena.
    pub fn new(processes: &[Process]) -> Self {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by(|&a, &b| {
            let (pa, pb) = (&processes[a], &processes[b]);
            pa.arrival_time()
                .cmp(&pb.arrival_time())
                .then_with(|| pa.id().cmp(pb.id()))
        });

        let mut rank = vec![0; processes.len()];
        for (pos, &idx) in order.iter().enumerate() {
            rank[idx] = pos;
        }
        let arrivals = order.iter().map(|&i| processes[i].arrival_time()).collect();

        Self {
            order,
            arrivals,
            rank,
            next: 0,
        }
    }

    /// Admits every pending process with `arrival_time <= now`.
    ///
    /// Returns the newly admitted indices in admission order.
    pub fn admit(&mut self, now: i64) -> Vec<usize> {
        let start = self.next;
        while self.next < self.order.len() && self.arrivals[self.next] <= now {
            self.next += 1;
        }
        self.order[start..self.next].to_vec()
    }

    /// Arrival time of the next pending process, `None` once all are admitted.
    pub fn next_arrival(&self) -> Option<i64> {
        self.arrivals.get(self.next).copied()
    }

    /// Whether every process has been admitted.
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.order.len()
    }

    /// Number of processes admitted so far.
    pub fn admitted(&self) -> usize {
        self.next
    }

    /// Position of a process in admission order.
    #[inline]
    pub fn rank(&self, idx: usize) -> usize {
        self.rank[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Vec<Process> {
        vec![
            Process::new("P3", 4, 1, 0),
            Process::new("P2", 0, 1, 0),
            Process::new("P1", 0, 1, 0),
            Process::new("P4", 9, 1, 0),
        ]
    }

    #[test]
    fn test_admit_orders_by_arrival_then_id() {
        let procs = arena();
        let mut ready = ReadySet::new(&procs);

        assert_eq!(ready.admit(0), vec![2, 1]); // P1, P2
        assert_eq!(ready.rank(2), 0);
        assert_eq!(ready.rank(1), 1);
        assert_eq!(ready.next_arrival(), Some(4));
    }

    #[test]
    fn test_admit_is_incremental() {
        let procs = arena();
        let mut ready = ReadySet::new(&procs);

        ready.admit(0);
        assert!(ready.admit(3).is_empty());
        assert_eq!(ready.admit(10), vec![0, 3]);
        assert!(ready.is_exhausted());
        assert_eq!(ready.next_arrival(), None);
        assert_eq!(ready.admitted(), 4);
    }

    #[test]
    fn test_empty_arena() {
        let mut ready = ReadySet::new(&[]);
        assert!(ready.is_exhausted());
        assert!(ready.admit(100).is_empty());
        assert_eq!(ready.next_arrival(), None);
    }
}
