//! Circular SCAN (C-SCAN) pending queue.
//!
//! # Algorithm
//!
//! Scanning leg:
//! 1. Partition pending requests into those ahead of the head in the sweep
//!    direction (inclusive) and those behind it
//! 2. If any lie ahead, pick the nearest one
//! 3. Otherwise pick the farthest one behind, where the next sweep starts
//!
//! Returning (flyback) leg: pick the request at the extreme end opposite
//! to the travel direction, over the whole queue.
//!
//! Every tie goes to the earliest position in the sequence: a running
//! candidate is only replaced on strict improvement.
//!
//! # Reference
//!
//! Silberschatz, Galvin & Gagne, *Operating System Concepts*, ch. "Disk Scheduling".

use tracing::trace;

use super::types::{CircularScan, DiskQueue};
use crate::cylinder::{Cylinder, CylinderBatch, Direction};

/// Pending requests under the C-SCAN discipline.
///
/// Holds no mode state of its own: which leg the head is on is passed in
/// by the driver on every [`select_next`](CircularScan::select_next).
#[derive(Debug, Clone, Default)]
pub struct CScanQueue {
    cylinders: Vec<Cylinder>,
}

impl CScanQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the extreme request for a head travelling in `reversed`.
    fn returning_candidate(&self, reversed: Direction) -> usize {
        let mut best = 0;
        for (i, cylinder) in self.cylinders.iter().enumerate().skip(1) {
            let improves = match reversed {
                Direction::TowardLow => cylinder.is_track_greater_than(&self.cylinders[best]),
                Direction::TowardHigh => cylinder.is_track_less_than(&self.cylinders[best]),
            };
            if improves {
                best = i;
            }
        }
        best
    }

    fn scanning_candidate(&self, head: i64, direction: Direction) -> usize {
        let (in_range, out_of_range): (Vec<usize>, Vec<usize>) = (0..self.cylinders.len())
            .partition(|&i| direction.is_ahead(head, self.cylinders[i].track()));

        let distance = |i: usize| self.cylinders[i].distance_to(head);

        let nearest = first_strict_best(&in_range, |a, b| distance(a) < distance(b));
        let farthest = || first_strict_best(&out_of_range, |a, b| distance(a) > distance(b));

        match nearest.or_else(farthest) {
            Some(index) => index,
            None => unreachable!(
                "scan partition yielded no candidate over {} pending requests",
                self.cylinders.len()
            ),
        }
    }
}

/// First index in `indices` that no later index strictly beats.
fn first_strict_best(indices: &[usize], better: impl Fn(usize, usize) -> bool) -> Option<usize> {
    let (&first, rest) = indices.split_first()?;
    Some(
        rest.iter()
            .fold(first, |best, &i| if better(i, best) { i } else { best }),
    )
}

impl DiskQueue for CScanQueue {
    fn add(&mut self, cylinder: Cylinder) {
        self.cylinders.push(cylinder);
    }

    fn is_empty(&self) -> bool {
        self.cylinders.is_empty()
    }

    fn peek_pending(&self) -> &[Cylinder] {
        &self.cylinders
    }

    fn advance_waiting_time(&mut self) {
        self.cylinders
            .iter_mut()
            .for_each(Cylinder::advance_waiting_time);
    }
}

impl CircularScan for CScanQueue {
    fn add_front(&mut self, cylinder: Cylinder) {
        self.cylinders.insert(0, cylinder);
    }

    fn extract_same_track(&mut self, track: i64) -> CylinderBatch {
        let mut batch = CylinderBatch::new();
        let mut kept = Vec::with_capacity(self.cylinders.len());

        for cylinder in self.cylinders.drain(..) {
            if cylinder.has_same_track(track) {
                batch.push_back(cylinder);
            } else {
                kept.push(cylinder);
            }
        }
        self.cylinders = kept;

        batch
    }

    fn select_next(
        &mut self,
        head: i64,
        direction: Direction,
        is_returning: bool,
    ) -> Option<Cylinder> {
        if self.cylinders.is_empty() {
            return None;
        }

        let index = if is_returning {
            self.returning_candidate(direction.reverse())
        } else {
            self.scanning_candidate(head, direction)
        };
        let chosen = self.cylinders.remove(index);

        trace!(
            head,
            ?direction,
            is_returning,
            track = chosen.track(),
            remaining = self.cylinders.len(),
            "c-scan selection"
        );

        Some(chosen)
    }
}
