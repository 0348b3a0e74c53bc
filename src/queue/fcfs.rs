//! First-come, first-served pending queue.

use super::types::DiskQueue;
use crate::cylinder::Cylinder;

/// Pending requests served strictly by arrival time.
///
/// Requests with equal arrival time are served in insertion order.
#[derive(Debug, Clone, Default)]
pub struct FcfsQueue {
    cylinders: Vec<Cylinder>,
}

impl FcfsQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the earliest-arrived request.
    pub fn select_next(&mut self) -> Option<Cylinder> {
        let (first, rest) = self.cylinders.split_first()?;
        let mut best = 0;
        let mut best_cylinder = first;
        for (i, cylinder) in rest.iter().enumerate() {
            if cylinder.cmp_by_arrival_time(best_cylinder).is_lt() {
                best = i + 1;
                best_cylinder = cylinder;
            }
        }
        Some(self.cylinders.remove(best))
    }
}

impl DiskQueue for FcfsQueue {
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
