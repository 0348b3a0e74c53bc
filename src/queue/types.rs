//! Core traits shared by queue disciplines.

use crate::cylinder::{Cylinder, CylinderBatch, Direction};

/// Capability set every scheduling discipline's pending queue provides.
///
/// A driver can hold any discipline behind this trait to admit requests
/// and age them, independent of how the discipline picks the next one.
pub trait DiskQueue {
    /// Appends a request to the pending set.
    fn add(&mut self, cylinder: Cylinder);

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize {
        self.peek_pending().len()
    }

    /// Read-only view of pending requests in sequence order.
    ///
    /// Never mutates the queue; calling it any number of times is harmless.
    fn peek_pending(&self) -> &[Cylinder];

    /// Adds one tick of waiting time to every pending request.
    fn advance_waiting_time(&mut self);
}

/// Operations specific to the circular-scan discipline.
///
/// # Examples
///
/// ```
/// use u_disksched::cylinder::{Cylinder, Direction};
/// use u_disksched::queue::{CScanQueue, CircularScan, DiskQueue};
///
/// let mut queue = CScanQueue::new();
/// for track in [40, 60, 55, 45] {
///     queue.add(Cylinder::new(track, 0));
/// }
///
/// let next = queue.select_next(50, Direction::TowardHigh, false).unwrap();
/// assert_eq!(next.track(), 55);
/// assert_eq!(queue.len(), 3);
/// ```
pub trait CircularScan: DiskQueue {
    /// Inserts a request ahead of everything else in the sequence.
    ///
    /// Earlier sequence position wins every selection tie, so this
    /// re-prioritizes the request.
    fn add_front(&mut self, cylinder: Cylinder);

    /// Removes every pending request at `track`, preserving their order.
    fn extract_same_track(&mut self, track: i64) -> CylinderBatch;

    /// Removes and returns the next request to service.
    ///
    /// On the scanning leg, `direction` is the sweep direction and the
    /// nearest request ahead of `head` wins; with nothing ahead, the
    /// farthest request behind it does. On the returning leg
    /// (`is_returning`) the head position is ignored: the maximum track
    /// is chosen when `direction.reverse()` is `TowardLow`, the minimum
    /// when it is `TowardHigh`. Returns `None` only for an empty queue.
    fn select_next(
        &mut self,
        head: i64,
        direction: Direction,
        is_returning: bool,
    ) -> Option<Cylinder>;
}
