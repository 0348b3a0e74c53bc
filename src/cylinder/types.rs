//! The pending disk access request.

use std::cmp::Ordering;
use std::fmt;

/// One pending disk access, addressed by its target track ("cylinder").
///
/// Two cylinders with the same track are still distinct requests if they
/// arrived separately; queues may hold any number of them.
///
/// `waiting_time` starts at zero and only grows, one tick per call to
/// [`advance_waiting_time`](Cylinder::advance_waiting_time).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cylinder {
    track: i64,
    arrival_time: i64,
    waiting_time: u64,
}

impl Cylinder {
    /// Creates a request for `track` arriving at `arrival_time`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_disksched::cylinder::Cylinder;
    ///
    /// let c = Cylinder::new(98, 3);
    /// assert_eq!(c.track(), 98);
    /// assert_eq!(c.waiting_time(), 0);
    /// ```
    pub fn new(track: i64, arrival_time: i64) -> Self {
        Self {
            track,
            arrival_time,
            waiting_time: 0,
        }
    }

    pub fn track(&self) -> i64 {
        self.track
    }

    pub fn arrival_time(&self) -> i64 {
        self.arrival_time
    }

    pub fn waiting_time(&self) -> u64 {
        self.waiting_time
    }

    /// Signed offset of this request's track from `track`.
    ///
    /// Wraps on overflow.
    pub fn subtract_track(&self, track: i64) -> i64 {
        self.track.wrapping_sub(track)
    }

    /// Absolute head travel between this request and `track`.
    pub fn distance_to(&self, track: i64) -> u64 {
        self.track.abs_diff(track)
    }

    pub fn has_same_track(&self, track: i64) -> bool {
        self.track == track
    }

    pub fn has_same_arrival_time(&self, arrival_time: i64) -> bool {
        self.arrival_time == arrival_time
    }

    /// Orders by arrival time, earliest first.
    pub fn cmp_by_arrival_time(&self, other: &Cylinder) -> Ordering {
        self.arrival_time.cmp(&other.arrival_time)
    }

    pub fn is_track_greater_than(&self, other: &Cylinder) -> bool {
        self.track > other.track
    }

    pub fn is_track_less_than(&self, other: &Cylinder) -> bool {
        self.track < other.track
    }

    pub fn is_track_at_least(&self, track: i64) -> bool {
        self.track >= track
    }

    pub fn is_track_at_most(&self, track: i64) -> bool {
        self.track <= track
    }

    /// Counts one more tick spent unserviced.
    pub fn advance_waiting_time(&mut self) {
        self.waiting_time += 1;
    }
}

impl fmt::Display for Cylinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_with_zero_wait() {
        let c = Cylinder::new(40, 7);
        assert_eq!(c.track(), 40);
        assert_eq!(c.arrival_time(), 7);
        assert_eq!(c.waiting_time(), 0);
    }

    #[test]
    fn test_distance_and_subtract() {
        let c = Cylinder::new(40, 0);
        assert_eq!(c.distance_to(55), 15);
        assert_eq!(c.distance_to(25), 15);
        assert_eq!(c.distance_to(40), 0);
        assert_eq!(c.subtract_track(55), -15);
        assert_eq!(c.subtract_track(25), 15);
    }

    #[test]
    fn test_distance_does_not_overflow() {
        let c = Cylinder::new(i64::MIN, 0);
        assert_eq!(c.distance_to(i64::MAX), u64::MAX);
    }

    #[test]
    fn test_subtract_track_wraps_at_extremes() {
        let c = Cylinder::new(i64::MIN, 0);
        assert_eq!(c.subtract_track(1), i64::MAX);
        assert_eq!(Cylinder::new(i64::MAX, 0).subtract_track(-1), i64::MIN);
    }

    #[test]
    fn test_equality_helpers() {
        let c = Cylinder::new(12, 3);
        assert!(c.has_same_track(12));
        assert!(!c.has_same_track(13));
        assert!(c.has_same_arrival_time(3));
        assert!(!c.has_same_arrival_time(4));
    }

    #[test]
    fn test_arrival_ordering() {
        let early = Cylinder::new(90, 1);
        let late = Cylinder::new(10, 5);
        assert_eq!(early.cmp_by_arrival_time(&late), Ordering::Less);
        assert_eq!(late.cmp_by_arrival_time(&early), Ordering::Greater);
        assert_eq!(early.cmp_by_arrival_time(&early.clone()), Ordering::Equal);
    }

    #[test]
    fn test_relational_helpers() {
        let low = Cylinder::new(10, 0);
        let high = Cylinder::new(20, 0);
        assert!(high.is_track_greater_than(&low));
        assert!(!low.is_track_greater_than(&high));
        assert!(low.is_track_less_than(&high));
        assert!(!high.is_track_less_than(&high.clone()));

        assert!(low.is_track_at_least(10));
        assert!(!low.is_track_at_least(11));
        assert!(low.is_track_at_most(10));
        assert!(!low.is_track_at_most(9));
    }

    #[test]
    fn test_advance_waiting_time() {
        let mut c = Cylinder::new(5, 0);
        for _ in 0..3 {
            c.advance_waiting_time();
        }
        assert_eq!(c.waiting_time(), 3);
    }

    #[test]
    fn test_display_is_track() {
        assert_eq!(Cylinder::new(183, 2).to_string(), "183");
    }
}
