//! Head sweep orientation.

/// Orientation of the disk head along the track axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Toward lower track numbers (LEFT).
    TowardLow,

    /// Toward higher track numbers (RIGHT).
    TowardHigh,
}

impl Direction {
    /// Returns the opposite direction.
    ///
    /// Involutive: `d.reverse().reverse() == d`.
    pub fn reverse(self) -> Self {
        match self {
            Direction::TowardLow => Direction::TowardHigh,
            Direction::TowardHigh => Direction::TowardLow,
        }
    }

    /// Returns `true` if `track` lies ahead of `head` in this direction.
    ///
    /// Inclusive: a track exactly at the head is always ahead.
    pub fn is_ahead(self, head: i64, track: i64) -> bool {
        match self {
            Direction::TowardLow => track <= head,
            Direction::TowardHigh => track >= head,
        }
    }

    /// Moves `position` one track in this direction.
    pub fn step(self, position: i64) -> i64 {
        match self {
            Direction::TowardLow => position - 1,
            Direction::TowardHigh => position + 1,
        }
    }

    /// Direction of travel from `from` to `to`, or `None` when they coincide.
    pub fn toward(from: i64, to: i64) -> Option<Self> {
        match to.cmp(&from) {
            std::cmp::Ordering::Less => Some(Direction::TowardLow),
            std::cmp::Ordering::Greater => Some(Direction::TowardHigh),
            std::cmp::Ordering::Equal => None,
        }
    }
}
