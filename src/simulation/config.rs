//! Simulation driver configuration.

use crate::cylinder::Direction;
use crate::error::{Result, SchedError};

/// Configuration for a C-SCAN simulation run.
///
/// # Examples
///
/// ```
/// use u_disksched::cylinder::Direction;
/// use u_disksched::simulation::SimulationConfig;
///
/// let config = SimulationConfig::default()
///     .with_track_range(0, 199)
///     .with_initial_head(53)
///     .with_direction(Direction::TowardHigh)
///     .with_max_ticks(10_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Head track at the first tick.
    pub initial_head: i64,

    /// Sweep direction. The head services requests moving this way and
    /// flies back the other way.
    pub direction: Direction,

    /// Lowest addressable track (inclusive).
    pub min_track: i64,

    /// Highest addressable track (inclusive).
    pub max_track: i64,

    /// Maximum number of ticks (hard budget). 0 = no limit.
    pub max_ticks: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_head: 0,
            direction: Direction::TowardHigh,
            min_track: 0,
            max_track: 199,
            max_ticks: 0,
        }
    }
}

impl SimulationConfig {
    /// Sets the head track at the first tick.
    pub fn with_initial_head(mut self, track: i64) -> Self {
        self.initial_head = track;
        self
    }

    /// Sets the sweep direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the addressable track range (both ends inclusive).
    pub fn with_track_range(mut self, min_track: i64, max_track: i64) -> Self {
        self.min_track = min_track;
        self.max_track = max_track;
        self
    }

    /// Sets the tick budget (0 = no limit).
    pub fn with_max_ticks(mut self, n: usize) -> Self {
        self.max_ticks = n;
        self
    }

    /// Returns `true` if `track` is addressable under this configuration.
    pub fn contains_track(&self, track: i64) -> bool {
        (self.min_track..=self.max_track).contains(&track)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.min_track > self.max_track {
            return Err(SchedError::InvalidConfig(format!(
                "min_track {} exceeds max_track {}",
                self.min_track, self.max_track
            )));
        }
        if !self.contains_track(self.initial_head) {
            return Err(SchedError::InvalidConfig(format!(
                "initial_head {} outside [{}, {}]",
                self.initial_head, self.min_track, self.max_track
            )));
        }
        Ok(())
    }
}
