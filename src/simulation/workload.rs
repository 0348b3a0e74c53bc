//! Random request workloads.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cylinder::Cylinder;
use crate::error::{Result, SchedError};

/// Generator for uniformly distributed request sets.
///
/// # Examples
///
/// ```
/// use u_disksched::simulation::Workload;
///
/// let requests = Workload::new(0, 199)
///     .with_count(50)
///     .with_max_arrival(100)
///     .with_seed(42)
///     .generate()
///     .unwrap();
/// assert_eq!(requests.len(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct Workload {
    /// Lowest track to draw (inclusive).
    pub min_track: i64,

    /// Highest track to draw (inclusive).
    pub max_track: i64,

    /// Number of requests.
    pub count: usize,

    /// Arrival times are drawn from `0..=max_arrival`. 0 = all at once.
    pub max_arrival: i64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Workload {
    /// Creates a generator over `min_track..=max_track` (8 requests, all arriving at 0).
    pub fn new(min_track: i64, max_track: i64) -> Self {
        Self {
            min_track,
            max_track,
            count: 8,
            max_arrival: 0,
            seed: None,
        }
    }

    /// Sets the number of requests.
    pub fn with_count(mut self, n: usize) -> Self {
        self.count = n;
        self
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, t: i64) -> Self {
        self.max_arrival = t;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draws the requests, in arrival-agnostic generation order.
    pub fn generate(&self) -> Result<Vec<Cylinder>> {
        if self.min_track > self.max_track {
            return Err(SchedError::InvalidConfig(format!(
                "workload min_track {} exceeds max_track {}",
                self.min_track, self.max_track
            )));
        }
        if self.max_arrival < 0 {
            return Err(SchedError::InvalidConfig(format!(
                "workload max_arrival must be non-negative, got {}",
                self.max_arrival
            )));
        }

        let mut rng = StdRng::seed_from_u64(self.seed.unwrap_or_else(rand::random));

        Ok((0..self.count)
            .map(|_| {
                let track = rng.random_range(self.min_track..=self.max_track);
                let arrival = rng.random_range(0..=self.max_arrival);
                Cylinder::new(track, arrival)
            })
            .collect())
    }
}
