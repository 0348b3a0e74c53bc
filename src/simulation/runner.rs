//! C-SCAN simulation loop.
//!
//! # Algorithm
//!
//! One track of head travel per tick:
//! 1. Admit every request whose arrival time has come
//! 2. On the scanning leg, service all requests under the head
//! 3. Scanning: step toward the nearest request ahead; with none ahead,
//!    switch to the returning leg
//! 4. Returning: fly back toward the far-end request the next sweep starts
//!    from, switching to scanning once the head reaches it
//! 5. Age every still-pending request by one tick
//!
//! The in-flight target is handed back to the queue with `add_front` each
//! tick, so it stays pending (and keeps aging) until the head reaches it.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::config::SimulationConfig;
use crate::cylinder::{Cylinder, Direction};
use crate::error::{Result, SchedError};
use crate::queue::{CScanQueue, CircularScan, DiskQueue};

/// One serviced request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceRecord {
    pub track: i64,
    pub arrival_time: i64,

    /// Ticks spent pending before service.
    pub waiting_time: u64,

    /// Clock value at which the head serviced the request.
    pub serviced_at: i64,
}

impl ServiceRecord {
    fn new(cylinder: &Cylinder, serviced_at: i64) -> Self {
        Self {
            track: cylinder.track(),
            arrival_time: cylinder.arrival_time(),
            waiting_time: cylinder.waiting_time(),
            serviced_at,
        }
    }
}

/// Outcome of a simulation run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationTrace {
    /// Serviced requests, in service order.
    pub services: Vec<ServiceRecord>,

    /// Head track when the run stopped.
    pub final_head: i64,

    /// Ticks the head spent moving or servicing (idle gaps excluded).
    pub ticks: usize,

    /// Whether the run stopped before servicing everything, on hitting
    /// `max_ticks` or running the clock past `i64::MAX`.
    pub truncated: bool,

    /// Requests left unserviced (non-zero only when truncated).
    pub pending: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leg {
    Scanning,
    Returning,
}

/// Drives a [`CScanQueue`] over a request workload.
pub struct SimulationRunner;

impl SimulationRunner {
    /// Runs the simulation until every request is serviced.
    ///
    /// # Errors
    ///
    /// Fails on an invalid `config` or on a request whose track lies
    /// outside the configured range.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_disksched::cylinder::{Cylinder, Direction};
    /// use u_disksched::simulation::{SimulationConfig, SimulationRunner};
    ///
    /// let requests = [98, 183, 37, 122, 14, 124, 65, 67]
    ///     .into_iter()
    ///     .map(|track| Cylinder::new(track, 0))
    ///     .collect();
    /// let config = SimulationConfig::default()
    ///     .with_initial_head(53)
    ///     .with_direction(Direction::TowardHigh);
    ///
    /// let trace = SimulationRunner::run(requests, &config).unwrap();
    /// let order: Vec<i64> = trace.services.iter().map(|s| s.track).collect();
    /// assert_eq!(order, vec![65, 67, 98, 122, 124, 183, 14, 37]);
    /// ```
    pub fn run(requests: Vec<Cylinder>, config: &SimulationConfig) -> Result<SimulationTrace> {
        config.validate()?;
        if let Some(bad) = requests.iter().find(|c| !config.contains_track(c.track())) {
            return Err(SchedError::TrackOutOfRange {
                track: bad.track(),
                min: config.min_track,
                max: config.max_track,
            });
        }

        let mut arrivals = requests;
        arrivals.sort_by(Cylinder::cmp_by_arrival_time);
        let mut arrivals = VecDeque::from(arrivals);

        let mut queue = CScanQueue::new();
        let mut head = config.initial_head;
        let mut leg = Leg::Scanning;
        let mut clock = arrivals.front().map_or(0, Cylinder::arrival_time);
        let mut ticks = 0usize;
        let mut truncated = false;
        let mut services = Vec::with_capacity(arrivals.len());

        debug!(
            head,
            direction = ?config.direction,
            requests = arrivals.len(),
            "simulation started"
        );

        loop {
            admit(&mut arrivals, &mut queue, clock);

            if leg == Leg::Scanning {
                for cylinder in queue.extract_same_track(head) {
                    trace!(
                        track = head,
                        clock,
                        waiting = cylinder.waiting_time(),
                        "serviced"
                    );
                    services.push(ServiceRecord::new(&cylinder, clock));
                }
            }

            if queue.is_empty() {
                match arrivals.front() {
                    Some(next) => {
                        clock = clock.max(next.arrival_time());
                        continue;
                    }
                    None => break,
                }
            }

            if config.max_ticks > 0 && ticks >= config.max_ticks {
                truncated = true;
                break;
            }

            if leg == Leg::Scanning {
                if let Some(next) = queue.select_next(head, config.direction, false) {
                    if config.direction.is_ahead(head, next.track()) {
                        head = step_toward(head, next.track());
                    } else {
                        debug!(head, clock, far_end = next.track(), "sweep exhausted");
                        leg = Leg::Returning;
                    }
                    queue.add_front(next);
                }
            }

            if leg == Leg::Returning {
                if let Some(next) = queue.select_next(head, config.direction.reverse(), true) {
                    if !next.has_same_track(head) {
                        head = step_toward(head, next.track());
                    }
                    if next.has_same_track(head) {
                        debug!(head, clock, "flyback complete");
                        leg = Leg::Scanning;
                    }
                    queue.add_front(next);
                }
            }

            queue.advance_waiting_time();
            ticks += 1;
            match clock.checked_add(1) {
                Some(next) => clock = next,
                None => {
                    debug!(clock, "clock exhausted");
                    truncated = true;
                    break;
                }
            }
        }

        let pending = queue.len() + arrivals.len();
        debug!(
            serviced = services.len(),
            pending,
            ticks,
            truncated,
            "simulation finished"
        );

        Ok(SimulationTrace {
            services,
            final_head: head,
            ticks,
            truncated,
            pending,
        })
    }
}

/// Moves every request that has arrived by `clock` into the queue.
fn admit(arrivals: &mut VecDeque<Cylinder>, queue: &mut CScanQueue, clock: i64) {
    while let Some(next) = arrivals.front() {
        if next.arrival_time() > clock {
            break;
        }
        if let Some(cylinder) = arrivals.pop_front() {
            queue.add(cylinder);
        }
    }
}

fn step_toward(head: i64, track: i64) -> i64 {
    match Direction::toward(head, track) {
        Some(direction) => direction.step(head),
        None => head,
    }
}
