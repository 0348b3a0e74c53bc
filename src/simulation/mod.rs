//! Tick-based C-SCAN simulation driver.
//!
//! Admits requests at their arrival times, moves the head one track per
//! tick, and records when each request is serviced. The result is a raw
//! service trace; summarizing it is left to the caller.
//!
//! # Key Types
//!
//! - [`SimulationConfig`]: head start, sweep direction, track range, tick budget
//! - [`SimulationRunner`]: executes the tick loop over a [`CScanQueue`](crate::queue::CScanQueue)
//! - [`SimulationTrace`] / [`ServiceRecord`]: per-request service trace
//! - [`Workload`]: seeded random request generator

mod config;
mod runner;
mod workload;

pub use config::SimulationConfig;
pub use runner::{ServiceRecord, SimulationRunner, SimulationTrace};
pub use workload::Workload;
