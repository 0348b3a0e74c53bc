//! Disk-head scheduling simulation.
//!
//! Provides the selection engine for the Circular SCAN (C-SCAN) discipline
//! and a small driver around it:
//!
//! - **Cylinder**: a pending track access with arrival and waiting time,
//!   plus the sweep [`Direction`](cylinder::Direction).
//! - **Queue**: the [`DiskQueue`](queue::DiskQueue) contract shared by
//!   disciplines, and the C-SCAN engine that picks the next request from
//!   head position, sweep direction, and whether the head is on the
//!   flyback leg.
//! - **Simulation**: a tick loop that drives the engine over a workload
//!   and records a per-request service trace.
//!
//! # Architecture
//!
//! The engine is synchronous and single-owner: a queue owns its pending
//! requests, and every selection hands the chosen request to the caller
//! by value. Statistics, rendering, and persistence are left to consumers.

pub mod cylinder;
pub mod error;
pub mod queue;
pub mod simulation;

pub use error::{Result, SchedError};
