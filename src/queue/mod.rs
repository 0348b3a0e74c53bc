//! Pending-request queues for disk-head scheduling disciplines.
//!
//! Every discipline implements [`DiskQueue`] (admit, inspect, age). The
//! circular-scan discipline adds [`CircularScan`] on top: front insertion,
//! same-track batch extraction, and wrap-aware selection.
//!
//! # Disciplines
//!
//! - [`CScanQueue`]: Circular SCAN, the one the simulation driver runs
//! - [`FcfsQueue`]: first-come, first-served by arrival time
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, *Operating System Concepts*, ch. "Disk Scheduling"
//! - Worthington, Ganger & Patt (1994), "Scheduling Algorithms for Modern Disk Drives"

mod cscan;
mod fcfs;
mod types;

pub use cscan::CScanQueue;
pub use fcfs::FcfsQueue;
pub use types::{CircularScan, DiskQueue};
