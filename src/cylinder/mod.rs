//! Request entities for disk-head scheduling.
//!
//! - [`Cylinder`]: one pending access (track, arrival time, waiting time)
//! - [`Direction`]: head sweep orientation
//! - [`CylinderBatch`]: same-track requests extracted together

mod batch;
mod direction;
mod types;

pub use batch::CylinderBatch;
pub use direction::Direction;
pub use types::Cylinder;
