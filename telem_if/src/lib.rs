//! # Telemetry interface crate
//!
//! Provides the data shapes exchanged between the mission analysis engine and
//! its external collaborators: the telemetry-file parser, which produces
//! [`Trajectory`] records from logged session data, and the mission-definition
//! loader, which produces the planned [`Waypoint`] sequence.
//!
//! All types here are plain serde-serializable value types with no behaviour
//! beyond simple accessors. The parsing of the underlying file formats is
//! deliberately not part of this crate.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod mission;
pub mod traj;

// ---------------------------------------------------------------------------
// REEXPORTS
// ---------------------------------------------------------------------------

pub use mission::Waypoint;
pub use traj::{Positioned, Trajectory, TrajectoryPoint};
