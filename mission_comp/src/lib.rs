//! # Mission comparison library
//!
//! Quantifies how well repeated AUV missions over the same planned route
//! agree with each other, and how well each of them followed the plan:
//!
//! - **Precision**: how closely two independently recorded runs track each
//!   other. Both trajectories are thinned to a regular along-track spacing,
//!   then every point of one run is charged against its nearest neighbour in
//!   the other.
//! - **Accuracy**: how closely a recorded run tracks the planned waypoint
//!   sequence, using the same nearest-point matching against the (already
//!   sparse) waypoint list.
//!
//! Raw per-point deviations are reduced to descriptive statistics (mean,
//! median, standard deviation, RMS, 95th percentile) by the [`stats`] module.
//! The library performs no I/O of its own beyond optional parameter file
//! loading; trajectories and waypoint lists arrive fully materialised via
//! the [`telem_if`] types and results are plain serializable values for the
//! embedding report generator to render.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod comp;
pub mod geo;
pub mod matcher;
pub mod params;
pub mod resample;
pub mod stats;
pub mod summary;

// ---------------------------------------------------------------------------
// REEXPORTS
// ---------------------------------------------------------------------------

pub use telem_if;
