//! Accuracy comparison of a recorded trajectory against the planned route

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::warn;
use serde::Serialize;

// Internal
use crate::matcher::{find_nearest, MatchError};
use crate::resample::resample_by_distance;
use crate::stats::{summarise, StatsSummary};
use telem_if::{Positioned, Trajectory, Waypoint};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Per-point deviations between a recorded run and its planned waypoints.
///
/// Only position and depth are compared: waypoints carry a planned yaw, not
/// an achieved heading, and carry no altitude, so comparing those would not
/// be meaningful.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlanDeviations {
    /// Great-circle distance to the nearest planned waypoint, meters
    pub position_m: Vec<f64>,

    /// Absolute difference between recorded depth and the nearest waypoint's
    /// target depth, meters
    pub depth_m: Vec<f64>,
}

/// Statistical summaries of the accuracy deviation groups.
#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary {
    pub position: Option<StatsSummary>,
    pub depth: Option<StatsSummary>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl PlanDeviations {
    /// True if no deviation of any kind was recorded
    pub fn is_empty(&self) -> bool {
        self.position_m.is_empty() && self.depth_m.is_empty()
    }

    /// Reduce each deviation group to its descriptive statistics
    pub fn summarise(&self) -> PlanSummary {
        PlanSummary {
            position: summarise(&self.position_m),
            depth: summarise(&self.depth_m),
        }
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Compare a recorded trajectory against the planned waypoint sequence.
///
/// The trajectory is resampled at the given interval; the waypoint list is
/// assumed already sparse and is searched in full, as an unordered candidate
/// set. Returns empty deviation groups when either input is empty.
pub fn compare_to_plan(
    traj: &Trajectory,
    plan: &[Waypoint],
    interval_m: f64,
) -> PlanDeviations {
    let mut devs = PlanDeviations::default();

    if plan.is_empty() {
        warn!("Accuracy comparison against an empty plan, no deviations produced");
        return devs;
    }

    let resampled = resample_by_distance(traj, interval_m);

    for point in &resampled.points {
        let (lat_deg, lon_deg) = match point.position_deg() {
            Some(pos) => pos,
            None => continue,
        };

        let (nearest_wp, dist_m) = match find_nearest(lat_deg, lon_deg, plan) {
            Ok(n) => n,
            Err(MatchError::NoCandidate) => break,
        };

        devs.position_m.push(dist_m);

        if let Some(depth_m) = point.depth_m {
            devs.depth_m.push((depth_m - nearest_wp.depth_m).abs());
        }
    }

    devs
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
