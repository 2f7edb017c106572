//! # Session summaries
//!
//! Descriptive summaries of a single session: how far the vehicle actually
//! travelled, the area it covered, and its depth/altitude/heading behaviour,
//! plus the length of the planned route for comparison. These feed the
//! per-session overview of the external report layer and involve no matching
//! between sessions.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
use crate::geo::great_circle_distance_m;
use crate::stats::circular_mean_deg;
use telem_if::{Positioned, Trajectory, Waypoint};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Summary of one recorded trajectory.
///
/// Groups derived from optional telemetry fields are themselves optional: a
/// session whose telemetry carried no depth produces no depth figures at
/// all, rather than zeros.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrajectorySummary {
    /// Total number of telemetry points, valid or not
    pub num_points: usize,

    /// (min, max) latitude over valid points, degrees
    pub lat_range_deg: Option<(f64, f64)>,

    /// (min, max) longitude over valid points, degrees
    pub lon_range_deg: Option<(f64, f64)>,

    /// Mean (latitude, longitude) over valid points, degrees
    pub centre_deg: Option<(f64, f64)>,

    /// Great-circle arc length of the recorded path, meters. Segments with
    /// an invalid endpoint contribute nothing.
    pub distance_travelled_m: f64,

    /// (min, max) recorded depth, meters
    pub depth_range_m: Option<(f64, f64)>,

    /// Mean recorded depth, meters
    pub mean_depth_m: Option<f64>,

    /// (min, max) recorded altitude, meters
    pub alt_range_m: Option<(f64, f64)>,

    /// Mean recorded altitude, meters
    pub mean_alt_m: Option<f64>,

    /// Circular mean of the recorded headings, degrees in [0, 360)
    pub mean_head_deg: Option<f64>,

    /// Time spanned by the trajectory, seconds
    pub duration_s: Option<f64>,
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Summarise a recorded trajectory.
pub fn summarise_trajectory(traj: &Trajectory) -> TrajectorySummary {
    let lats: Vec<f64> = traj.points.iter().filter_map(|p| p.lat_deg).collect();
    let lons: Vec<f64> = traj.points.iter().filter_map(|p| p.lon_deg).collect();
    let depths: Vec<f64> = traj.points.iter().filter_map(|p| p.depth_m).collect();
    let alts: Vec<f64> = traj.points.iter().filter_map(|p| p.alt_m).collect();
    let heads: Vec<f64> = traj.points.iter().filter_map(|p| p.head_deg).collect();

    let mut distance_travelled_m = 0.0;
    for pair in traj.points.windows(2) {
        if let (Some(prev_pos), Some(curr_pos)) =
            (pair[0].position_deg(), pair[1].position_deg())
        {
            distance_travelled_m +=
                great_circle_distance_m(prev_pos.0, prev_pos.1, curr_pos.0, curr_pos.1);
        }
    }

    TrajectorySummary {
        num_points: traj.get_num_points(),
        lat_range_deg: range(&lats),
        lon_range_deg: range(&lons),
        centre_deg: match (mean(&lats), mean(&lons)) {
            (Some(lat_deg), Some(lon_deg)) => Some((lat_deg, lon_deg)),
            _ => None,
        },
        distance_travelled_m,
        depth_range_m: range(&depths),
        mean_depth_m: mean(&depths),
        alt_range_m: range(&alts),
        mean_alt_m: mean(&alts),
        mean_head_deg: circular_mean_deg(&heads),
        duration_s: traj.duration_s(),
    }
}

/// Return the length of the planned route in meters, following the waypoint
/// sequence in order.
pub fn plan_length_m(plan: &[Waypoint]) -> f64 {
    plan.windows(2)
        .map(|pair| {
            great_circle_distance_m(
                pair[0].lat_deg,
                pair[0].lon_deg,
                pair[1].lat_deg,
                pair[1].lon_deg,
            )
        })
        .sum()
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn range(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(values.iter().fold((first, first), |(min, max), v| {
        (min.min(*v), max.max(*v))
    }))
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
