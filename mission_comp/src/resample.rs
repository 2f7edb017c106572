//! # Path resampling
//!
//! Trajectories recorded at different telemetry rates cannot be compared
//! fairly point-for-point: a run logged at 10 Hz would dominate any
//! statistic over a run logged at 1 Hz. Resampling thins each trajectory to
//! a regular along-track spacing first, so that every retained point
//! represents roughly the same amount of travelled path.
//!
//! Resampling is lossy by design. It only drops points, it never
//! interpolates, so the output is always a subsequence of the input.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::debug;

// Internal
use crate::geo::great_circle_distance_m;
use telem_if::{Positioned, Trajectory};

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Produce a copy of the trajectory in which consecutive points are at least
/// `interval_m` apart, measured along the original path's cumulative arc
/// length.
///
/// The first input point is always kept. From there a running distance
/// accumulator is advanced by the great-circle distance between each pair of
/// consecutive input points; whenever it reaches the interval the current
/// point is kept and the accumulator reset. Points without a valid position
/// are skipped and neither advance nor reset the accumulator.
///
/// An empty trajectory yields an empty trajectory; a single point yields
/// that point.
pub fn resample_by_distance(traj: &Trajectory, interval_m: f64) -> Trajectory {
    let first = match traj.points.first() {
        Some(p) => *p,
        None => return Trajectory::new_empty(),
    };

    let mut resampled = vec![first];
    let mut accum_m = 0.0;

    for pair in traj.points.windows(2) {
        let (prev_pos, curr_pos) = match (pair[0].position_deg(), pair[1].position_deg()) {
            (Some(prev_pos), Some(curr_pos)) => (prev_pos, curr_pos),
            _ => continue,
        };

        accum_m +=
            great_circle_distance_m(prev_pos.0, prev_pos.1, curr_pos.0, curr_pos.1);

        if accum_m >= interval_m {
            resampled.push(pair[1]);
            accum_m = 0.0;
        }
    }

    debug!(
        "Resampled trajectory of {} points to {} points at {} m spacing",
        traj.get_num_points(),
        resampled.len(),
        interval_m
    );

    Trajectory { points: resampled }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
