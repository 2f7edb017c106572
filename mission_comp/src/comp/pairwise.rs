//! Pairwise (precision) comparison of two recorded trajectories

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::warn;
use serde::Serialize;

// Internal
use crate::geo::circular_diff_deg;
use crate::matcher::{find_nearest, MatchError};
use crate::resample::resample_by_distance;
use crate::stats::{summarise, StatsSummary};
use telem_if::{Positioned, Trajectory};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Per-point deviations produced by matching one run against another.
///
/// Position deviations exist for every matched point; the other groups only
/// collect a sample when both the query point and its match carry the
/// corresponding field, so the groups generally have different lengths.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PairwiseDeviations {
    /// Great-circle distance to the nearest matched point, meters
    pub position_m: Vec<f64>,

    /// Absolute depth difference to the matched point, meters
    pub depth_m: Vec<f64>,

    /// Absolute altitude difference to the matched point, meters
    pub alt_m: Vec<f64>,

    /// Circular heading difference to the matched point, degrees in [0, 180]
    pub head_deg: Vec<f64>,
}

/// Statistical summaries of each pairwise deviation group.
///
/// A group with no samples summarises to `None` rather than zeros.
#[derive(Debug, Clone, Serialize)]
pub struct PairwiseSummary {
    pub position: Option<StatsSummary>,
    pub depth: Option<StatsSummary>,
    pub alt: Option<StatsSummary>,
    pub head: Option<StatsSummary>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl PairwiseDeviations {
    /// True if no deviation of any kind was recorded
    pub fn is_empty(&self) -> bool {
        self.position_m.is_empty()
            && self.depth_m.is_empty()
            && self.alt_m.is_empty()
            && self.head_deg.is_empty()
    }

    /// Reduce each deviation group to its descriptive statistics
    pub fn summarise(&self) -> PairwiseSummary {
        PairwiseSummary {
            position: summarise(&self.position_m),
            depth: summarise(&self.depth_m),
            alt: summarise(&self.alt_m),
            head: summarise(&self.head_deg),
        }
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Compare two recorded trajectories, charging every resampled point of
/// `traj_a` against its nearest neighbour in resampled `traj_b`.
///
/// Returns empty deviation groups when either trajectory resamples to
/// nothing usable.
pub fn compare_pair(
    traj_a: &Trajectory,
    traj_b: &Trajectory,
    interval_m: f64,
) -> PairwiseDeviations {
    let mut devs = PairwiseDeviations::default();

    let res_a = resample_by_distance(traj_a, interval_m);
    let res_b = resample_by_distance(traj_b, interval_m);

    if res_a.is_empty() || res_b.is_empty() {
        warn!("Pairwise comparison of an empty trajectory, no deviations produced");
        return devs;
    }

    for point in &res_a.points {
        let (lat_deg, lon_deg) = match point.position_deg() {
            Some(pos) => pos,
            None => continue,
        };

        let (nearest, dist_m) = match find_nearest(lat_deg, lon_deg, &res_b.points) {
            Ok(n) => n,
            // No valid candidate in B at all, so no query can ever match
            Err(MatchError::NoCandidate) => break,
        };

        devs.position_m.push(dist_m);

        if let (Some(depth_a_m), Some(depth_b_m)) = (point.depth_m, nearest.depth_m) {
            devs.depth_m.push((depth_a_m - depth_b_m).abs());
        }

        if let (Some(alt_a_m), Some(alt_b_m)) = (point.alt_m, nearest.alt_m) {
            devs.alt_m.push((alt_a_m - alt_b_m).abs());
        }

        if let (Some(head_a_deg), Some(head_b_deg)) = (point.head_deg, nearest.head_deg) {
            devs.head_deg.push(circular_diff_deg(head_a_deg, head_b_deg));
        }
    }

    devs
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use telem_if::TrajectoryPoint;

    /// Two-point equatorial path offset east by the given amount
    fn offset_pair(lon_offset_deg: f64) -> Trajectory {
        Trajectory::from_points(vec![
            TrajectoryPoint::new(0.0, 0.0, lon_offset_deg),
            TrajectoryPoint::new(1.0, 0.0, 0.001 + lon_offset_deg),
        ])
    }

    #[test]
    fn test_uniform_offset_runs() {
        // B is A shifted ~55.6 m east, so every deviation should cluster
        // there with near-zero spread
        let traj_a = offset_pair(0.0);
        let traj_b = offset_pair(0.0005);

        let devs = compare_pair(&traj_a, &traj_b, 0.5);
        let summary = devs.summarise().position.unwrap();

        assert_eq!(summary.count, 2);
        assert!(summary.mean > 55.0 && summary.mean < 57.0);
        assert!(summary.std_dev < 0.01);
    }

    #[test]
    fn test_empty_inputs_give_empty_result() {
        let traj = offset_pair(0.0);
        let empty = Trajectory::new_empty();

        assert!(compare_pair(&traj, &empty, 0.5).is_empty());
        assert!(compare_pair(&empty, &traj, 0.5).is_empty());

        let summary = compare_pair(&traj, &empty, 0.5).summarise();
        assert!(summary.position.is_none());
        assert!(summary.depth.is_none());
        assert!(summary.alt.is_none());
        assert!(summary.head.is_none());
    }

    #[test]
    fn test_optional_fields_compared_when_present() {
        let mut traj_a = offset_pair(0.0);
        let mut traj_b = offset_pair(0.0005);

        for point in traj_a.points.iter_mut() {
            point.depth_m = Some(10.0);
            point.head_deg = Some(350.0);
        }
        for point in traj_b.points.iter_mut() {
            point.depth_m = Some(12.5);
            point.head_deg = Some(10.0);
        }
        // Altitude only on one side, so no altitude deviations
        traj_a.points[0].alt_m = Some(2.0);

        let devs = compare_pair(&traj_a, &traj_b, 0.5);

        assert_eq!(devs.depth_m, vec![2.5, 2.5]);
        assert_eq!(devs.head_deg, vec![20.0, 20.0]);
        assert!(devs.alt_m.is_empty());
    }

    #[test]
    fn test_summary_serialises_for_report_layer() {
        let devs = compare_pair(&offset_pair(0.0), &offset_pair(0.0005), 0.5);
        let json = serde_json::to_string(&devs.summarise()).unwrap();

        // The report layer reads the position group's fields by name
        assert!(json.contains("\"position\""));
        assert!(json.contains("\"mean\""));
        assert!(json.contains("\"percentile_95\""));
        assert!(json.contains("\"depth\":null"));
    }

    #[test]
    fn test_asymmetric_by_design() {
        // A dense run against a sparse run does not give the same sample
        // count as the reverse
        let dense = Trajectory::from_points(
            (0..50)
                .map(|i| TrajectoryPoint::new(i as f64, 0.0, i as f64 * 1e-5))
                .collect(),
        );
        let sparse = Trajectory::from_points(vec![
            TrajectoryPoint::new(0.0, 0.0, 0.0),
            TrajectoryPoint::new(1.0, 0.0, 5e-4),
        ]);

        let a_vs_b = compare_pair(&dense, &sparse, 0.5);
        let b_vs_a = compare_pair(&sparse, &dense, 0.5);

        assert!(a_vs_b.position_m.len() > b_vs_a.position_m.len());
    }
}
