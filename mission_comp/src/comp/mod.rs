//! # Path comparison module
//!
//! The orchestration layer of the engine. Two comparisons are provided:
//!
//! - [`PathComparator::compare_pair`] — precision: how far two independently
//!   recorded runs of the same route diverge from each other.
//! - [`PathComparator::compare_to_plan`] — accuracy: how far a recorded run
//!   strays from the planned waypoint sequence.
//!
//! Both resample the recorded trajectories to a regular along-track spacing
//! before matching, so that runs logged at different telemetry rates weigh
//! equally in the statistics. An N-way precision analysis over a whole set
//! of sessions is available through [`PathComparator::precision_matrix`].

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod accuracy;
pub mod pairwise;
mod params;

pub use accuracy::{PlanDeviations, PlanSummary};
pub use pairwise::{PairwiseDeviations, PairwiseSummary};
pub use params::Params;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
use telem_if::{Trajectory, Waypoint};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Compares recorded trajectories against each other and against mission
/// plans.
///
/// Holds only the comparison parameters; all inputs are borrowed per call
/// and never mutated, so one comparator can serve any number of independent
/// comparisons.
#[derive(Debug, Clone, Default)]
pub struct PathComparator {
    params: Params,
}

/// The precision result for one pair of sessions out of an N-way comparison.
#[derive(Debug, Clone, Serialize)]
pub struct PairPrecision {
    /// Name of the session whose points were matched (the A side)
    pub session_a: String,

    /// Name of the session matched against (the B side)
    pub session_b: String,

    /// The per-point deviations between the pair
    pub deviations: PairwiseDeviations,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl PathComparator {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    /// Quantify how far two recorded runs of the same route diverge from
    /// each other.
    ///
    /// Both trajectories are resampled at the comparison interval, then each
    /// point of `traj_a` is charged against its nearest neighbour in
    /// `traj_b`. The matching is deliberately one-directional; callers
    /// wanting the B-against-A view call again with the arguments swapped.
    ///
    /// If either trajectory has no usable telemetry the result is empty, not
    /// an error, so an N-way analysis can continue past a bad session.
    pub fn compare_pair(&self, traj_a: &Trajectory, traj_b: &Trajectory) -> PairwiseDeviations {
        pairwise::compare_pair(traj_a, traj_b, self.params.comp_resample_interval_m)
    }

    /// Quantify how closely a recorded run followed the planned waypoint
    /// sequence.
    ///
    /// The trajectory is resampled at the comparison interval; the waypoint
    /// list is assumed already sparse and searched in full. Only position
    /// and depth deviations are produced, waypoints carry no achieved
    /// heading or altitude to compare against.
    pub fn compare_to_plan(&self, traj: &Trajectory, plan: &[Waypoint]) -> PlanDeviations {
        accuracy::compare_to_plan(traj, plan, self.params.comp_resample_interval_m)
    }

    /// Run the pairwise precision comparison over every unordered pair of
    /// the given named sessions.
    pub fn precision_matrix(&self, sessions: &[(String, Trajectory)]) -> Vec<PairPrecision> {
        let mut results = Vec::new();

        for i in 0..sessions.len() {
            for j in (i + 1)..sessions.len() {
                let (ref name_a, ref traj_a) = sessions[i];
                let (ref name_b, ref traj_b) = sessions[j];

                results.push(PairPrecision {
                    session_a: name_a.clone(),
                    session_b: name_b.clone(),
                    deviations: self.compare_pair(traj_a, traj_b),
                });
            }
        }

        results
    }

    /// Get the parameters the comparator was built with
    pub fn get_params(&self) -> &Params {
        &self.params
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use telem_if::TrajectoryPoint;

    fn line(lon_offset_deg: f64) -> Trajectory {
        let points = (0..20)
            .map(|i| TrajectoryPoint::new(i as f64, 0.0, i as f64 * 1e-5 + lon_offset_deg))
            .collect();
        Trajectory::from_points(points)
    }

    #[test]
    fn test_precision_matrix_pairs() {
        let sessions = vec![
            (String::from("session_0074"), line(0.0)),
            (String::from("session_0076"), line(1e-5)),
            (String::from("session_0079"), line(2e-5)),
        ];

        let matrix = PathComparator::default().precision_matrix(&sessions);

        assert_eq!(matrix.len(), 3);
        let keys: Vec<(&str, &str)> = matrix
            .iter()
            .map(|p| (p.session_a.as_str(), p.session_b.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("session_0074", "session_0076"),
                ("session_0074", "session_0079"),
                ("session_0076", "session_0079"),
            ]
        );

        for pair in &matrix {
            assert!(!pair.deviations.position_m.is_empty());
        }
    }
}
