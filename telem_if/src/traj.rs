//! # Trajectory data structures
//!
//! A [`Trajectory`] is the ordered sequence of positions and attributes an
//! AUV reported over a single session, as recovered by the external telemetry
//! parser. Points are stored in temporal order and are never re-sorted here,
//! the parser is responsible for delivering them sorted by time.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::warn;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// A record which may carry a geodetic position.
///
/// Implemented by both [`TrajectoryPoint`] and [`crate::Waypoint`] so that
/// spatial matching can run over either a recorded path or a planned waypoint
/// list without caring which it has been given.
pub trait Positioned {
    /// Return the (latitude, longitude) pair in degrees, or `None` if the
    /// record has no valid position.
    fn position_deg(&self) -> Option<(f64, f64)>;
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A single telemetry sample from a recorded session.
///
/// Partial telemetry loss is expected, so every field other than the time
/// reference is optional. A point missing either latitude or longitude has no
/// usable position and will be skipped (not rejected) by the analysis engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Seconds since the start of the session, or an ordinal index if the
    /// source format carries no time reference.
    pub time_s: f64,

    /// Latitude in degrees, in [-90, 90] when present
    pub lat_deg: Option<f64>,

    /// Longitude in degrees, in [-180, 180] when present
    pub lon_deg: Option<f64>,

    /// Depth below the surface in meters
    pub depth_m: Option<f64>,

    /// Altitude above the seabed in meters
    pub alt_m: Option<f64>,

    /// Heading in degrees, in [0, 360)
    pub head_deg: Option<f64>,
}

/// An ordered sequence of [`TrajectoryPoint`]s, insertion order being
/// temporal order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trajectory {
    pub points: Vec<TrajectoryPoint>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl TrajectoryPoint {
    /// Create a point carrying only a time reference and position.
    pub fn new(time_s: f64, lat_deg: f64, lon_deg: f64) -> Self {
        Self {
            time_s,
            lat_deg: Some(lat_deg),
            lon_deg: Some(lon_deg),
            depth_m: None,
            alt_m: None,
            head_deg: None,
        }
    }
}

impl Positioned for TrajectoryPoint {
    fn position_deg(&self) -> Option<(f64, f64)> {
        match (self.lat_deg, self.lon_deg) {
            (Some(lat_deg), Some(lon_deg)) => Some((lat_deg, lon_deg)),
            _ => None,
        }
    }
}

impl Trajectory {
    /// Create a new empty trajectory
    pub fn new_empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a trajectory from a sequence of points.
    ///
    /// The points are assumed to already be in temporal order. An
    /// out-of-order time reference is logged as a warning but the sequence is
    /// kept as given, sorting is the parser's responsibility.
    pub fn from_points(points: Vec<TrajectoryPoint>) -> Self {
        if points.windows(2).any(|p| p[1].time_s < p[0].time_s) {
            warn!("Trajectory points are not in chronological order");
        }

        Self { points }
    }

    /// Get the number of points in the trajectory
    pub fn get_num_points(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Return the time spanned by the trajectory in seconds.
    ///
    /// If the trajectory has fewer than two points `None` is returned.
    pub fn duration_s(&self) -> Option<f64> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => {
                Some(last.time_s - first.time_s)
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_position_requires_both_coords() {
        let mut point = TrajectoryPoint::new(0.0, 10.0, 20.0);
        assert_eq!(point.position_deg(), Some((10.0, 20.0)));

        point.lon_deg = None;
        assert_eq!(point.position_deg(), None);

        point.lon_deg = Some(20.0);
        point.lat_deg = None;
        assert_eq!(point.position_deg(), None);
    }

    #[test]
    fn test_duration() {
        assert_eq!(Trajectory::new_empty().duration_s(), None);

        let single = Trajectory::from_points(vec![TrajectoryPoint::new(5.0, 0.0, 0.0)]);
        assert_eq!(single.duration_s(), None);

        let traj = Trajectory::from_points(vec![
            TrajectoryPoint::new(10.0, 0.0, 0.0),
            TrajectoryPoint::new(15.0, 0.0, 0.001),
            TrajectoryPoint::new(32.5, 0.0, 0.002),
        ]);
        assert_eq!(traj.duration_s(), Some(22.5));
    }

    #[test]
    fn test_point_from_parser_json() {
        // The shape the external telemetry parser hands over, including
        // fields it could not recover from the source file
        let point: TrajectoryPoint = serde_json::from_str(
            r#"{
                "time_s": 12.5,
                "lat_deg": 59.1,
                "lon_deg": 10.2,
                "depth_m": 3.4,
                "alt_m": null,
                "head_deg": 271.0
            }"#,
        )
        .unwrap();

        assert_eq!(point.time_s, 12.5);
        assert_eq!(point.position_deg(), Some((59.1, 10.2)));
        assert_eq!(point.depth_m, Some(3.4));
        assert_eq!(point.alt_m, None);
        assert_eq!(point.head_deg, Some(271.0));
    }
}
