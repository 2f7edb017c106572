//! # Mission definition data structures
//!
//! The planned side of a session: the compiled waypoint sequence produced by
//! the external mission-definition loader. Waypoints are ordered as planned,
//! but accuracy analysis treats them as an unordered candidate set and
//! matches purely by distance.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};

// Internal
use crate::traj::Positioned;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A single planned waypoint.
///
/// Unlike [`crate::TrajectoryPoint`] a waypoint always has a position;
/// mission definitions without coordinates are dropped by the loader before
/// they reach this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Latitude in degrees
    pub lat_deg: f64,

    /// Longitude in degrees
    pub lon_deg: f64,

    /// Target depth in meters, 0 if the plan does not specify one
    #[serde(default)]
    pub depth_m: f64,

    /// Planned yaw in degrees, 0 if the plan does not specify one
    #[serde(default)]
    pub yaw_deg: f64,

    /// Opaque control mode label from the mission definition
    #[serde(default = "default_control_mode")]
    pub control_mode: String,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Positioned for Waypoint {
    fn position_deg(&self) -> Option<(f64, f64)> {
        Some((self.lat_deg, self.lon_deg))
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn default_control_mode() -> String {
    String::from("unknown")
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_waypoint_defaults() {
        // A minimal compiled waypoint as delivered by the mission loader
        let wp: Waypoint = serde_json::from_str(
            r#"{ "lat_deg": -33.85, "lon_deg": 151.21 }"#,
        )
        .unwrap();

        assert_eq!(wp.depth_m, 0.0);
        assert_eq!(wp.yaw_deg, 0.0);
        assert_eq!(wp.control_mode, "unknown");
        assert_eq!(wp.position_deg(), Some((-33.85, 151.21)));
    }
}
