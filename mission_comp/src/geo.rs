//! Utility geodesy functions
//!
//! Every distance in the library is computed by [`great_circle_distance_m`]
//! so that the numeric behaviour of all downstream metrics stays consistent.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Mean Earth radius in meters used by the spherical-earth approximation
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Return the great-circle distance in meters between two (latitude,
/// longitude) pairs given in degrees.
///
/// Uses the haversine formula, which keeps its accuracy at all latitudes
/// unlike an equirectangular approximation.
pub fn great_circle_distance_m(
    lat_0_deg: f64,
    lon_0_deg: f64,
    lat_1_deg: f64,
    lon_1_deg: f64,
) -> f64 {
    let lat_0_rad = lat_0_deg.to_radians();
    let lat_1_rad = lat_1_deg.to_radians();
    let dlat_rad = (lat_1_deg - lat_0_deg).to_radians();
    let dlon_rad = (lon_1_deg - lon_0_deg).to_radians();

    let a = (dlat_rad / 2.0).sin().powi(2)
        + lat_0_rad.cos() * lat_1_rad.cos() * (dlon_rad / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Get the unsigned angular difference between two headings in degrees,
/// accounting for wrapping at 360.
///
/// The result is always in the range [0, 180] and is symmetric in its
/// arguments.
pub fn circular_diff_deg<T>(a: T, b: T) -> T
where
    T: Float,
{
    let full_turn: T = T::from(360.0).unwrap();
    let half_turn: T = T::from(180.0).unwrap();

    let diff = ((a - b).abs()) % full_turn;

    if diff > half_turn {
        full_turn - diff
    } else {
        diff
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
