//! # Nearest-point matching
//!
//! Brute-force spatial search: for a query position, find the closest
//! candidate by great-circle distance. The linear scan is O(n) per query,
//! which is a deliberate simplicity-over-throughput choice at the data sizes
//! involved (hundreds to low thousands of points after resampling).

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
use crate::geo::great_circle_distance_m;
use telem_if::Positioned;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Potential errors that can occur during nearest-point matching.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// The candidate set was empty, or no candidate had a valid position.
    /// Signalled distinctly from a zero distance so that "no data" can never
    /// be mistaken for "perfect match".
    #[error("No candidate with a valid position to match against")]
    NoCandidate,
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Find the candidate closest to the query position, returning it along with
/// its great-circle distance in meters.
///
/// Candidates without a valid position are excluded from consideration. On
/// exact distance ties the first candidate in sequence order wins, keeping
/// the result deterministic.
pub fn find_nearest<'a, P>(
    lat_deg: f64,
    lon_deg: f64,
    candidates: &'a [P],
) -> Result<(&'a P, f64), MatchError>
where
    P: Positioned,
{
    let mut nearest: Option<(&P, f64)> = None;

    for cand in candidates {
        let (cand_lat_deg, cand_lon_deg) = match cand.position_deg() {
            Some(pos) => pos,
            None => continue,
        };

        let dist_m = great_circle_distance_m(lat_deg, lon_deg, cand_lat_deg, cand_lon_deg);

        match nearest {
            Some((_, min_dist_m)) if dist_m >= min_dist_m => (),
            _ => nearest = Some((cand, dist_m)),
        }
    }

    nearest.ok_or(MatchError::NoCandidate)
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
