//! # Deviation statistics
//!
//! Reduces a list of scalar deviations (meters or degrees) into the
//! descriptive statistics reported for precision and accuracy. An empty
//! sample set produces `None` rather than a zero-filled summary, so callers
//! can never mistake "no measurement" for "zero error".

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Descriptive statistics over one group of deviation samples.
///
/// Recomputed fresh on every call to [`summarise`], never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSummary {
    /// Number of samples the summary was computed over
    pub count: usize,

    /// Arithmetic mean
    pub mean: f64,

    /// Median, the average of the two middle values for even counts
    pub median: f64,

    /// Sample standard deviation (n - 1 divisor), 0 when count <= 1
    pub std_dev: f64,

    /// Smallest sample
    pub min: f64,

    /// Largest sample
    pub max: f64,

    /// Root-mean-square of the samples
    pub rms: f64,

    /// The value at sorted zero-based index floor(0.95 * count). For 20 or
    /// fewer samples this is the maximum, small sample sets get no distinct
    /// tail estimate.
    pub percentile_95: f64,
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Summarise a list of deviation values.
///
/// Returns `None` when `values` is empty.
pub fn summarise(values: &[f64]) -> Option<StatsSummary> {
    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let n = count as f64;

    let mean = values.iter().sum::<f64>() / n;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    let std_dev = if count > 1 {
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        var.sqrt()
    } else {
        0.0
    };

    let rms = (values.iter().map(|v| v * v).sum::<f64>() / n).sqrt();

    let percentile_95 = sorted[(0.95 * n) as usize];

    Some(StatsSummary {
        count,
        mean,
        median,
        std_dev,
        min: sorted[0],
        max: sorted[count - 1],
        rms,
        percentile_95,
    })
}

/// Return the circular mean of a set of headings in degrees.
///
/// The samples are averaged as unit vectors so that headings straddling the
/// 0/360 wrap (e.g. 350 and 10) average to 0, not 180. The result is in
/// [0, 360); `None` is returned for an empty sample set.
pub fn circular_mean_deg(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let (sin_sum, cos_sum) = values.iter().fold((0.0f64, 0.0f64), |(s, c), v| {
        let rad = v.to_radians();
        (s + rad.sin(), c + rad.cos())
    });

    Some(sin_sum.atan2(cos_sum).to_degrees().rem_euclid(360.0))
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
