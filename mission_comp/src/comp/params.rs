//! Path comparison parameters

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Deserialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for path comparison
#[derive(Debug, Clone, Deserialize)]
pub struct Params {
    /// Resample interval applied to trajectories before statistical
    /// comparison
    #[serde(default = "default_comp_resample_interval_m")]
    pub comp_resample_interval_m: f64,

    /// Resample interval for generic path thinning outside of comparisons,
    /// for example before handing a trajectory to a plotting layer
    #[serde(default = "default_resample_interval_m")]
    pub default_resample_interval_m: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Self {
            comp_resample_interval_m: default_comp_resample_interval_m(),
            default_resample_interval_m: default_resample_interval_m(),
        }
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn default_comp_resample_interval_m() -> f64 {
    0.5
}

fn default_resample_interval_m() -> f64 {
    1.0
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = Params::default();
        assert_eq!(params.comp_resample_interval_m, 0.5);
        assert_eq!(params.default_resample_interval_m, 1.0);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let params: Params = toml::from_str("comp_resample_interval_m = 0.25").unwrap();
        assert_eq!(params.comp_resample_interval_m, 0.25);
        assert_eq!(params.default_resample_interval_m, 1.0);
    }
}
