//! Generic parameters functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::de::DeserializeOwned;
use std::fs::read_to_string;
use std::path::Path;
use thiserror::Error;
use toml;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// An error that occurs during loading of a parameter file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot load the parameter file: {0}")]
    FileLoadError(std::io::Error),

    #[error("Cannot read the parameter file: {0}")]
    DeserialiseError(toml::de::Error),
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Load a parameter file in TOML format.
pub fn load<P, F>(param_file_path: F) -> Result<P, LoadError>
where
    P: DeserializeOwned,
    F: AsRef<Path>,
{
    let params_str = match read_to_string(param_file_path) {
        Ok(s) => s,
        Err(e) => return Err(LoadError::FileLoadError(e)),
    };

    match toml::from_str(params_str.as_str()) {
        Ok(p) => Ok(p),
        Err(e) => Err(LoadError::DeserialiseError(e)),
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::comp::Params;

    #[test]
    fn test_load_comp_params() {
        let mut path = std::env::temp_dir();
        path.push("mission_comp_test_params.toml");
        std::fs::write(
            &path,
            "comp_resample_interval_m = 0.5\ndefault_resample_interval_m = 2.0\n",
        )
        .unwrap();

        let params: Params = load(&path).unwrap();
        assert_eq!(params.comp_resample_interval_m, 0.5);
        assert_eq!(params.default_resample_interval_m, 2.0);
    }

    #[test]
    fn test_missing_file() {
        let result: Result<Params, _> = load("/nonexistent/params.toml");
        assert!(matches!(result, Err(LoadError::FileLoadError(_))));
    }
}
