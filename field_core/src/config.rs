//! # Run Configuration
//!
//! A run is described by a small JSON document: the coordinate grid to
//! tabulate and the rounding policy to apply. Files are human-readable JSON
//! and pretty-printed on save.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "label": "panel 3 roof",
//!   "grid": {
//!     "x": [0.0, 0.5, 1.0],
//!     "z": [0.0, 0.5, 1.0]
//!   },
//!   "rounding": {
//!     "enabled": false,
//!     "precision": 6,
//!     "direction": "HalfUp"
//!   }
//! }
//! ```
//!
//! The `rounding` block may be omitted entirely, in which case rounding is
//! disabled.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{FieldError, FieldResult};
use crate::rounding::RoundingPolicy;

/// Coordinate mesh for a run: the field is tabulated over the cross product
/// of the two arrays, z outer and x inner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Horizontal coordinates, in output order
    pub x: Vec<f64>,

    /// Vertical coordinates, in output order
    pub z: Vec<f64>,
}

/// Root configuration document for a solve run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// User label for this run (e.g., "panel 3 roof")
    pub label: String,

    /// Coordinate mesh
    pub grid: GridConfig,

    /// Rounding policy; disabled when absent from the file
    #[serde(default)]
    pub rounding: RoundingPolicy,
}

/// Load a run configuration from a JSON file.
///
/// # Returns
///
/// * `Ok(RunConfig)` - successfully parsed configuration
/// * `Err(FieldError::FileError)` - I/O failure
/// * `Err(FieldError::SerializationError)` - malformed JSON
pub fn load_config(path: &Path) -> FieldResult<RunConfig> {
    let json = fs::read_to_string(path).map_err(|e| {
        FieldError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    serde_json::from_str(&json)
        .map_err(|e| FieldError::serialization_error(e.to_string()))
}

/// Save a run configuration to a JSON file, pretty-printed.
pub fn save_config(config: &RunConfig, path: &Path) -> FieldResult<()> {
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| FieldError::serialization_error(e.to_string()))?;

    fs::write(path, json).map_err(|e| {
        FieldError::file_error("write", path.display().to_string(), e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_config_path(name: &str) -> PathBuf {
        temp_dir().join(format!("facefield_test_{}.json", name))
    }

    fn sample_config() -> RunConfig {
        RunConfig {
            label: "test run".to_string(),
            grid: GridConfig {
                x: vec![0.0, 0.5, 1.0],
                z: vec![0.0, 1.0],
            },
            rounding: RoundingPolicy::half_up(6),
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_config_path("roundtrip");

        let config = sample_config();
        save_config(&config, &path).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_rounding_block_optional() {
        let json = r#"{ "label": "bare", "grid": { "x": [1.0], "z": [2.0] } }"#;
        let config: RunConfig = serde_json::from_str(json).unwrap();
        assert!(!config.rounding.enabled);
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let err = load_config(Path::new("/nonexistent/facefield.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let path = temp_config_path("malformed");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }
}
