//! File-backed settings for the `inkmark` entry points.

use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::error::{InkmarkError, InkmarkResult},
    raster::threshold::ThresholdConfig,
    shape::generator::ShapeStyle,
};

/// Top-level JSON config. Every section and field is optional.
///
/// ```json
/// {
///   "shape": { "thickness": 4.0, "ink": { "kind": "marker" } },
///   "threshold": { "parallel": true, "threads": 4 }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InkmarkConfig {
    /// Style applied to generated shapes.
    #[serde(default)]
    pub shape: ShapeStyle,
    /// Threshold pass settings.
    #[serde(default)]
    pub threshold: ThresholdConfig,
}

impl InkmarkConfig {
    /// Parse a config from a JSON reader. Does not validate.
    pub fn from_reader<R: std::io::Read>(r: R) -> InkmarkResult<Self> {
        serde_json::from_reader(r).map_err(|e| InkmarkError::serde(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON string. Does not validate.
    pub fn from_json_str(s: &str) -> InkmarkResult<Self> {
        serde_json::from_str(s).map_err(|e| InkmarkError::serde(format!("parse config JSON: {e}")))
    }

    /// Load and validate a config file.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> InkmarkResult<Self> {
        let f = File::open(path).map_err(|e| {
            InkmarkError::validation(format!("open config '{}': {e}", path.display()))
        })?;
        let config = Self::from_reader(BufReader::new(f))?;
        config.validate()?;
        tracing::debug!(?config, "loaded config");
        Ok(config)
    }

    /// Check every section for out-of-range values.
    pub fn validate(&self) -> InkmarkResult<()> {
        self.shape.validate()?;
        self.threshold.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
