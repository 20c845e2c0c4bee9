//! Trackball configuration with TOML file support.
//!
//! Holds the initial view (orientation, zoom, distance) and the projection
//! parameters used by [`Trackball::apply`](crate::Trackball::apply).
//! Options serialize to/from TOML so an application can keep them next to
//! its other settings.

mod projection;
mod view;

use std::path::Path;

pub use projection::ProjectionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use view::ViewOptions;

use crate::error::TrackballError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[view]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct TrackballOptions {
    /// Initial orientation, zoom and distance.
    pub view: ViewOptions,
    /// Perspective frustum parameters.
    pub projection: ProjectionOptions,
}

impl TrackballOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(TrackballOptions)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, TrackballError> {
        toml::from_str(content)
            .map_err(|e| TrackballError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TrackballError> {
        let content = std::fs::read_to_string(path).map_err(TrackballError::Io)?;
        let options = Self::from_toml(&content)?;
        log::debug!("Loaded trackball options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TrackballError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TrackballError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TrackballError::Io)?;
        }
        std::fs::write(path, content).map_err(TrackballError::Io)
    }
}
