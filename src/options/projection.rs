use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Projection", inline)]
#[serde(default)]
/// Perspective frustum parameters used when the trackball is applied.
pub struct ProjectionOptions {
    /// Vertical field of view in degrees at zoom 1.
    #[schemars(title = "Aperture", range(min = 5.0, max = 120.0), extend("step" = 1.0))]
    pub aperture: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub near: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub far: f32,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            aperture: 35.0,
            near: 0.1,
            far: 100.0,
        }
    }
}
