use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "View", inline)]
#[serde(default)]
/// Initial orientation and framing of a new trackball.
pub struct ViewOptions {
    /// Rotation about the X axis in degrees.
    #[schemars(title = "Theta", range(min = -360.0, max = 360.0), extend("step" = 1.0))]
    pub theta: f32,
    /// Rotation about the Z axis in degrees.
    #[schemars(title = "Phi", range(min = -360.0, max = 360.0), extend("step" = 1.0))]
    pub phi: f32,
    /// Field-of-view scale factor, clamped to `[0.25, 10.0]`.
    #[schemars(title = "Zoom", range(min = 0.25, max = 10.0), extend("step" = 0.05))]
    pub zoom: f32,
    /// Eye distance from the orbit center, at least 1.
    #[schemars(title = "Distance", range(min = 1.0), extend("step" = 0.1))]
    pub distance: f32,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            theta: 0.0,
            phi: 0.0,
            zoom: 1.0,
            distance: 3.0,
        }
    }
}
