//! Virtual trackball for orbiting a camera around a scene.
//!
//! Converts single-pointer drag, zoom and pan gestures into an orientation
//! quaternion, a cached rotation matrix and zoom/pan/distance state, and
//! pushes the resulting projection and view onto a [`Pipeline`](crate::pipeline::Pipeline).

/// Scoped push/pop of the trackball's matrices onto a pipeline.
pub mod apply;
/// Perspective frustum extents and matrix.
pub mod frustum;
/// Deformed-sphere projection turning drags into rotations.
pub mod projection;
/// The trackball state object and its gestures.
pub mod state;

pub use apply::Applied;
pub use frustum::Frustum;
pub use state::Trackball;
