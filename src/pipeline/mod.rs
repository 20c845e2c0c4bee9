//! Graphics-pipeline facade consumed by [`Trackball::apply`](crate::Trackball::apply).
//!
//! The trackball never talks to a graphics API directly. It reads the
//! viewport size and issues fixed-function style matrix calls through the
//! [`Pipeline`] trait; an OpenGL binding forwards them to `glMatrixMode`,
//! `glFrustum` and friends, while [`MatrixStack`] evaluates them in software
//! for renderers that upload matrices themselves.

/// Software matrix stacks implementing [`Pipeline`].
pub mod matrix_stack;
/// GPU uniform block for shader-based renderers.
pub mod uniform;

use glam::Vec2;
pub use matrix_stack::MatrixStack;
pub use uniform::TrackballUniform;

use crate::trackball::frustum::Frustum;

/// Viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport of the given size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. A zero height is treated as one pixel.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    fn extent(&self) -> Vec2 {
        Vec2::new(self.width.max(1) as f32, self.height.max(1) as f32)
    }

    /// Map a pixel position to `[-1, 1]` on both axes: `(2x − W) / W`.
    #[must_use]
    pub fn normalize_point(&self, x: f32, y: f32) -> Vec2 {
        let size = self.extent();
        (Vec2::new(x, y) * 2.0 - size) / size
    }

    /// Map a pixel delta to normalized units: `2·dx / W`.
    #[must_use]
    pub fn normalize_delta(&self, dx: f32, dy: f32) -> Vec2 {
        Vec2::new(dx, dy) * 2.0 / self.extent()
    }
}

/// Which matrix stack subsequent matrix calls affect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixMode {
    /// The projection stack.
    Projection,
    /// The model-view stack.
    ModelView,
}

/// Fixed-function matrix interface plus a viewport query.
///
/// Matrix operations post-multiply the top of the current stack, as
/// OpenGL does.
pub trait Pipeline {
    /// Current viewport size.
    fn viewport(&self) -> Viewport;
    /// Select the stack that later calls operate on.
    fn set_matrix_mode(&mut self, mode: MatrixMode);
    /// Replace the top of the current stack with identity.
    fn load_identity(&mut self);
    /// Duplicate the top of the current stack.
    fn push_matrix(&mut self);
    /// Discard the top of the current stack.
    fn pop_matrix(&mut self);
    /// Multiply by a perspective projection.
    fn frustum(&mut self, frustum: &Frustum);
    /// Multiply by a translation.
    fn translate(&mut self, x: f32, y: f32, z: f32);
    /// Multiply by a 16-element matrix read column-major.
    fn mult_matrix(&mut self, m: &[f32; 16]);
}
