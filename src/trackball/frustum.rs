//! Perspective view frustum
//!
//! Computes the `glFrustum` clip-plane extents for the trackball's
//! projection and expands them into a projection matrix.

use glam::{Mat4, Vec4};

use crate::options::ProjectionOptions;

/// Clip-plane extents of an off-axis perspective projection, in eye space
/// at the near plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Left edge of the near plane.
    pub left: f32,
    /// Right edge of the near plane.
    pub right: f32,
    /// Bottom edge of the near plane.
    pub bottom: f32,
    /// Top edge of the near plane.
    pub top: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
}

impl Frustum {
    /// Symmetric frustum for the given aspect ratio (width / height).
    ///
    /// The vertical extent is `tan(aperture·π/360)·near·zoom`, so a larger
    /// zoom widens the view.
    #[must_use]
    pub fn perspective(
        aspect: f32,
        zoom: f32,
        options: &ProjectionOptions,
    ) -> Self {
        let near = options.near;
        let top = (options.aperture * std::f32::consts::PI / 360.0).tan()
            * near
            * zoom;
        let bottom = -top;
        Self {
            left: aspect * bottom,
            right: aspect * top,
            bottom,
            top,
            near,
            far: options.far,
        }
    }

    /// The projection matrix `glFrustum` would build from these extents
    /// (right-handed, OpenGL `[-1, 1]` depth range).
    #[must_use]
    pub fn to_mat4(&self) -> Mat4 {
        let Self {
            left: l,
            right: r,
            bottom: b,
            top: t,
            near: n,
            far: f,
        } = *self;
        Mat4::from_cols(
            Vec4::new(2.0 * n / (r - l), 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * n / (t - b), 0.0, 0.0),
            Vec4::new(
                (r + l) / (r - l),
                (t + b) / (t - b),
                -(f + n) / (f - n),
                -1.0,
            ),
            Vec4::new(0.0, 0.0, -2.0 * f * n / (f - n), 0.0),
        )
    }
}
