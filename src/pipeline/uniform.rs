use glam::Mat4;

use super::Viewport;
use crate::trackball::Trackball;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the trackball's view-projection and state.
pub struct TrackballUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Current orientation quaternion `(x, y, z, w)`.
    pub rotation: [f32; 4],
    /// Accumulated pan offset.
    pub pan: [f32; 2],
    /// Current zoom factor.
    pub zoom: f32,
    /// Current eye distance.
    pub distance: f32,
}

impl Default for TrackballUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackballUniform {
    /// Create a uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            rotation: [0.0, 0.0, 0.0, 1.0],
            pan: [0.0; 2],
            zoom: 1.0,
            distance: 3.0,
        }
    }

    /// Update uniform fields from the trackball's current state.
    pub fn update(&mut self, trackball: &Trackball, viewport: Viewport) {
        self.view_proj = trackball.view_projection(viewport).to_cols_array_2d();
        self.rotation = trackball.rotation().to_array();
        self.pan = trackball.pan().to_array();
        self.zoom = trackball.zoom();
        self.distance = trackball.distance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_16_byte_aligned() {
        assert_eq!(size_of::<TrackballUniform>() % 16, 0);
    }

    #[test]
    fn update_copies_state() {
        let mut tb = Trackball::new(0.0, 0.0, 2.0, 5.0);
        tb.pan_by(10.0, -10.0);
        let viewport = Viewport::new(800, 600);
        let mut uniform = TrackballUniform::new();
        uniform.update(&tb, viewport);
        assert_eq!(uniform.zoom, 2.0);
        assert_eq!(uniform.distance, 5.0);
        assert_eq!(uniform.rotation, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(
            uniform.view_proj,
            tb.view_projection(viewport).to_cols_array_2d()
        );
        let bytes: &[u8] = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), size_of::<TrackballUniform>());
    }
}
