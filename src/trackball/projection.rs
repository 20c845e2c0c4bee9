//! Deformed-sphere trackball projection.
//!
//! Points near the center of the viewport are lifted onto a sphere of
//! radius [`TRACKBALL_SIZE`]; farther out the surface continues as a
//! hyperbolic sheet `z = (R/√2)² / d`, which meets the sphere at
//! `d = R/√2` and never becomes imaginary.

use std::f32::consts::{FRAC_1_SQRT_2, SQRT_2};

use glam::{Quat, Vec3};

use crate::math::{quaternion, vector};

/// Radius of the virtual ball in normalized viewport units.
pub const TRACKBALL_SIZE: f32 = 0.8;

/// Height of the trackball surface above the point `(x, y)`.
#[must_use]
pub fn project(r: f32, x: f32, y: f32) -> f32 {
    let d = (x * x + y * y).sqrt();
    if d < r * FRAC_1_SQRT_2 {
        (r * r - d * d).sqrt()
    } else {
        let t = r / SQRT_2;
        t * t / d
    }
}

/// Incremental rotation for a pointer moving from `(x, y)` to
/// `(x + dx, y + dy)`, all in normalized `[-1, 1]` viewport units.
///
/// The axis is the cross product of the two lifted points; the angle comes
/// from the chord between them. A zero delta yields the identity.
#[must_use]
pub fn drag_rotation(x: f32, y: f32, dx: f32, dy: f32) -> Quat {
    if dx == 0.0 && dy == 0.0 {
        return quaternion::IDENTITY;
    }
    let last = Vec3::new(x, y, project(TRACKBALL_SIZE, x, y));
    let (nx, ny) = (x + dx, y + dy);
    let new = Vec3::new(nx, ny, project(TRACKBALL_SIZE, nx, ny));

    let axis = vector::cross(new, last);
    let chord = vector::length(vector::sub(last, new));
    // asin is undefined past ±1 for drags longer than the ball's diameter
    let t = (chord / (2.0 * TRACKBALL_SIZE)).clamp(-1.0, 1.0);
    let phi = 2.0 * t.asin();
    quaternion::from_axis_angle(axis, phi)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn center_projects_to_radius() {
        assert!((project(TRACKBALL_SIZE, 0.0, 0.0) - 0.8).abs() < EPS);
    }

    #[test]
    fn sphere_and_hyperbola_meet_at_switchover() {
        let r = TRACKBALL_SIZE;
        let d = r * FRAC_1_SQRT_2;
        let sphere = (r * r - d * d).sqrt();
        let just_outside = project(r, d + 1e-5, 0.0);
        assert!((sphere - just_outside).abs() < 1e-4);
    }

    #[test]
    fn far_points_use_hyperbolic_sheet() {
        let z = project(TRACKBALL_SIZE, 3.0, 4.0);
        assert!((z - 0.32 / 5.0).abs() < EPS);
    }

    #[test]
    fn zero_delta_is_identity() {
        assert_eq!(drag_rotation(0.3, -0.2, 0.0, 0.0), quaternion::IDENTITY);
    }

    #[test]
    fn horizontal_drag_rotates_about_vertical_axis() {
        let q = drag_rotation(0.0, 0.0, 0.1, 0.0);
        let [x, y, z, w] = q.to_array();
        assert!(x.abs() < EPS);
        assert!(z.abs() < EPS);
        assert!(y < 0.0);
        assert!(w > 0.99);
        assert!((quaternion::length(q) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn oversized_drag_is_clamped_to_half_turn() {
        let q = drag_rotation(0.0, 0.0, 100.0, 0.0);
        let [x, y, z, w] = q.to_array();
        assert!(![x, y, z, w].iter().any(|c| c.is_nan()));
        assert!(w.abs() < 1e-6);
    }
}
