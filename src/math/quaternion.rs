//! Free functions on rotation quaternions stored as [`glam::Quat`].
//!
//! [`add`] composes rotations (it is a quaternion product, not a
//! component-wise sum). The normalization helpers leave zero-length input
//! untouched, matching [`vector::normalize`](super::vector::normalize).

use glam::{Quat, Vec3};

use super::vector;

/// The no-rotation quaternion `(0, 0, 0, 1)`.
pub const IDENTITY: Quat = Quat::from_xyzw(0.0, 0.0, 0.0, 1.0);

#[inline]
fn from_parts(v: Vec3, w: f32) -> Quat {
    Quat::from_xyzw(v.x, v.y, v.z, w)
}

#[inline]
fn parts(q: Quat) -> (Vec3, f32) {
    let [x, y, z, w] = q.to_array();
    (Vec3::new(x, y, z), w)
}

/// Compose two rotations.
///
/// Vector part is `v1·w2 + v2·w1 + v2 × v1`, scalar part is
/// `w1·w2 − v1·v2`. In Hamilton-product terms this is `q2 * q1`: the
/// result applies `q1` first, then `q2`.
#[must_use]
pub fn add(q1: Quat, q2: Quat) -> Quat {
    let (v1, w1) = parts(q1);
    let (v2, w2) = parts(q2);
    let t1 = vector::scale(v1, w2);
    let t2 = vector::scale(v2, w1);
    let t3 = vector::cross(v2, v1);
    let v = vector::add(t3, vector::add(t1, t2));
    from_parts(v, w1 * w2 - vector::dot(v1, v2))
}

/// Multiply all four components by `s`.
#[inline]
#[must_use]
pub fn scale(q: Quat, s: f32) -> Quat {
    let [x, y, z, w] = q.to_array();
    Quat::from_xyzw(x * s, y * s, z * s, w * s)
}

/// Four-component dot product.
#[inline]
#[must_use]
pub fn dot(q1: Quat, q2: Quat) -> f32 {
    let [x1, y1, z1, w1] = q1.to_array();
    let [x2, y2, z2, w2] = q2.to_array();
    x1 * x2 + y1 * y2 + z1 * z2 + w1 * w2
}

/// Four-component Euclidean length.
#[inline]
#[must_use]
pub fn length(q: Quat) -> f32 {
    dot(q, q).sqrt()
}

/// Scale `q` to unit length. A zero quaternion is returned unchanged.
#[must_use]
pub fn normalize(q: Quat) -> Quat {
    let len = length(q);
    if len == 0.0 {
        return q;
    }
    scale(q, 1.0 / len)
}

/// Rotation of `angle` radians about `axis`. The axis does not need to be
/// normalized; a zero axis yields a pure-scalar quaternion.
#[must_use]
pub fn from_axis_angle(axis: Vec3, angle: f32) -> Quat {
    let (sin, cos) = (angle / 2.0).sin_cos();
    from_parts(vector::scale(vector::normalize(axis), sin), cos)
}

/// Expand `q` into a 4×4 matrix laid out for fixed-function consumption.
///
/// Element `m[row * 4 + col]` holds the rotation block as written below; a
/// pipeline reading the array column-major sees the transpose, i.e. the
/// rotation by the conjugate of `q`. The translation part is identity.
#[must_use]
pub fn to_rotation_matrix(q: Quat) -> [f32; 16] {
    let [x, y, z, w] = q.to_array();
    let mut m = [0.0; 16];
    m[0] = 1.0 - 2.0 * (y * y + z * z);
    m[1] = 2.0 * (x * y - z * w);
    m[2] = 2.0 * (z * x + y * w);
    m[4] = 2.0 * (x * y + z * w);
    m[5] = 1.0 - 2.0 * (z * z + x * x);
    m[6] = 2.0 * (y * z - x * w);
    m[8] = 2.0 * (z * x - y * w);
    m[9] = 2.0 * (y * z + x * w);
    m[10] = 1.0 - 2.0 * (y * y + x * x);
    m[15] = 1.0;
    m
}
