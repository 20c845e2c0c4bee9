//! Free functions on 3-vectors.
//!
//! Thin wrappers over [`glam::Vec3`] operators, except [`normalize`], which
//! leaves zero-length input untouched instead of producing NaN.

use glam::Vec3;

/// Component-wise sum.
#[inline]
#[must_use]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    a + b
}

/// Component-wise difference `a - b`.
#[inline]
#[must_use]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    a - b
}

/// Multiply every component by `s`.
#[inline]
#[must_use]
pub fn scale(v: Vec3, s: f32) -> Vec3 {
    v * s
}

/// Dot product.
#[inline]
#[must_use]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Right-handed cross product `a × b`.
#[inline]
#[must_use]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Euclidean length.
#[inline]
#[must_use]
pub fn length(v: Vec3) -> f32 {
    dot(v, v).sqrt()
}

/// Scale `v` to unit length. A zero vector is returned unchanged.
#[inline]
#[must_use]
pub fn normalize(v: Vec3) -> Vec3 {
    let len = length(v);
    if len == 0.0 {
        return v;
    }
    scale(v, 1.0 / len)
}
