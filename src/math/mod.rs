//! Stateless vector and quaternion helpers used by the trackball.

/// Quaternion composition, normalization and matrix expansion.
pub mod quaternion;
/// 3-vector arithmetic with a zero-safe normalize.
pub mod vector;
