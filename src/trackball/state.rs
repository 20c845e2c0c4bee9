use std::fmt;

use glam::{Mat4, Quat, Vec2, Vec3};

use super::projection;
use crate::math::quaternion;
use crate::options::{ProjectionOptions, TrackballOptions};
use crate::pipeline::Viewport;

/// Drags between forced renormalizations of the rotation quaternion.
pub const RENORM_COUNT: u32 = 97;
/// Smallest allowed zoom factor.
pub const MIN_ZOOM: f32 = 0.25;
/// Largest allowed zoom factor.
pub const MAX_ZOOM: f32 = 10.0;
/// Smallest allowed eye distance.
pub const MIN_DISTANCE: f32 = 1.0;

const ZOOM_SPEED: f32 = 5.0;
const PAN_SPEED: f32 = 0.1;

/// Virtual trackball orbiting a camera around the scene origin.
///
/// Orientation is a quaternion restricted to two degrees of freedom: every
/// drag drops the z component so the view never rolls. The rotation matrix
/// handed to the pipeline is cached and rebuilt after each orientation
/// change.
#[derive(Debug, Clone, PartialEq)]
pub struct Trackball {
    pub(super) rotation: Quat,
    pub(super) zoom: f32,
    pub(super) distance: f32,
    pub(super) pan: Vec2,
    pub(super) count: u32,
    pub(super) matrix: [f32; 16],
    pub(super) projection: ProjectionOptions,
}

impl Default for Trackball {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0, 3.0)
    }
}

/// Rotation of `theta` degrees about X composed with `phi` degrees about Z.
fn two_axis_rotation(theta: f32, phi: f32) -> Quat {
    let xrot = quaternion::from_axis_angle(Vec3::X, theta.to_radians());
    let zrot = quaternion::from_axis_angle(Vec3::Z, phi.to_radians());
    quaternion::add(xrot, zrot)
}

impl Trackball {
    /// Build a trackball looking along the given angles (degrees).
    ///
    /// `zoom` and `distance` are clamped like their setters.
    #[must_use]
    pub fn new(theta: f32, phi: f32, zoom: f32, distance: f32) -> Self {
        Self::with_projection(
            theta,
            phi,
            zoom,
            distance,
            ProjectionOptions::default(),
        )
    }

    /// Build a trackball from configured view and projection options.
    #[must_use]
    pub fn from_options(options: &TrackballOptions) -> Self {
        let view = &options.view;
        Self::with_projection(
            view.theta,
            view.phi,
            view.zoom,
            view.distance,
            options.projection.clone(),
        )
    }

    fn with_projection(
        theta: f32,
        phi: f32,
        zoom: f32,
        distance: f32,
        projection: ProjectionOptions,
    ) -> Self {
        let rotation = two_axis_rotation(theta, phi);
        Self {
            rotation,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            distance: distance.max(MIN_DISTANCE),
            pan: Vec2::ZERO,
            count: 0,
            matrix: quaternion::to_rotation_matrix(rotation),
            projection,
        }
    }

    // -- Orientation ------------------------------------------------------

    /// Current `(theta, phi)` in degrees, recovered from the rotation.
    ///
    /// This inverts [`set_orientation`](Self::set_orientation) for angles
    /// within ±90°. After arbitrary drags the result is only an
    /// approximation and need not match any pair that was set.
    #[must_use]
    pub fn get_orientation(&self) -> (f32, f32) {
        let [q0, q1, q2, q3] = self.rotation.to_array();
        let ax = (2.0 * (q0 * q1 + q2 * q3) / (1.0 - 2.0 * (q1 * q1 + q2 * q2)))
            .atan()
            .to_degrees();
        let az = (2.0 * (q0 * q3 + q1 * q2) / (1.0 - 2.0 * (q2 * q2 + q3 * q3)))
            .atan()
            .to_degrees();
        (-az, ax)
    }

    /// Replace the rotation with `theta` about X then `phi` about Z.
    ///
    /// Both angles are reduced with `%` 360, so the sign of the input is
    /// kept (`-370.0` becomes `-10.0`).
    pub fn set_orientation(&mut self, theta: f32, phi: f32) {
        self.rotation = two_axis_rotation(theta % 360.0, phi % 360.0);
        self.recompute_matrix();
    }

    /// Rotation about X in degrees; see [`get_orientation`](Self::get_orientation).
    #[must_use]
    pub fn theta(&self) -> f32 {
        self.get_orientation().0
    }

    /// Rotation about Z in degrees; see [`get_orientation`](Self::get_orientation).
    #[must_use]
    pub fn phi(&self) -> f32 {
        self.get_orientation().1
    }

    /// Set theta, keeping the currently recovered phi.
    pub fn set_theta(&mut self, theta: f32) {
        let (_, phi) = self.get_orientation();
        self.set_orientation(theta, phi);
    }

    /// Set phi, keeping the currently recovered theta.
    pub fn set_phi(&mut self, phi: f32) {
        let (theta, _) = self.get_orientation();
        self.set_orientation(theta, phi);
    }

    /// The raw orientation quaternion. Close to, but not always exactly,
    /// unit length between renormalizations.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    // -- Gestures ---------------------------------------------------------

    /// Rotate for a pointer moving from `(x, y)` by `(dx, dy)`, all in
    /// normalized `[-1, 1]` viewport units with y pointing up.
    ///
    /// A zero delta does nothing.
    pub fn drag(&mut self, x: f32, y: f32, dx: f32, dy: f32) {
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        let increment = projection::drag_rotation(x, y, dx, dy);
        let [qx, qy, _, qw] =
            quaternion::add(increment, self.rotation).to_array();
        // no roll
        self.rotation = Quat::from_xyzw(qx, qy, 0.0, qw);

        self.count += 1;
        if self.count > RENORM_COUNT {
            self.rotation = quaternion::normalize(self.rotation);
            self.count = 0;
            log::debug!(
                "trackball rotation renormalized after {RENORM_COUNT} drags"
            );
        }
        self.recompute_matrix();
    }

    /// [`drag`](Self::drag) with pixel coordinates.
    ///
    /// Pixels are normalized as `(2x − W) / W` and `2·dx / W` (likewise
    /// with the height). The origin is the bottom-left corner; callers
    /// with a top-left origin should pass `H − y` and `−dy`.
    pub fn drag_in(
        &mut self,
        viewport: Viewport,
        x: f32,
        y: f32,
        dx: f32,
        dy: f32,
    ) {
        let p = viewport.normalize_point(x, y);
        let d = viewport.normalize_delta(dx, dy);
        self.drag(p.x, p.y, d.x, d.y);
    }

    /// Change zoom by `−5·dy / H`, clamped to `[0.25, 10.0]`.
    pub fn zoom_by(&mut self, dy: f32, viewport: Viewport) {
        let height = viewport.height.max(1) as f32;
        self.set_zoom(self.zoom - ZOOM_SPEED * dy / height);
    }

    /// Shift the view by `(0.1·dx, 0.1·dy)`. Pan is unbounded.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.pan += Vec2::new(dx, dy) * PAN_SPEED;
    }

    // -- Properties -------------------------------------------------------

    /// Field-of-view scale factor.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set zoom, clamped to `[0.25, 10.0]`.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Eye distance from the orbit center.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Set distance, clamped to at least 1.
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.max(MIN_DISTANCE);
    }

    /// Accumulated pan offset.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Projection parameters used by [`apply`](Self::apply).
    #[must_use]
    pub fn projection_options(&self) -> &ProjectionOptions {
        &self.projection
    }

    /// Replace the projection parameters.
    pub fn set_projection_options(&mut self, projection: ProjectionOptions) {
        self.projection = projection;
    }

    /// Cached rotation matrix in fixed-function layout (16 floats).
    #[must_use]
    pub fn matrix(&self) -> &[f32; 16] {
        &self.matrix
    }

    /// The cached matrix as the pipeline sees it (read column-major).
    #[must_use]
    pub fn matrix_mat4(&self) -> Mat4 {
        Mat4::from_cols_array(&self.matrix)
    }

    /// Rebuild the cached matrix from the current rotation.
    pub fn recompute_matrix(&mut self) {
        self.matrix = quaternion::to_rotation_matrix(self.rotation);
    }
}

impl fmt::Display for Trackball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (theta, phi) = self.get_orientation();
        write!(
            f,
            "Trackball(phi={phi},theta={theta},zoom={})",
            self.zoom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn default_is_identity() {
        let tb = Trackball::default();
        assert_eq!(tb.matrix(), &Mat4::IDENTITY.to_cols_array());
        assert_eq!(tb.zoom(), 1.0);
        assert_eq!(tb.distance(), 3.0);
        assert_eq!(tb.pan(), Vec2::ZERO);
    }

    #[test]
    fn zero_angles_give_identity_matrix() {
        let tb = Trackball::new(0.0, 0.0, 1.0, 3.0);
        assert_eq!(tb.matrix_mat4(), Mat4::IDENTITY);
        let (theta, phi) = tb.get_orientation();
        assert!(theta.abs() < EPS);
        assert!(phi.abs() < EPS);
    }

    #[test]
    fn orientation_round_trips_within_quarter_turn() {
        let tb = Trackball::new(30.0, 40.0, 1.0, 3.0);
        let (theta, phi) = tb.get_orientation();
        assert!((theta - 30.0).abs() < EPS, "theta = {theta}");
        assert!((phi - 40.0).abs() < EPS, "phi = {phi}");

        let tb = Trackball::new(-45.0, -20.0, 1.0, 3.0);
        assert!((tb.theta() + 45.0).abs() < EPS);
        assert!((tb.phi() + 20.0).abs() < EPS);
    }

    #[test]
    fn set_orientation_wraps_by_remainder() {
        let mut a = Trackball::default();
        a.set_orientation(390.0, -370.0);
        let b = Trackball::new(30.0, -10.0, 1.0, 3.0);
        for (x, y) in a.matrix().iter().zip(b.matrix().iter()) {
            assert!((x - y).abs() < EPS);
        }
    }

    #[test]
    fn set_theta_keeps_phi() {
        let mut tb = Trackball::new(10.0, 25.0, 1.0, 3.0);
        tb.set_theta(50.0);
        assert!((tb.theta() - 50.0).abs() < EPS);
        assert!((tb.phi() - 25.0).abs() < EPS);
        tb.set_phi(-15.0);
        assert!((tb.theta() - 50.0).abs() < EPS);
        assert!((tb.phi() + 15.0).abs() < EPS);
    }

    #[test]
    fn zero_delta_drag_is_noop() {
        let mut tb = Trackball::new(30.0, 40.0, 1.0, 3.0);
        let before = tb.clone();
        tb.drag(0.2, -0.1, 0.0, 0.0);
        assert_eq!(tb, before);
    }

    #[test]
    fn drag_removes_roll_and_updates_matrix() {
        let mut tb = Trackball::new(30.0, 40.0, 1.0, 3.0);
        let before = *tb.matrix();
        tb.drag(0.1, 0.2, 0.05, -0.03);
        let [_, _, z, _] = tb.rotation().to_array();
        assert_eq!(z, 0.0);
        assert_ne!(tb.matrix(), &before);
        assert_eq!(
            tb.matrix(),
            &quaternion::to_rotation_matrix(tb.rotation())
        );
        assert_eq!(tb.count, 1);
    }

    #[test]
    fn renormalizes_after_threshold() {
        let mut tb = Trackball::default();
        for i in 0..=RENORM_COUNT {
            let step = i as f32 * 0.001;
            tb.drag(step, -step, 0.02, 0.015);
        }
        assert_eq!(tb.count, 0);
        assert!((quaternion::length(tb.rotation()) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn zoom_by_scales_with_viewport_height() {
        let mut tb = Trackball::default();
        tb.zoom_by(80.0, Viewport::new(1024, 800));
        assert!((tb.zoom() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut tb = Trackball::default();
        let vp = Viewport::new(800, 800);
        for _ in 0..50 {
            tb.zoom_by(400.0, vp);
            assert!(tb.zoom() >= MIN_ZOOM);
        }
        assert_eq!(tb.zoom(), MIN_ZOOM);
        for _ in 0..50 {
            tb.zoom_by(-400.0, vp);
            assert!(tb.zoom() <= MAX_ZOOM);
        }
        assert_eq!(tb.zoom(), MAX_ZOOM);
        assert_eq!(Trackball::new(0.0, 0.0, 50.0, 3.0).zoom(), MAX_ZOOM);
    }

    #[test]
    fn distance_is_clamped() {
        let mut tb = Trackball::default();
        tb.set_distance(0.2);
        assert_eq!(tb.distance(), MIN_DISTANCE);
        tb.set_distance(-7.0);
        assert_eq!(tb.distance(), MIN_DISTANCE);
        tb.set_distance(12.0);
        assert_eq!(tb.distance(), 12.0);
        assert_eq!(Trackball::new(0.0, 0.0, 1.0, 0.5).distance(), MIN_DISTANCE);
    }

    #[test]
    fn pan_accumulates() {
        let mut tb = Trackball::default();
        for _ in 0..3 {
            tb.pan_by(1.0, 1.0);
        }
        assert!((tb.pan().x - 0.3).abs() < 1e-6);
        assert!((tb.pan().y - 0.3).abs() < 1e-6);
    }

    #[test]
    fn drag_in_normalizes_pixels() {
        let vp = Viewport::new(800, 600);
        let mut a = Trackball::default();
        let mut b = Trackball::default();
        a.drag_in(vp, 500.0, 450.0, 40.0, -30.0);
        b.drag(0.25, 0.5, 0.1, -0.1);
        assert_eq!(a, b);
    }

    #[test]
    fn from_options_uses_view_and_projection() {
        let mut opts = TrackballOptions::default();
        opts.view.theta = 20.0;
        opts.view.zoom = 2.0;
        opts.view.distance = 6.0;
        opts.projection.aperture = 60.0;
        let tb = Trackball::from_options(&opts);
        assert!((tb.theta() - 20.0).abs() < EPS);
        assert_eq!(tb.zoom(), 2.0);
        assert_eq!(tb.distance(), 6.0);
        assert_eq!(tb.projection_options().aperture, 60.0);
    }

    #[test]
    fn display_reports_phi_theta_zoom() {
        let tb = Trackball::new(0.0, 0.0, 2.5, 3.0);
        assert_eq!(tb.to_string(), "Trackball(phi=0,theta=0,zoom=2.5)");
    }
}
