use std::ops::{Deref, DerefMut};

use glam::{Mat4, Vec3};

use super::frustum::Frustum;
use super::state::Trackball;
use crate::pipeline::{MatrixMode, Pipeline, Viewport};

/// A pipeline with the trackball's matrices pushed.
///
/// Returned by [`Trackball::scoped`]. Derefs to the pipeline so the scene
/// can be drawn through it; both pushed matrices are popped on drop.
#[must_use = "dropping the guard immediately pops the trackball matrices"]
pub struct Applied<'a, P: Pipeline + ?Sized> {
    pipeline: &'a mut P,
}

impl<P: Pipeline + ?Sized> Deref for Applied<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        &*self.pipeline
    }
}

impl<P: Pipeline + ?Sized> DerefMut for Applied<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        &mut *self.pipeline
    }
}

impl<P: Pipeline + ?Sized> Drop for Applied<'_, P> {
    fn drop(&mut self) {
        Trackball::unapply(&mut *self.pipeline);
    }
}

impl Trackball {
    /// Perspective extents [`apply`](Self::apply) would push for `viewport`.
    #[must_use]
    pub fn frustum(&self, viewport: Viewport) -> Frustum {
        Frustum::perspective(viewport.aspect(), self.zoom, &self.projection)
    }

    /// Model-view transform: translate by `(pan.x, pan.y, −distance)`, then
    /// rotate by the cached matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(self.pan.x, self.pan.y, -self.distance))
            * self.matrix_mat4()
    }

    /// `projection * view` for `viewport`, equal to what a
    /// [`MatrixStack`](crate::pipeline::MatrixStack) holds after
    /// [`apply`](Self::apply).
    #[must_use]
    pub fn view_projection(&self, viewport: Viewport) -> Mat4 {
        self.frustum(viewport).to_mat4() * self.view_matrix()
    }

    /// Push the trackball's projection and model-view matrices.
    ///
    /// Every call must be paired with [`unapply`](Self::unapply) on all exit
    /// paths; [`scoped`](Self::scoped) does the pairing automatically.
    pub fn apply<P: Pipeline + ?Sized>(&self, pipeline: &mut P) {
        let frustum = self.frustum(pipeline.viewport());

        pipeline.set_matrix_mode(MatrixMode::Projection);
        pipeline.push_matrix();
        pipeline.load_identity();
        pipeline.frustum(&frustum);

        pipeline.set_matrix_mode(MatrixMode::ModelView);
        pipeline.push_matrix();
        pipeline.load_identity();
        pipeline.translate(self.pan.x, self.pan.y, -self.distance);
        pipeline.mult_matrix(&self.matrix);
    }

    /// Pop what [`apply`](Self::apply) pushed, model-view first.
    pub fn unapply<P: Pipeline + ?Sized>(pipeline: &mut P) {
        pipeline.set_matrix_mode(MatrixMode::ModelView);
        pipeline.pop_matrix();
        pipeline.set_matrix_mode(MatrixMode::Projection);
        pipeline.pop_matrix();
    }

    /// [`apply`](Self::apply) now and [`unapply`](Self::unapply) when the
    /// returned guard is dropped.
    pub fn scoped<'a, P: Pipeline + ?Sized>(
        &self,
        pipeline: &'a mut P,
    ) -> Applied<'a, P> {
        self.apply(pipeline);
        Applied { pipeline }
    }
}
