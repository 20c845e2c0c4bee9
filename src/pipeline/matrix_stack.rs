use glam::{Mat4, Vec3};

use super::{MatrixMode, Pipeline, Viewport};
use crate::trackball::frustum::Frustum;

/// One matrix stack: the current top plus everything pushed beneath it.
#[derive(Debug, Clone, PartialEq)]
struct Stack {
    top: Mat4,
    saved: Vec<Mat4>,
}

impl Stack {
    fn new() -> Self {
        Self {
            top: Mat4::IDENTITY,
            saved: Vec::new(),
        }
    }

    fn push(&mut self) {
        self.saved.push(self.top);
    }

    /// Returns false on underflow, leaving the stack untouched.
    fn pop(&mut self) -> bool {
        match self.saved.pop() {
            Some(m) => {
                self.top = m;
                true
            }
            None => false,
        }
    }

    fn depth(&self) -> usize {
        self.saved.len() + 1
    }
}

/// In-memory projection and model-view stacks.
///
/// Evaluates the trackball's matrix calls without a graphics context, so
/// shader-based renderers can read back [`view_projection`](Self::view_projection)
/// and upload it themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixStack {
    viewport: Viewport,
    mode: MatrixMode,
    projection: Stack,
    modelview: Stack,
}

impl MatrixStack {
    /// Fresh stacks (identity, depth 1) in model-view mode.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            mode: MatrixMode::ModelView,
            projection: Stack::new(),
            modelview: Stack::new(),
        }
    }

    /// Update the viewport, e.g. after a window resize.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Currently selected stack.
    #[must_use]
    pub fn mode(&self) -> MatrixMode {
        self.mode
    }

    /// Number of entries on a stack, including the top.
    #[must_use]
    pub fn depth(&self, mode: MatrixMode) -> usize {
        self.stack(mode).depth()
    }

    /// Top of the projection stack.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.projection.top
    }

    /// Top of the model-view stack.
    #[must_use]
    pub fn modelview(&self) -> Mat4 {
        self.modelview.top
    }

    /// `projection * modelview`, ready for a shader uniform.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection.top * self.modelview.top
    }

    fn stack(&self, mode: MatrixMode) -> &Stack {
        match mode {
            MatrixMode::Projection => &self.projection,
            MatrixMode::ModelView => &self.modelview,
        }
    }

    fn current_mut(&mut self) -> &mut Stack {
        match self.mode {
            MatrixMode::Projection => &mut self.projection,
            MatrixMode::ModelView => &mut self.modelview,
        }
    }

    fn post_multiply(&mut self, m: Mat4) {
        let stack = self.current_mut();
        stack.top *= m;
    }
}

impl Pipeline for MatrixStack {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_matrix_mode(&mut self, mode: MatrixMode) {
        self.mode = mode;
    }

    fn load_identity(&mut self) {
        self.current_mut().top = Mat4::IDENTITY;
    }

    fn push_matrix(&mut self) {
        self.current_mut().push();
    }

    fn pop_matrix(&mut self) {
        if !self.current_mut().pop() {
            log::warn!("{:?} matrix stack underflow, pop ignored", self.mode);
        }
    }

    fn frustum(&mut self, frustum: &Frustum) {
        self.post_multiply(frustum.to_mat4());
    }

    fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.post_multiply(Mat4::from_translation(Vec3::new(x, y, z)));
    }

    fn mult_matrix(&mut self, m: &[f32; 16]) {
        self.post_multiply(Mat4::from_cols_array(m));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_restores_top() {
        let mut stack = MatrixStack::new(Viewport::new(640, 480));
        stack.translate(1.0, 2.0, 3.0);
        let before = stack.modelview();
        stack.push_matrix();
        assert_eq!(stack.depth(MatrixMode::ModelView), 2);
        stack.load_identity();
        stack.translate(-5.0, 0.0, 0.0);
        stack.pop_matrix();
        assert_eq!(stack.modelview(), before);
        assert_eq!(stack.depth(MatrixMode::ModelView), 1);
    }

    #[test]
    fn underflow_is_ignored() {
        let mut stack = MatrixStack::new(Viewport::new(640, 480));
        stack.translate(1.0, 0.0, 0.0);
        let before = stack.clone();
        stack.pop_matrix();
        assert_eq!(stack, before);
    }

    #[test]
    fn modes_are_independent() {
        let mut stack = MatrixStack::new(Viewport::new(640, 480));
        stack.set_matrix_mode(MatrixMode::Projection);
        stack.push_matrix();
        stack.translate(0.0, 0.0, -1.0);
        assert_eq!(stack.depth(MatrixMode::Projection), 2);
        assert_eq!(stack.depth(MatrixMode::ModelView), 1);
        assert_eq!(stack.modelview(), Mat4::IDENTITY);
    }

    #[test]
    fn operations_post_multiply() {
        let mut stack = MatrixStack::new(Viewport::new(640, 480));
        let rot = Mat4::from_rotation_z(0.5);
        stack.translate(1.0, 0.0, 0.0);
        stack.mult_matrix(&rot.to_cols_array());
        let expected = Mat4::from_translation(Vec3::X) * rot;
        assert_eq!(stack.modelview(), expected);
    }
}
