use crate::math::{self, Matrix4, Vector3};

/// Camera pose plus perspective parameters.
///
/// `fovy_degrees` is the vertical field of view. `aspect` is width / height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vector3,
    pub target: Vector3,
    pub up: Vector3,
    pub fovy_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: [0.0, 1.0, 3.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fovy_degrees: 90.0,
            aspect: 500.0 / 300.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_matrix(&self) -> Matrix4 {
        let mut view = math::create();
        math::look_at(self.eye, self.target, self.up, &mut view);
        view
    }

    pub fn projection_matrix(&self) -> Matrix4 {
        let mut projection = math::create();
        math::perspective(
            self.fovy_degrees,
            self.aspect,
            self.near,
            self.far,
            &mut projection,
        );
        projection
    }

    pub fn view_projection(&self) -> Matrix4 {
        let mut vp = math::create();
        math::multiply(&self.projection_matrix(), &self.view_matrix(), &mut vp);
        vp
    }

    /// Builds `projection * view * model`.
    pub fn model_view_projection(&self, model: &Matrix4) -> Matrix4 {
        let mut mvp = self.view_projection();
        math::multiply_assign(&mut mvp, model);
        mvp
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }
}
