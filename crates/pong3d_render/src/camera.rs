//! Fixed perspective camera
//!
//! The demo never moves the camera: it sits on +Z looking at the origin,
//! where the paddles and ball move in the XY plane.

use pong3d_math::mat4::{self, Mat4};

use crate::pipeline::CameraUniforms;

/// Look-at camera with a perspective lens
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 3.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fov: 45.0,
            near: 0.1,
            far: 10.0,
        }
    }
}

impl Camera {
    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        mat4::perspective(self.fov.to_radians(), aspect, self.near, self.far)
    }

    /// Uniforms for the current surface aspect ratio
    pub fn uniforms(&self, aspect: f32) -> CameraUniforms {
        CameraUniforms {
            view_matrix: self.view_matrix(),
            projection_matrix: self.projection_matrix(aspect),
        }
    }
}
