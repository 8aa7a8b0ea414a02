//! Fixed scene camera shared with the native frontend.
//!
//! The particle core has no opinion on projection; this is only the framing
//! the frontends agree on so every layer is drawn from the same viewpoint.

use glam::{Mat4, Vec3};

pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.0, 14.0);
pub const CAMERA_FOVY_DEGREES: f32 = 45.0;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: CAMERA_EYE,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Layer transform: spin about the vertical axis, then view and project.
    pub fn layer_view_proj(&self, rotation_y: f32) -> Mat4 {
        self.view_proj() * Mat4::from_rotation_y(rotation_y)
    }
}
