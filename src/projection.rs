//! Perspective projection parameters.
//!
//! The [`Projection`] struct is the single source of truth for the near/far
//! plane distances and generates the clip-space projection matrix.

use crate::math::mat4::Mat4;

/// Right-handed perspective projection with near/far planes.
///
/// The generated matrix maps view space to clip space; the transform
/// pipeline only consumes `x`, `y` and `w` of the result (there is no depth
/// buffer, so the normalized z is never sampled).
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// Near plane distance.
    z_near: f32,
    /// Far plane distance.
    z_far: f32,
}

impl Projection {
    /// Creates a new projection.
    ///
    /// # Arguments
    /// * `z_near` - Near plane distance (must be > 0)
    /// * `z_far` - Far plane distance (must be > z_near)
    pub fn new(z_near: f32, z_far: f32) -> Self {
        Self { z_near, z_far }
    }

    /// Generates the perspective projection matrix.
    ///
    /// Row 3 is `(0, 0, -1, 0)`, so clip-space `w` is the negated view-space
    /// z: points in front of the camera (negative z, right-handed) get a
    /// positive `w` for the perspective divide.
    pub fn matrix(&self) -> Mat4 {
        let n = self.z_near;
        let f = self.z_far;
        Mat4::new([
            [n, 0.0, 0.0, 0.0],
            [0.0, n, 0.0, 0.0],
            [0.0, 0.0, -(f + n) / (f - n), -(2.0 * f * n) / (f - n)],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }
}
