use glam::{Mat4, Vec3};
use pyramid_camera::{Camera, Projection};

/// Model transform of the pyramid: scaled by 2, then rotated 45 degrees about
/// the (1, 1, 1) diagonal, at the origin.
pub fn pyramid_model_matrix() -> Mat4 {
    let scale = Mat4::from_scale(Vec3::splat(2.0));
    let rotation = Mat4::from_axis_angle(Vec3::ONE.normalize(), 45.0_f32.to_radians());
    let translation = Mat4::from_translation(Vec3::ZERO);
    translation * rotation * scale
}

/// Everything the draw sequence needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub eye: Vec3,
    pub front: Vec3,
    pub fov_degrees: f32,
}

impl Frame {
    pub fn from_camera(camera: &Camera, projection: &Projection) -> Self {
        Self {
            model: pyramid_model_matrix(),
            view: camera.view_matrix(),
            projection: camera.projection_matrix(projection),
            eye: camera.position(),
            front: camera.front(),
            fov_degrees: camera.fov_degrees(),
        }
    }
}
