use glam::Mat4;

/// Perspective parameters supplied by the host; the field of view comes from
/// the camera zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            aspect: 800.0 / 600.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn new(aspect: f32, near: f32, far: f32) -> Self {
        Self { aspect, near, far }
    }

    /// Update the aspect ratio from a surface size. Zero heights are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Right-handed perspective with a [0, 1] depth range.
    pub fn matrix(&self, fov_degrees: f32) -> Mat4 {
        Mat4::perspective_rh(fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn resize_updates_aspect() {
        let mut p = Projection::default();
        p.resize(1920, 1080);
        assert!((p.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn resize_ignores_zero_height() {
        let mut p = Projection::default();
        let before = p.aspect;
        p.resize(1024, 0);
        assert_eq!(p.aspect, before);
    }

    #[test]
    fn near_and_far_map_to_depth_range() {
        let p = Projection::default();
        let m = p.matrix(45.0);
        let near = m.project_point3(Vec3::new(0.0, 0.0, -p.near));
        let far = m.project_point3(Vec3::new(0.0, 0.0, -p.far));
        assert!(near.z.abs() < 1e-5);
        assert!((far.z - 1.0).abs() < 1e-5);
    }
}
