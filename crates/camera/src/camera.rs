use crate::projection::Projection;
use crate::settings::{CameraError, CameraSettings};
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Keyboard-driven movement directions, relative to the camera basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl CameraMovement {
    pub const ALL: [CameraMovement; 6] = [
        CameraMovement::Forward,
        CameraMovement::Backward,
        CameraMovement::Left,
        CameraMovement::Right,
        CameraMovement::Up,
        CameraMovement::Down,
    ];
}

/// First-person camera with Euler-angle orientation.
///
/// Yaw and pitch are stored in degrees. The `front`/`right`/`up` basis is
/// derived from them and only ever written by [`Camera::update_basis`].
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
    zoom_min: f32,
    zoom_max: f32,
    pitch_limit: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0))
    }
}

impl Camera {
    /// Camera at `position` with the default orientation, speed and zoom.
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(
            position,
            Vec3::Y,
            CameraSettings::DEFAULT_YAW,
            CameraSettings::DEFAULT_PITCH,
        )
    }

    /// Camera with an explicit world up and initial yaw/pitch in degrees.
    ///
    /// A zero-length `world_up` falls back to +Y. Pitch is clamped into the
    /// default limit.
    pub fn with_orientation(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let settings = CameraSettings {
            position,
            world_up: world_up.try_normalize().unwrap_or(Vec3::Y),
            yaw,
            pitch,
            ..CameraSettings::default()
        };
        Self::build(&settings)
    }

    /// Camera from validated settings.
    pub fn from_settings(settings: &CameraSettings) -> Result<Self, CameraError> {
        settings.validate()?;
        Ok(Self::build(settings))
    }

    fn build(settings: &CameraSettings) -> Self {
        let world_up = settings.world_up.try_normalize().unwrap_or(Vec3::Y);
        let mut camera = Self {
            position: settings.position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: world_up.any_orthonormal_vector(),
            world_up,
            yaw: settings.yaw,
            pitch: settings
                .pitch
                .clamp(-settings.pitch_limit, settings.pitch_limit),
            movement_speed: settings.movement_speed,
            mouse_sensitivity: settings.mouse_sensitivity,
            zoom: settings.zoom.clamp(settings.zoom_min, settings.zoom_max),
            zoom_min: settings.zoom_min,
            zoom_max: settings.zoom_max,
            pitch_limit: settings.pitch_limit,
        };
        camera.update_basis();
        tracing::debug!(
            position = ?camera.position,
            yaw = camera.yaw,
            pitch = camera.pitch,
            zoom = camera.zoom,
            "camera created"
        );
        camera
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Alias of [`Camera::zoom`] for projection code.
    pub fn fov_degrees(&self) -> f32 {
        self.zoom
    }

    pub fn zoom_range(&self) -> (f32, f32) {
        (self.zoom_min, self.zoom_max)
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed.max(0.0);
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity.max(0.0);
    }

    /// Look-at transform from the current position along `front`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self, projection: &Projection) -> Mat4 {
        projection.matrix(self.zoom)
    }

    pub fn view_projection(&self, projection: &Projection) -> Mat4 {
        self.projection_matrix(projection) * self.view_matrix()
    }

    /// Move along the camera basis by `movement_speed * delta_time`.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        let strafe = self.front.cross(self.up).normalize();
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= strafe * velocity,
            CameraMovement::Right => self.position += strafe * velocity,
            CameraMovement::Up => self.position += self.up * velocity,
            CameraMovement::Down => self.position -= self.up * velocity,
        }
    }

    /// Apply raw pixel deltas to yaw and pitch, then rebuild the basis.
    /// Non-finite offsets are ignored.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        if !x_offset.is_finite() || !y_offset.is_finite() {
            return;
        }
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-self.pitch_limit, self.pitch_limit);
        }

        self.update_basis();
        tracing::trace!(yaw = self.yaw, pitch = self.pitch, "camera look");
    }

    /// Mouse look with pitch clamping enabled.
    pub fn look(&mut self, x_offset: f32, y_offset: f32) {
        self.process_mouse_movement(x_offset, y_offset, true);
    }

    /// Scrolling up (positive `y_offset`) narrows the field of view.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        if !y_offset.is_finite() {
            return;
        }
        self.zoom = (self.zoom - y_offset).clamp(self.zoom_min, self.zoom_max);
        tracing::trace!(zoom = self.zoom, "camera zoom");
    }

    fn update_basis(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();

        let right = self.front.cross(self.world_up);
        self.right = if right.length_squared() > 1e-10 {
            right.normalize()
        } else {
            // Looking straight along world up: keep the previous heading.
            self.fallback_right()
        };
        self.up = self.right.cross(self.front).normalize();
    }

    fn fallback_right(&self) -> Vec3 {
        (self.right - self.front * self.right.dot(self.front))
            .try_normalize()
            .unwrap_or_else(|| self.front.any_orthonormal_vector())
    }
}
