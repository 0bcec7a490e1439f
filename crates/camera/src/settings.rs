use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Errors from validating camera settings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CameraError {
    #[error("world up vector must have non-zero length")]
    ZeroWorldUp,
    #[error("pitch limit must be in (0, 90) degrees, got {0}")]
    PitchLimit(f32),
    #[error("zoom range must satisfy 0 < min <= max, got [{min}, {max}]")]
    ZoomRange { min: f32, max: f32 },
    #[error("initial zoom {zoom} is outside [{min}, {max}]")]
    ZoomOutOfRange { zoom: f32, min: f32, max: f32 },
    #[error("{0} must be finite and non-negative")]
    InvalidScalar(&'static str),
}

/// Tunable camera parameters. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: Vec3,
    pub world_up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Units per second.
    pub movement_speed: f32,
    /// Degrees of rotation per pixel of mouse travel.
    pub mouse_sensitivity: f32,
    pub zoom: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// Pitch is clamped to `[-pitch_limit, pitch_limit]`.
    pub pitch_limit: f32,
}

impl CameraSettings {
    pub const DEFAULT_YAW: f32 = -90.0;
    pub const DEFAULT_PITCH: f32 = 0.0;
    pub const DEFAULT_SPEED: f32 = 2.5;
    pub const DEFAULT_SENSITIVITY: f32 = 0.1;
    pub const DEFAULT_ZOOM: f32 = 45.0;
    pub const DEFAULT_ZOOM_MIN: f32 = 1.0;
    pub const DEFAULT_ZOOM_MAX: f32 = 45.0;
    pub const DEFAULT_PITCH_LIMIT: f32 = 89.0;

    /// Check every field; the camera relies on these bounds being sane.
    pub fn validate(&self) -> Result<(), CameraError> {
        if !self.world_up.is_finite() || self.world_up.length_squared() <= f32::EPSILON {
            return Err(CameraError::ZeroWorldUp);
        }
        if !(self.pitch_limit > 0.0 && self.pitch_limit < 90.0) {
            return Err(CameraError::PitchLimit(self.pitch_limit));
        }
        if !(self.zoom_min > 0.0 && self.zoom_min <= self.zoom_max && self.zoom_max.is_finite()) {
            return Err(CameraError::ZoomRange {
                min: self.zoom_min,
                max: self.zoom_max,
            });
        }
        if !(self.zoom >= self.zoom_min && self.zoom <= self.zoom_max) {
            return Err(CameraError::ZoomOutOfRange {
                zoom: self.zoom,
                min: self.zoom_min,
                max: self.zoom_max,
            });
        }
        if !self.position.is_finite() {
            return Err(CameraError::InvalidScalar("position"));
        }
        if !self.yaw.is_finite() || !self.pitch.is_finite() {
            return Err(CameraError::InvalidScalar("yaw/pitch"));
        }
        if !(self.movement_speed.is_finite() && self.movement_speed >= 0.0) {
            return Err(CameraError::InvalidScalar("movement_speed"));
        }
        if !(self.mouse_sensitivity.is_finite() && self.mouse_sensitivity >= 0.0) {
            return Err(CameraError::InvalidScalar("mouse_sensitivity"));
        }
        Ok(())
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            world_up: Vec3::Y,
            yaw: Self::DEFAULT_YAW,
            pitch: Self::DEFAULT_PITCH,
            movement_speed: Self::DEFAULT_SPEED,
            mouse_sensitivity: Self::DEFAULT_SENSITIVITY,
            zoom: Self::DEFAULT_ZOOM,
            zoom_min: Self::DEFAULT_ZOOM_MIN,
            zoom_max: Self::DEFAULT_ZOOM_MAX,
            pitch_limit: Self::DEFAULT_PITCH_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(CameraSettings::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_world_up() {
        let settings = CameraSettings {
            world_up: Vec3::ZERO,
            ..CameraSettings::default()
        };
        assert_eq!(settings.validate(), Err(CameraError::ZeroWorldUp));
    }

    #[test]
    fn rejects_pitch_limit_at_ninety() {
        let settings = CameraSettings {
            pitch_limit: 90.0,
            ..CameraSettings::default()
        };
        assert_eq!(settings.validate(), Err(CameraError::PitchLimit(90.0)));
    }

    #[test]
    fn rejects_inverted_zoom_range() {
        let settings = CameraSettings {
            zoom_min: 50.0,
            zoom_max: 10.0,
            zoom: 20.0,
            ..CameraSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(CameraError::ZoomRange { .. })
        ));
    }

    #[test]
    fn rejects_zoom_outside_range() {
        let settings = CameraSettings {
            zoom: 60.0,
            ..CameraSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(CameraError::ZoomOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_negative_speed() {
        let settings = CameraSettings {
            movement_speed: -1.0,
            ..CameraSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(CameraError::InvalidScalar("movement_speed"))
        );
    }
}
