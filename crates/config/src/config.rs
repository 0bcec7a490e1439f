use pyramid_camera::{CameraError, CameraSettings, Projection};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("camera settings: {0}")]
    Camera(#[from] CameraError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Grab and hide the cursor on startup for mouse look.
    pub capture_mouse: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Pyramid Camera".into(),
            width: 800,
            height: 600,
            capture_mouse: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Linear RGBA.
    pub clear_color: [f64; 4],
    pub vsync: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0, 1.0],
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Upper bound on the per-frame delta in seconds, so a stalled frame
    /// does not teleport the camera.
    pub max_frame_delta: f32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            max_frame_delta: 0.1,
        }
    }
}

/// Top-level configuration for the desktop app and CLI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub camera: CameraSettings,
    pub projection: ProjectionConfig,
    pub render: RenderConfig,
    pub timing: TimingConfig,
}

impl AppConfig {
    /// Read and validate a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        let ProjectionConfig { near, far } = self.projection;
        if !(near > 0.0 && near < far && far.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "projection requires 0 < near < far, got near={near} far={far}"
            )));
        }
        if !(self.timing.max_frame_delta > 0.0 && self.timing.max_frame_delta.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "max_frame_delta must be positive, got {}",
                self.timing.max_frame_delta
            )));
        }
        self.camera.validate()?;
        Ok(())
    }

    /// Initial projection for the configured window size.
    pub fn projection(&self) -> Projection {
        Projection::new(
            self.window.width as f32 / self.window.height.max(1) as f32,
            self.projection.near,
            self.projection.far,
        )
    }
}
