//! Recorded input sequences for headless replay.
//!
//! A script is a YAML document with an `events` list:
//! ```yaml
//! events:
//!   - kind: cursor_moved
//!     x: 400
//!     y: 300
//!   - kind: move
//!     direction: forward
//!     dt: 0.016
//! ```

use crate::event::InputEvent;
use crate::router::InputRouter;
use pyramid_camera::Camera;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading an input script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("event {index}: movement dt must be finite and non-negative, got {dt}")]
    NegativeDelta { index: usize, dt: f32 },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

impl InputScript {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let script = Self::from_yaml_str(&text)?;
        tracing::debug!(
            "loaded {} input events from {}",
            script.events.len(),
            path.as_ref().display()
        );
        Ok(script)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ScriptError> {
        let script: Self = serde_yaml::from_str(text)?;
        script.validate()?;
        Ok(script)
    }

    /// Movement deltas must be valid elapsed times.
    pub fn validate(&self) -> Result<(), ScriptError> {
        for (index, event) in self.events.iter().enumerate() {
            if let InputEvent::Move { dt, .. } = event {
                if !(dt.is_finite() && *dt >= 0.0) {
                    return Err(ScriptError::NegativeDelta { index, dt: *dt });
                }
            }
        }
        Ok(())
    }

    /// Play every event into `camera` through a fresh router.
    pub fn replay(&self, camera: &mut Camera) {
        let mut router = InputRouter::new();
        router.dispatch_all(camera, self.events.iter().copied());
    }
}
