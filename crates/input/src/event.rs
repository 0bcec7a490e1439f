use pyramid_camera::CameraMovement;
use serde::{Deserialize, Serialize};

/// A discrete input sample forwarded to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    /// Movement for `dt` seconds.
    Move { direction: CameraMovement, dt: f32 },
    /// Absolute cursor position in window pixels, y pointing down.
    CursorMoved { x: f32, y: f32 },
    /// Relative mouse motion, already in look convention (positive y looks up).
    MouseDelta { dx: f32, dy: f32 },
    /// Wheel motion in lines; positive zooms in.
    Scroll { y: f32 },
    /// The window lost focus; the next cursor sample starts a new drag.
    FocusLost,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_yaml() {
        let yaml = "- kind: move\n  direction: forward\n  dt: 0.5\n- kind: scroll\n  y: 2.0\n- kind: focus_lost\n";
        let events: Vec<InputEvent> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::Move {
                    direction: CameraMovement::Forward,
                    dt: 0.5
                },
                InputEvent::Scroll { y: 2.0 },
                InputEvent::FocusLost,
            ]
        );
    }
}
