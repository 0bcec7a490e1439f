use pyramid_camera::CameraMovement;
use pyramid_input::Action;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Fixed key bindings.
pub fn action_for(key: KeyCode) -> Action {
    match key {
        KeyCode::KeyW => Action::Move(CameraMovement::Forward),
        KeyCode::KeyS => Action::Move(CameraMovement::Backward),
        KeyCode::KeyA => Action::Move(CameraMovement::Left),
        KeyCode::KeyD => Action::Move(CameraMovement::Right),
        KeyCode::KeyQ => Action::Move(CameraMovement::Up),
        KeyCode::KeyE => Action::Move(CameraMovement::Down),
        KeyCode::Escape => Action::Quit,
        KeyCode::F1 => Action::ToggleHud,
        KeyCode::Tab => Action::ToggleMouseCapture,
        _ => Action::Noop,
    }
}

pub fn mouse_button_name(button: MouseButton) -> Option<&'static str> {
    match button {
        MouseButton::Left => Some("left"),
        MouseButton::Middle => Some("middle"),
        MouseButton::Right => Some("right"),
        _ => None,
    }
}
