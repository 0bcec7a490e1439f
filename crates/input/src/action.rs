use pyramid_camera::CameraMovement;

/// A host-level action bound to a key.
///
/// The host maps physical keys to actions; the application context consumes
/// actions, never raw key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Hold to move the camera in a direction.
    Move(CameraMovement),
    /// Close the window.
    Quit,
    /// Show or hide the camera HUD.
    ToggleHud,
    /// Grab or release the cursor for mouse look.
    ToggleMouseCapture,
    /// Unbound key.
    Noop,
}

impl Action {
    /// Continuous actions stay active while the key is held.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Action::Move(_))
    }
}
