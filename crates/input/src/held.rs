use pyramid_camera::{Camera, CameraMovement};
use std::collections::BTreeSet;

/// Movement keys currently held down.
///
/// Applied once per frame so movement is proportional to elapsed time, not to
/// key-repeat rate.
#[derive(Debug, Clone, Default)]
pub struct HeldMovements {
    held: BTreeSet<CameraMovement>,
}

impl HeldMovements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, movement: CameraMovement) {
        self.held.insert(movement);
    }

    pub fn release(&mut self, movement: CameraMovement) {
        self.held.remove(&movement);
    }

    pub fn set(&mut self, movement: CameraMovement, pressed: bool) {
        if pressed {
            self.press(movement);
        } else {
            self.release(movement);
        }
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, movement: CameraMovement) -> bool {
        self.held.contains(&movement)
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Move the camera once per held direction, in declaration order.
    pub fn apply(&self, camera: &mut Camera, delta_time: f32) {
        for movement in &self.held {
            camera.process_keyboard(*movement, delta_time);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn press_release() {
        let mut held = HeldMovements::new();
        held.press(CameraMovement::Forward);
        held.press(CameraMovement::Forward);
        assert!(held.is_held(CameraMovement::Forward));
        held.release(CameraMovement::Forward);
        assert!(held.is_empty());
    }

    #[test]
    fn apply_moves_forward() {
        let mut camera = Camera::default();
        let mut held = HeldMovements::new();
        held.set(CameraMovement::Forward, true);
        held.apply(&mut camera, 1.0);
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), 1e-5));
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut camera = Camera::default();
        let start = camera.position();
        let mut held = HeldMovements::new();
        held.press(CameraMovement::Left);
        held.press(CameraMovement::Right);
        held.apply(&mut camera, 0.25);
        assert!(camera.position().abs_diff_eq(start, 1e-5));
    }

    #[test]
    fn nothing_held_is_noop() {
        let mut camera = Camera::default();
        let before = camera.clone();
        HeldMovements::new().apply(&mut camera, 10.0);
        assert_eq!(camera, before);
    }
}
