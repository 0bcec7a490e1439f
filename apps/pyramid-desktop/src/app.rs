use crate::clock::FrameClock;
use pyramid_camera::{Camera, CameraError, Projection};
use pyramid_config::AppConfig;
use pyramid_input::{Action, HeldMovements, InputEvent, InputRouter};
use pyramid_render::Frame;

/// Something the window host has to do in response to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRequest {
    Exit,
    CaptureCursor(bool),
}

/// Application state: the camera plus everything that drives it.
pub struct AppContext {
    pub camera: Camera,
    pub projection: Projection,
    pub clock: FrameClock,
    pub show_hud: bool,
    router: InputRouter,
    held: HeldMovements,
    mouse_captured: bool,
    last_dt: f32,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Result<Self, CameraError> {
        Ok(Self {
            camera: Camera::from_settings(&config.camera)?,
            projection: config.projection(),
            clock: FrameClock::new(config.timing.max_frame_delta),
            show_hud: false,
            router: InputRouter::new(),
            held: HeldMovements::new(),
            mouse_captured: false,
            last_dt: 0.0,
        })
    }

    /// Advance one frame.
    pub fn update(&mut self, dt: f32) {
        self.held.apply(&mut self.camera, dt);
        self.last_dt = dt;
    }

    pub fn last_frame_time(&self) -> f32 {
        self.last_dt
    }

    pub fn mouse_captured(&self) -> bool {
        self.mouse_captured
    }

    pub fn set_mouse_captured(&mut self, captured: bool) {
        if captured != self.mouse_captured {
            // Whatever the cursor did while free must not become a look delta.
            self.router.dispatch(&mut self.camera, InputEvent::FocusLost);
        }
        self.mouse_captured = captured;
    }

    pub fn handle_action(&mut self, action: Action, pressed: bool) -> Option<HostRequest> {
        if let Action::Move(movement) = action {
            self.held.set(movement, pressed);
            return None;
        }
        if !pressed {
            return None;
        }
        match action {
            Action::Quit => Some(HostRequest::Exit),
            Action::ToggleHud => {
                self.show_hud = !self.show_hud;
                tracing::debug!(show_hud = self.show_hud, "toggled HUD");
                None
            }
            Action::ToggleMouseCapture => Some(HostRequest::CaptureCursor(!self.mouse_captured)),
            Action::Move(_) | Action::Noop => None,
        }
    }

    /// Forward a pointer or wheel event. Look input is dropped while the
    /// cursor is free.
    pub fn handle_input(&mut self, event: InputEvent) {
        let is_look = matches!(
            event,
            InputEvent::CursorMoved { .. } | InputEvent::MouseDelta { .. }
        );
        if is_look && !self.mouse_captured {
            return;
        }
        self.router.dispatch(&mut self.camera, event);
    }

    /// Raw device motion in device units. Device y grows downwards like
    /// window coordinates, so it is reversed before it becomes a look delta.
    pub fn mouse_motion(&mut self, dx: f64, dy: f64) {
        self.handle_input(InputEvent::MouseDelta {
            dx: dx as f32,
            dy: -dy as f32,
        });
    }

    /// Keys released while unfocused never arrive, so drop them all.
    pub fn focus_lost(&mut self) {
        self.held.clear();
        self.router.dispatch(&mut self.camera, InputEvent::FocusLost);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }

    pub fn frame(&self) -> Frame {
        Frame::from_camera(&self.camera, &self.projection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use pyramid_camera::CameraMovement;

    fn context() -> AppContext {
        AppContext::new(&AppConfig::default()).unwrap()
    }

    #[test]
    fn starts_at_configured_position() {
        let ctx = context();
        assert_eq!(ctx.camera.position(), Vec3::new(0.0, 0.0, 3.0));
        assert!((ctx.projection.aspect - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn held_key_moves_each_frame_until_released() {
        let mut ctx = context();
        ctx.handle_action(Action::Move(CameraMovement::Forward), true);
        ctx.update(0.5);
        ctx.update(0.5);
        assert!((ctx.camera.position().z - 0.5).abs() < 1e-4);

        ctx.handle_action(Action::Move(CameraMovement::Forward), false);
        ctx.update(1.0);
        assert!((ctx.camera.position().z - 0.5).abs() < 1e-4);
    }

    #[test]
    fn quit_and_capture_requests() {
        let mut ctx = context();
        assert_eq!(ctx.handle_action(Action::Quit, true), Some(HostRequest::Exit));
        assert_eq!(ctx.handle_action(Action::Quit, false), None);
        assert_eq!(
            ctx.handle_action(Action::ToggleMouseCapture, true),
            Some(HostRequest::CaptureCursor(true))
        );
    }

    #[test]
    fn hud_toggles_on_press_only() {
        let mut ctx = context();
        ctx.handle_action(Action::ToggleHud, true);
        ctx.handle_action(Action::ToggleHud, false);
        assert!(ctx.show_hud);
    }

    #[test]
    fn look_ignored_while_cursor_free() {
        let mut ctx = context();
        ctx.handle_input(InputEvent::MouseDelta { dx: 100.0, dy: 0.0 });
        assert_eq!(ctx.camera.yaw(), -90.0);

        ctx.set_mouse_captured(true);
        ctx.handle_input(InputEvent::MouseDelta { dx: 100.0, dy: 0.0 });
        assert!((ctx.camera.yaw() - (-80.0)).abs() < 1e-4);
    }

    #[test]
    fn downward_device_motion_lowers_pitch() {
        let mut ctx = context();
        ctx.set_mouse_captured(true);
        ctx.mouse_motion(0.0, 100.0);
        assert!((ctx.camera.pitch() - (-10.0)).abs() < 1e-4);
        assert!(ctx.camera.front().y < 0.0);

        ctx.mouse_motion(0.0, -50.0);
        assert!((ctx.camera.pitch() - (-5.0)).abs() < 1e-4);
    }

    #[test]
    fn device_motion_keeps_turning_past_window_width() {
        let mut ctx = context();
        ctx.set_mouse_captured(true);
        for _ in 0..20 {
            ctx.mouse_motion(100.0, 0.0);
        }
        // 2000 device units at 0.1 sensitivity.
        assert!((ctx.camera.yaw() - 110.0).abs() < 1e-3);
    }

    #[test]
    fn device_motion_ignored_while_cursor_free() {
        let mut ctx = context();
        ctx.mouse_motion(40.0, 40.0);
        assert_eq!(ctx.camera.yaw(), -90.0);
        assert_eq!(ctx.camera.pitch(), 0.0);
    }

    #[test]
    fn scroll_works_without_capture() {
        let mut ctx = context();
        ctx.handle_input(InputEvent::Scroll { y: 5.0 });
        assert_eq!(ctx.camera.zoom(), 40.0);
        assert_eq!(ctx.frame().fov_degrees, 40.0);
    }

    #[test]
    fn focus_loss_releases_keys() {
        let mut ctx = context();
        ctx.handle_action(Action::Move(CameraMovement::Up), true);
        ctx.focus_lost();
        ctx.update(1.0);
        assert_eq!(ctx.camera.position(), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn resize_updates_projection() {
        let mut ctx = context();
        ctx.resize(1600, 900);
        assert!((ctx.projection.aspect - 16.0 / 9.0).abs() < 1e-6);
    }
}
