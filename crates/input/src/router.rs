use crate::event::InputEvent;
use crate::mouse::MouseTracker;
use pyramid_camera::Camera;

/// Routes input events to camera operations.
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    tracker: MouseTracker,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, camera: &mut Camera, event: InputEvent) {
        match event {
            InputEvent::Move { direction, dt } => camera.process_keyboard(direction, dt),
            InputEvent::CursorMoved { x, y } => {
                let offset = self.tracker.offset(x, y);
                camera.look(offset.x, offset.y);
            }
            InputEvent::MouseDelta { dx, dy } => camera.look(dx, dy),
            InputEvent::Scroll { y } => camera.process_mouse_scroll(y),
            InputEvent::FocusLost => {
                tracing::debug!("focus lost, resetting mouse tracker");
                self.tracker.reset();
            }
        }
    }

    pub fn dispatch_all(
        &mut self,
        camera: &mut Camera,
        events: impl IntoIterator<Item = InputEvent>,
    ) {
        for event in events {
            self.dispatch(camera, event);
        }
    }
}
