use crate::app::AppContext;
use egui::Context as EguiContext;

/// Camera readout overlay, toggled with F1.
pub fn draw(ctx: &EguiContext, state: &AppContext) {
    if !state.show_hud {
        return;
    }

    let camera = &state.camera;
    let dt = state.last_frame_time();

    egui::Window::new("Camera")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            let p = camera.position();
            ui.label(format!("Position: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z));
            let f = camera.front();
            ui.label(format!("Front: ({:.2}, {:.2}, {:.2})", f.x, f.y, f.z));
            ui.label(format!(
                "Yaw: {:.1}  Pitch: {:.1}",
                camera.yaw(),
                camera.pitch()
            ));
            ui.label(format!("FOV: {:.1}", camera.fov_degrees()));
            ui.label(format!("Speed: {:.1}", camera.movement_speed()));
            ui.separator();
            if dt > 0.0 {
                ui.label(format!("Frame: {:.2} ms ({:.0} fps)", dt * 1000.0, 1.0 / dt));
            }
            ui.label(if state.mouse_captured() {
                "Mouse: captured (Tab to release)"
            } else {
                "Mouse: free (Tab to capture)"
            });
            ui.separator();
            ui.small("WASD: Move | Q/E: Up/Down | Wheel: Zoom | Esc: Quit");
        });
}
