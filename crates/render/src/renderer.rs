use crate::frame::Frame;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads a frame description and produces output. It never
/// touches the camera that produced the frame.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &Frame) -> Self::Output;
}

/// Text renderer for headless runs and tests.
///
/// Produces a human-readable summary of the camera and matrices.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &Frame) -> String {
        let mut out = String::new();
        out.push_str("=== Frame ===\n");
        out.push_str(&format!(
            "Camera: eye=({:.3}, {:.3}, {:.3}) front=({:.3}, {:.3}, {:.3}) fov={:.1}\n",
            frame.eye.x,
            frame.eye.y,
            frame.eye.z,
            frame.front.x,
            frame.front.y,
            frame.front.z,
            frame.fov_degrees
        ));

        out.push_str("View:\n");
        // Rows, so the text reads like the math.
        let view = frame.view.transpose();
        for row in view.to_cols_array_2d() {
            out.push_str(&format!(
                "  [{:8.3} {:8.3} {:8.3} {:8.3}]\n",
                row[0], row[1], row[2], row[3]
            ));
        }

        out
    }
}
