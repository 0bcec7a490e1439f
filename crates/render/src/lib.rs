//! Rendering adapter: renderer-agnostic description of a frame.
//!
//! # Invariants
//! - Renderers never mutate the camera.
//! - A [`Frame`] is derived entirely from the camera and projection.

mod frame;
mod mesh;
mod renderer;

pub use frame::{Frame, pyramid_model_matrix};
pub use mesh::{Mesh, Vertex};
pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    concat!("pyramid-render v", env!("CARGO_PKG_VERSION"))
}
