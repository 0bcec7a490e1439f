//! wgpu render backend for the pyramid demo.
//!
//! Draws a single vertex-colored mesh with a depth buffer. The host owns the
//! window; this crate only needs something wgpu can build a surface from.
//!
//! # Invariants
//! - The renderer reads a [`pyramid_render::Frame`] and never the camera.
//! - Surface loss is recovered by reconfiguring, never by panicking.

mod context;
mod gpu;
mod shaders;

pub use context::{GpuContext, RenderError};
pub use gpu::{PyramidRenderer, Uniforms};
