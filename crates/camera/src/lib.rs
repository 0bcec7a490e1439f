//! First-person camera for the pyramid demo.
//!
//! The camera keeps a yaw/pitch orientation and a position, and derives an
//! orthonormal `front`/`right`/`up` basis from them. The host render loop
//! feeds it keyboard directions, mouse deltas and scroll deltas, and reads
//! back a view matrix plus a field of view in degrees.
//!
//! # Invariants
//! - `front`, `right` and `up` are unit length and mutually orthogonal.
//! - The basis is recomputed after every orientation change, never patched.
//! - Pitch stays inside its clamp range after constrained mouse updates.
//! - Zoom stays inside its clamp range after every scroll update.
//! - The camera has no dependency on any windowing or event-loop crate.

mod camera;
mod projection;
mod settings;

pub use camera::{Camera, CameraMovement};
pub use projection::Projection;
pub use settings::{CameraError, CameraSettings};
