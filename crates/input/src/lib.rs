//! Input layer between the window host and the camera.
//!
//! The host translates platform events into [`InputEvent`]s or [`Action`]s;
//! nothing in here knows about a windowing library.
//!
//! # Invariants
//! - The camera only ever sees numeric deltas, directions and elapsed time.
//! - Absolute cursor positions are turned into deltas by [`MouseTracker`].

pub mod action;
pub mod event;
pub mod held;
pub mod mouse;
pub mod router;
pub mod script;

pub use action::Action;
pub use event::InputEvent;
pub use held::HeldMovements;
pub use mouse::{MouseTracker, PIXELS_PER_SCROLL_LINE, scroll_lines_from_pixels};
pub use router::InputRouter;
pub use script::{InputScript, ScriptError};
