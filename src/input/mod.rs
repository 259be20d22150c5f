//! Input handling subsystem for the timeline surface.
//!
//! This module contains:
//! - The platform-neutral input event model
//! - Timeline input handling (touch pan, pinch, mouse drag, wheel, momentum)

pub mod events;
pub mod timeline_input_handler;

pub use events::{EventTarget, InputEvent, Modifiers, MouseButton};
pub use timeline_input_handler::InputResult;
