//! State management modules for the timeline controller.
//!
//! This module contains state-only logic:
//! - Viewport state (center date, days visible, zoom bounds)
//! - Interaction state (active modality, gesture anchors, momentum)

mod viewport;
mod interaction;

pub use viewport::ViewportState;
pub use interaction::{DragDirection, GestureState, Modality};
