//! Rendering subsystem for drawing the timeline
//!
//! This module contains the low-level drawing logic of the demo:
//! - Task row rendering (bars, selection, tooltips)
//! - Time axis rendering (date ticks, labels, today marker)

pub mod timeline_renderer;
pub mod time_axis_renderer;
