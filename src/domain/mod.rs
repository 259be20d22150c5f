//! Domain logic modules for the timeline controller.
//!
//! This module contains core logic:
//! - Viewport operations (pixel/day conversions, date shifting, zoom clamping)
//! - Momentum (inertial pan continuation)

pub mod viewport_operations;
pub mod momentum;
