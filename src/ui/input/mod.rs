//! Input handling subsystem for UI interactions.
//!
//! This module contains the egui side of input handling:
//! - Canvas surface measured during layout
//! - Translation of egui touch, pointer and wheel events into controller events

pub mod egui_input_adapter;

pub use egui_input_adapter::{CanvasSurface, EguiInputAdapter};
