//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the timeline demo:
//! - Header panel (zoom, today, week stepping, days field, date jump)
//! - Timeline panel (date axis and scrollable task rows)
//! - Status bar (visible range and gesture flags)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (egui event translation)

pub mod header;
pub mod timeline_panel;
pub mod status_bar;
pub mod panel_manager;
pub mod input;
