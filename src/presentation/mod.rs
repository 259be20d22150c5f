//! Presentation layer for visual styling decisions.
//!
//! This module maps schedule concepts to visual representation:
//! - Room-based bar colors
//! - Selection highlight

pub mod color_mapping;
