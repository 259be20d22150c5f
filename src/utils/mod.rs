//! Utility modules for the timeline demo.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_range, format_tick, parse_date_input};
