//! Viewport and zoom state management.
//!
//! This module encapsulates the committed view: the date at the middle of the
//! timeline and how many days are visible around it.

use chrono::NaiveDateTime;

use crate::domain::viewport_operations;

/// State related to the visible date range.
///
/// Responsibilities:
/// - Holding the center date and zoom (days visible)
/// - Enforcing the `[min_days, max_days]` zoom bounds on every write
/// - Deriving the visible start/end dates
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    /// Date at the temporal midpoint of the viewport
    center_date: NaiveDateTime,
    /// Number of calendar days spanned by the viewport
    days_visible: u32,
    /// Lower zoom clamp
    min_days: u32,
    /// Upper zoom clamp
    max_days: u32,
}

impl ViewportState {
    /// Creates a viewport. Bounds must satisfy `1 <= min_days <= max_days`.
    pub fn new(center_date: NaiveDateTime, days_visible: u32, min_days: u32, max_days: u32) -> Self {
        debug_assert!(min_days >= 1 && min_days <= max_days);
        Self {
            center_date,
            days_visible: days_visible.clamp(min_days, max_days),
            min_days,
            max_days,
        }
    }

    // ===== Viewport Queries =====

    /// Returns the center date.
    pub fn center_date(&self) -> NaiveDateTime {
        self.center_date
    }

    /// Returns the number of visible days.
    pub fn days_visible(&self) -> u32 {
        self.days_visible
    }

    /// Returns the `(min_days, max_days)` zoom bounds.
    pub fn bounds(&self) -> (u32, u32) {
        (self.min_days, self.max_days)
    }

    /// Returns the visible `(start_date, end_date)`.
    pub fn range(&self) -> (NaiveDateTime, NaiveDateTime) {
        viewport_operations::visible_range(self.center_date, self.days_visible)
    }

    /// Converts a pixel distance to days at the current zoom.
    pub fn pixels_to_days(&self, px: f32, surface_width: f32) -> f64 {
        viewport_operations::pixels_to_days(px, self.days_visible, surface_width)
    }

    // ===== Viewport Mutations =====

    /// Sets the center date.
    pub fn set_center_date(&mut self, center_date: NaiveDateTime) {
        self.center_date = center_date;
    }

    /// Moves the center date by a fractional number of days.
    pub fn shift_days(&mut self, days: f64) {
        self.center_date = viewport_operations::shift_by_days(self.center_date, days);
    }

    /// Sets the zoom, rounding and clamping to the configured bounds.
    pub fn set_days_visible(&mut self, days: f64) {
        self.days_visible = viewport_operations::clamp_days(days, self.min_days, self.max_days);
    }

    /// Multiplies the current zoom by `factor`, then rounds and clamps.
    pub fn scale_days(&mut self, factor: f64) {
        self.set_days_visible(self.days_visible as f64 * factor);
    }
}
