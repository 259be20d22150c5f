//! Viewport operations for coordinate and date conversions.
//!
//! This module provides pure functions for:
//! - Converting pixel distances into fractional day counts
//! - Shifting dates by fractional days
//! - Clamping zoom values to the configured day range
//! - Placing dates on screen
//! - Two-finger geometry for pinch gestures
//!
//! These functions are stateless and can be tested independently.

use chrono::{Duration, NaiveDateTime};
use egui::Pos2;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Converts a pixel distance into a fractional number of days.
///
/// # Arguments
/// * `px` - Pixel distance (signed)
/// * `days_visible` - Days currently spanned by the viewport
/// * `surface_width` - Live measured width of the surface in pixels
///
/// # Returns
/// `px * days_visible / surface_width`, or 0 when the width is not usable
pub fn pixels_to_days(px: f32, days_visible: u32, surface_width: f32) -> f64 {
    if !surface_width.is_finite() || surface_width <= 0.0 || !px.is_finite() {
        return 0.0;
    }
    px as f64 * (days_visible as f64 / surface_width as f64)
}

/// Shifts a date by a fractional number of days, with millisecond resolution.
///
/// Deltas that cannot be represented leave the date unchanged.
pub fn shift_by_days(date: NaiveDateTime, days: f64) -> NaiveDateTime {
    let ms = days * MS_PER_DAY;
    if !ms.is_finite() || ms.abs() >= i64::MAX as f64 {
        return date;
    }
    date.checked_add_signed(Duration::milliseconds(ms.round() as i64))
        .unwrap_or(date)
}

/// Rounds a requested zoom and clamps it to `[min_days, max_days]`.
///
/// Non-finite requests clamp to the nearest bound (NaN yields `min_days`).
pub fn clamp_days(days: f64, min_days: u32, max_days: u32) -> u32 {
    if days.is_nan() {
        return min_days;
    }
    let rounded = days.round();
    if rounded <= min_days as f64 {
        min_days
    } else if rounded >= max_days as f64 {
        max_days
    } else {
        rounded as u32
    }
}

/// Returns the (start, end) dates of a viewport centered on `center`.
///
/// The start lies `floor(days/2)` days before the center and the end
/// `ceil(days/2)` days after it, so the span is exactly `days_visible`.
pub fn visible_range(center: NaiveDateTime, days_visible: u32) -> (NaiveDateTime, NaiveDateTime) {
    let before = (days_visible / 2) as i64;
    let after = days_visible as i64 - before;
    let start = center.checked_sub_signed(Duration::days(before)).unwrap_or(center);
    let end = center.checked_add_signed(Duration::days(after)).unwrap_or(center);
    (start, end)
}

/// Converts a date to an X coordinate for a viewport starting at `start`.
///
/// # Arguments
/// * `date` - The date to place
/// * `start` - The first visible date
/// * `days_visible` - Days spanned by `width`
/// * `left` - X coordinate of the viewport's left edge
/// * `width` - Viewport width in pixels
pub fn date_to_x(date: NaiveDateTime, start: NaiveDateTime, days_visible: u32, left: f32, width: f32) -> f32 {
    if days_visible == 0 {
        return left;
    }
    let days = (date - start).num_milliseconds() as f64 / MS_PER_DAY;
    left + (days * width as f64 / days_visible as f64) as f32
}

/// Euclidean distance between two touch points.
pub fn touch_distance(a: Pos2, b: Pos2) -> f32 {
    a.distance(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_pixels_to_days_scales_with_zoom() {
        assert_eq!(pixels_to_days(100.0, 30, 1000.0), 3.0);
        assert_eq!(pixels_to_days(-500.0, 60, 1000.0), -30.0);
    }

    #[test]
    fn test_pixels_to_days_zero_width() {
        assert_eq!(pixels_to_days(100.0, 30, 0.0), 0.0);
        assert_eq!(pixels_to_days(100.0, 30, f32::NAN), 0.0);
        assert_eq!(pixels_to_days(100.0, 30, -10.0), 0.0);
    }

    #[test]
    fn test_shift_by_fractional_days() {
        let shifted = shift_by_days(date(2024, 1, 10), 1.5);
        assert_eq!(shifted, date(2024, 1, 11) + Duration::hours(12));
        assert_eq!(shift_by_days(date(2024, 1, 10), -10.0), date(2023, 12, 31));
    }

    #[test]
    fn test_shift_ignores_unrepresentable_delta() {
        let d = date(2024, 1, 10);
        assert_eq!(shift_by_days(d, f64::INFINITY), d);
        assert_eq!(shift_by_days(d, 1e300), d);
    }

    #[test]
    fn test_clamp_days() {
        assert_eq!(clamp_days(1.0, 7, 365), 7);
        assert_eq!(clamp_days(1000.0, 7, 365), 365);
        assert_eq!(clamp_days(20.4, 7, 365), 20);
        assert_eq!(clamp_days(20.5, 7, 365), 21);
        assert_eq!(clamp_days(-5.0, 7, 365), 7);
        assert_eq!(clamp_days(f64::INFINITY, 7, 365), 365);
        assert_eq!(clamp_days(f64::NAN, 7, 365), 7);
    }

    #[test]
    fn test_visible_range_odd_and_even() {
        let center = date(2024, 6, 15);
        assert_eq!(visible_range(center, 30), (date(2024, 5, 31), date(2024, 6, 30)));
        assert_eq!(visible_range(center, 7), (date(2024, 6, 12), date(2024, 6, 19)));
    }

    #[test]
    fn test_date_to_x() {
        let start = date(2024, 6, 1);
        assert_eq!(date_to_x(start, start, 30, 10.0, 300.0), 10.0);
        assert_eq!(date_to_x(date(2024, 6, 16), start, 30, 10.0, 300.0), 160.0);
        assert_eq!(date_to_x(date(2024, 5, 31), start, 30, 0.0, 300.0), -10.0);
    }

    #[test]
    fn test_touch_distance() {
        assert_eq!(touch_distance(Pos2::new(0.0, 0.0), Pos2::new(30.0, 40.0)), 50.0);
    }
}
