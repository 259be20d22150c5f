//! Time axis rendering logic
//!
//! Handles the visual rendering of the date axis with tick marks, date labels
//! and the "today" marker. Tick spacing follows the zoom level: days when
//! zoomed in, Mondays at medium zoom, and month starts when zoomed out.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use eframe::egui;
use timeline_nav::domain::viewport_operations;
use crate::utils::format_tick;

/// Widest zoom that still labels every day
const DAILY_TICKS_MAX_DAYS: u32 = 21;
/// Widest zoom that labels weeks; beyond this, months are labeled
const WEEKLY_TICKS_MAX_DAYS: u32 = 120;

/// Returns the tick dates inside `[start, end]` and their nominal spacing in days.
pub fn tick_dates(start: NaiveDateTime, end: NaiveDateTime, days_visible: u32) -> (Vec<NaiveDate>, i64) {
    let first_day = start.date();
    let last_day = end.date();
    let mut ticks = Vec::new();

    let step = if days_visible <= DAILY_TICKS_MAX_DAYS {
        let mut day = first_day;
        while day <= last_day {
            ticks.push(day);
            day += Duration::days(1);
        }
        1
    } else if days_visible <= WEEKLY_TICKS_MAX_DAYS {
        let offset = (7 - first_day.weekday().num_days_from_monday() as i64) % 7;
        let mut day = first_day + Duration::days(offset);
        debug_assert_eq!(day.weekday(), Weekday::Mon);
        while day <= last_day {
            ticks.push(day);
            day += Duration::days(7);
        }
        7
    } else {
        let mut month = first_day.with_day(1).unwrap_or(first_day);
        if month < first_day {
            month = next_month(month);
        }
        while month <= last_day {
            ticks.push(month);
            month = next_month(month);
        }
        30
    };

    (ticks, step)
}

fn next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// Renders the date axis with tick marks and labels
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `axis_rect` - The rectangular area to draw the axis in
/// * `start` - First visible date
/// * `end` - Last visible date
/// * `days_visible` - Zoom level in days
/// * `today` - Current time, marked when visible
pub fn render_time_axis(
    ui: &mut egui::Ui,
    axis_rect: egui::Rect,
    start: NaiveDateTime,
    end: NaiveDateTime,
    days_visible: u32,
    today: NaiveDateTime,
) {
    ui.painter().rect_filled(axis_rect, 0.0, ui.visuals().extreme_bg_color);

    let (ticks, step) = tick_dates(start, end, days_visible);
    let text_color = ui.visuals().text_color();

    for tick in ticks {
        let Some(tick_time) = tick.and_hms_opt(0, 0, 0) else {
            continue;
        };
        let x = viewport_operations::date_to_x(tick_time, start, days_visible, axis_rect.left(), axis_rect.width());

        ui.painter().line_segment(
            [egui::pos2(x, axis_rect.top()), egui::pos2(x, axis_rect.top() + 8.0)],
            egui::Stroke::new(2.0, text_color),
        );
        ui.painter().text(
            egui::pos2(x + 2.0, axis_rect.top() + 10.0),
            egui::Align2::LEFT_TOP,
            format_tick(tick, step),
            egui::FontId::proportional(10.0),
            text_color,
        );
    }

    render_today_marker(ui, axis_rect, start, end, days_visible, today);
}

/// Draws a vertical line at `today` spanning `rect`, if it is visible.
pub fn render_today_marker(
    ui: &egui::Ui,
    rect: egui::Rect,
    start: NaiveDateTime,
    end: NaiveDateTime,
    days_visible: u32,
    today: NaiveDateTime,
) {
    if today < start || today > end {
        return;
    }
    let x = viewport_operations::date_to_x(today, start, days_visible, rect.left(), rect.width());
    ui.painter().line_segment(
        [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
        egui::Stroke::new(1.5, egui::Color32::from_rgb(0xe0, 0x4f, 0x4f)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_daily_ticks() {
        let (ticks, step) = tick_dates(at(2025, 3, 1), at(2025, 3, 8), 7);
        assert_eq!(step, 1);
        assert_eq!(ticks.len(), 8);
        assert_eq!(ticks[0], NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    #[test]
    fn test_weekly_ticks_land_on_mondays() {
        let (ticks, step) = tick_dates(at(2025, 3, 1), at(2025, 4, 30), 60);
        assert_eq!(step, 7);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|d| d.weekday() == Weekday::Mon));
        assert_eq!(ticks[0], NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
    }

    #[test]
    fn test_monthly_ticks_cross_year() {
        let (ticks, step) = tick_dates(at(2024, 11, 15), at(2025, 3, 15), 120 + 1);
        assert_eq!(step, 30);
        let months: Vec<(i32, u32)> = ticks.iter().map(|d| (d.year(), d.month())).collect();
        assert_eq!(months, vec![(2024, 12), (2025, 1), (2025, 2), (2025, 3)]);
    }
}
