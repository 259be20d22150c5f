//! Task row rendering logic
//!
//! Handles the visual rendering of task bars, including selection
//! highlighting and hover tooltips. Rows outside the visible date range
//! still allocate their height so the scroll area keeps a stable size.

use chrono::{Duration, NaiveDateTime};
use eframe::egui;
use timeline_nav::domain::viewport_operations;
use timeline_nav::ScheduledTask;

use crate::presentation::color_mapping;

/// Height of one task row in pixels
pub const ROW_HEIGHT: f32 = 22.0;

/// Result of user interaction with a task row
pub enum TaskRowInteraction {
    BarClicked { task_id: u64 },
}

/// Renders a single task row and returns the bar's screen rect when visible.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `task` - The task to draw
/// * `start` - First visible date
/// * `days_visible` - Zoom level in days
/// * `selected_task` - Currently selected task ID (if any)
/// * `is_dragging` - Whether the timeline is currently being dragged
///
/// # Returns
/// * The bar rect (for hit testing on the next frame) and an optional interaction
pub fn render_task_row(
    ui: &mut egui::Ui,
    task: &ScheduledTask,
    start: NaiveDateTime,
    days_visible: u32,
    selected_task: Option<u64>,
    is_dragging: bool,
) -> (Option<egui::Rect>, Option<TaskRowInteraction>) {
    let (row_rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), ROW_HEIGHT),
        egui::Sense::hover(),
    );

    let (Some(task_start), Some(task_end)) = (task.start.and_hms_opt(0, 0, 0), task.end.and_hms_opt(0, 0, 0)) else {
        return (None, None);
    };
    // Bars cover the whole last day.
    let task_end = task_end + Duration::days(1);

    let x_start = viewport_operations::date_to_x(task_start, start, days_visible, row_rect.left(), row_rect.width());
    let x_end = viewport_operations::date_to_x(task_end, start, days_visible, row_rect.left(), row_rect.width());
    if x_end < row_rect.left() || x_start > row_rect.right() {
        return (None, None);
    }

    let bar_rect = egui::Rect::from_min_max(
        egui::pos2(x_start.max(row_rect.left()), row_rect.top() + 2.0),
        egui::pos2(x_end.min(row_rect.right()).max(x_start + 2.0), row_rect.bottom() - 2.0),
    );

    let is_selected = selected_task == Some(task.id);
    let painter = ui.painter_at(row_rect);
    painter.rect_filled(bar_rect, 3.0, color_mapping::room_color(&task.room));
    if is_selected {
        painter.rect_stroke(
            bar_rect,
            3.0,
            egui::Stroke::new(2.0, color_mapping::selection_color()),
            egui::StrokeKind::Outside,
        );
    }

    let label_galley = painter.layout_no_wrap(
        task.name.clone(),
        egui::FontId::proportional(11.0),
        egui::Color32::BLACK,
    );
    if label_galley.size().x + 6.0 <= bar_rect.width() {
        painter.galley(
            egui::pos2(bar_rect.left() + 3.0, bar_rect.center().y - label_galley.size().y / 2.0),
            label_galley,
            egui::Color32::BLACK,
        );
    }

    // Hover sense only, so presses fall through to the canvas.
    let bar_response = ui.interact(bar_rect, ui.id().with(("task_bar", task.id)), egui::Sense::hover());
    let mut interaction = None;

    if bar_response.hovered() && !is_dragging {
        if ui.input(|i| i.pointer.primary_clicked()) {
            interaction = Some(TaskRowInteraction::BarClicked { task_id: task.id });
        }
        bar_response.on_hover_ui(|ui| {
            ui.label(&task.name);
            ui.label(format!("{} to {}", task.start, task.end));
            ui.label(format!("{} day(s)", task.duration_days()));
        });
    }

    (Some(bar_rect), interaction)
}
