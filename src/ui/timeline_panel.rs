//! Timeline panel UI rendering
//!
//! Handles the central panel: the date axis and the scrollable task rows.
//! Each frame the panel measures the canvas, feeds this frame's input to the
//! timeline controller, advances momentum and then draws the committed view.

use eframe::egui;
use egui::ScrollArea;

use crate::app::{AppState, TIMELINE_SURFACE_ID};
use crate::rendering::timeline_renderer::{self, TaskRowInteraction};
use crate::rendering::time_axis_renderer;
use crate::ui::input::CanvasSurface;
use timeline_nav::Surface;

/// Height of the date axis strip
const AXIS_HEIGHT: f32 = 24.0;

/// Result of timeline panel interactions that need to be handled by the application.
pub enum TimelinePanelInteraction {
    /// A task bar was clicked
    BarClicked { task_id: u64 },
}

/// Renders the complete timeline panel with date axis and scrollable task rows.
pub fn render_timeline_panel(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &mut AppState,
) -> Option<TimelinePanelInteraction> {
    let canvas_rect = ui.available_rect_before_wrap();

    bind_surface(state, canvas_rect.width());
    process_input(ctx, state, canvas_rect);

    if state.timeline.on_animation_frame() {
        ctx.request_repaint();
    }

    let view = state.timeline.view();
    let today = chrono::Local::now().naive_local();

    if view.is_dragging {
        ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
    }

    // Date axis header (fixed at top)
    let (axis_rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), AXIS_HEIGHT), egui::Sense::hover());
    time_axis_renderer::render_time_axis(ui, axis_rect, view.start_date, view.end_date, view.days_visible, today);

    let mut interaction = None;
    let mut hit_rects = Vec::new();
    let scroll_top = state.timeline.surface().map(|s| s.scroll_top()).unwrap_or(0.0);

    // Touch and mouse drags are owned by the controller, wheel scrolling stays native.
    let scroll_output = ScrollArea::vertical()
        .id_salt("timeline_scroll_area")
        .drag_to_scroll(false)
        .auto_shrink([false, false])
        .vertical_scroll_offset(scroll_top)
        .show(ui, |ui| {
            for task in &state.tasks {
                let (bar_rect, row_interaction) = timeline_renderer::render_task_row(
                    ui,
                    task,
                    view.start_date,
                    view.days_visible,
                    state.selected_task,
                    view.is_dragging,
                );
                hit_rects.extend(bar_rect);
                if let Some(TaskRowInteraction::BarClicked { task_id }) = row_interaction {
                    interaction = Some(TimelinePanelInteraction::BarClicked { task_id });
                }
            }
        });

    time_axis_renderer::render_today_marker(
        ui,
        scroll_output.inner_rect,
        view.start_date,
        view.end_date,
        view.days_visible,
        today,
    );

    // Native wheel scrolling may have moved the offset.
    if let Some(surface) = state.timeline.surface_mut() {
        surface.set_scroll_top(scroll_output.state.offset.y);
    }
    state.task_hit_rects = hit_rects;

    interaction
}

/// Attaches the canvas on the first frame and keeps its width current.
fn bind_surface(state: &mut AppState, width: f32) {
    match state.timeline.surface_mut() {
        Some(surface) => surface.set_width(width),
        None => {
            let mut surface = CanvasSurface::new(TIMELINE_SURFACE_ID);
            surface.set_width(width);
            state.timeline.attach(surface);
        }
    }
}

/// Feeds this frame's egui events to the controller.
fn process_input(ctx: &egui::Context, state: &mut AppState, canvas_rect: egui::Rect) {
    let (events, time_ms) = ctx.input(|i| (i.events.clone(), i.time * 1000.0));
    let translated = state
        .input_adapter
        .translate(&events, time_ms, canvas_rect, &state.task_hit_rects);

    for event in &translated {
        state.timeline.handle_event(event);
    }
}
