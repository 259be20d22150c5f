//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying the visible range and gesture state.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::utils::format_range;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    let view = state.timeline.view();

    ui.horizontal(|ui| {
        ui.label(RichText::new(format_range(view.start_date, view.end_date)).strong());
        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format!("{} days", view.days_visible)).strong());

        if view.is_dragging {
            ui.label(RichText::new("| Dragging").strong().color(egui::Color32::YELLOW));
        }
        if state.timeline.is_animating() {
            ui.label(RichText::new("| Momentum").strong().color(egui::Color32::LIGHT_BLUE));
        }

        ui.label(RichText::new("|").strong());
        match state.selected() {
            Some(task) => ui.label(format!(
                "{}: {} to {} ({} days)",
                task.name,
                task.start,
                task.end,
                task.duration_days()
            )),
            None => ui.label("No task selected"),
        };

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("View changes: {}", state.view_change_count()));
        });
    });
}
