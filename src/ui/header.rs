//! Header panel UI rendering
//!
//! Handles the top bar with zoom buttons, "today", week stepping, the
//! days-visible field and the "Go to" date field.

use eframe::egui;
use egui::Color32;
use crate::app::AppState;
use crate::ui::panel_manager::PanelInteraction;

/// Renders the application header with navigation controls
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<PanelInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<PanelInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("🔍+").on_hover_text("Zoom in").clicked() {
            interaction = Some(PanelInteraction::ZoomInRequested);
        }
        if ui.button("🔍-").on_hover_text("Zoom out").clicked() {
            interaction = Some(PanelInteraction::ZoomOutRequested);
        }

        ui.separator();

        if ui.button("◀ Week").clicked() {
            interaction = Some(PanelInteraction::PanWeeksRequested(-1));
        }
        if ui.button("Today").clicked() {
            interaction = Some(PanelInteraction::TodayRequested);
        }
        if ui.button("Week ▶").clicked() {
            interaction = Some(PanelInteraction::PanWeeksRequested(1));
        }

        ui.separator();

        let config = state.timeline.config();
        let (min_days, max_days) = (config.min_days, config.max_days);
        let mut days = state.timeline.days_visible();
        let days_response = ui.add(
            egui::DragValue::new(&mut days)
                .range(min_days..=max_days)
                .suffix(" days"),
        );
        if days_response.changed() {
            interaction = Some(PanelInteraction::DaysVisibleChanged(days));
        }

        ui.separator();

        ui.label("Go to:");
        let go_to_response = egui::TextEdit::singleline(&mut state.go_to_text)
            .hint_text("YYYY-MM-DD")
            .desired_width(90.0)
            .show(ui)
            .response;

        let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (go_to_response.lost_focus() && enter_pressed) || ui.button("Go").clicked() {
            interaction = Some(PanelInteraction::GoToDateRequested(state.go_to_text.clone()));
        }
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
