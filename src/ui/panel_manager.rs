//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, timeline, status) and funnels their
//! interactions into a single result for the application coordinator.

use crate::app::AppState;
use crate::ui::{header, status_bar, timeline_panel};

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelInteraction {
    ZoomInRequested,
    ZoomOutRequested,
    TodayRequested,
    /// Move the view by whole weeks (negative goes back)
    PanWeeksRequested(i32),
    /// The days-visible field was edited
    DaysVisibleChanged(u32),
    /// Raw text of the "Go to" field
    GoToDateRequested(String),
    /// A task bar was clicked
    TaskBarClicked { task_id: u64 },
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(header_interaction);
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let timeline_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(timeline_frame)
            .show(ctx, |ui| {
                if let Some(timeline_interaction) = timeline_panel::render_timeline_panel(ui, ctx, state) {
                    interaction = Some(match timeline_interaction {
                        timeline_panel::TimelinePanelInteraction::BarClicked { task_id } => {
                            PanelInteraction::TaskBarClicked { task_id }
                        }
                    });
                }
            });

        interaction
    }
}
