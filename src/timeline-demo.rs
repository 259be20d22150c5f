//! Timeline Navigation Demo
//!
//! This binary hosts the gesture-driven timeline controller in an egui window
//! on a sample renovation schedule. The demo features:
//! - Touch pan with momentum, two-finger pinch zoom
//! - Mouse drag with direction lock (horizontal pans, vertical scrolls)
//! - Ctrl/Cmd+wheel zoom and horizontal wheel pan
//! - Header controls for zoom, today, week stepping and date jumps

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state, coordination and settings persistence
//! - `presentation/` - Visual styling and color mapping
//! - `utils/` - Date formatting and parsing
//! - `ui/` - UI panel rendering and egui input translation
//! - `rendering/` - Low-level rendering for task rows and the date axis

use eframe::egui;
use std::path::PathBuf;

mod utils;
mod presentation;
mod app;
mod rendering;
mod ui;

use app::{AppState, ApplicationCoordinator, PersistedView, SettingsCoordinator, CONFIG_KEY, VIEW_KEY};
use ui::panel_manager::PanelManager;

/// Application entry point: sets up logging and launches the demo window.
fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // Optional JSON config path as the first argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 700.0])
            .with_title("Timeline Navigation Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Timeline Navigation Demo",
        options,
        Box::new(move |cc| Ok(Box::new(TimelineDemoApp::new(cc, config_path)))),
    )
}

/// The timeline demo application.
///
/// Delegates most functionality to coordinators:
/// - `SettingsCoordinator` resolves and persists the config and last view
/// - `ApplicationCoordinator` applies panel interactions to the controller
/// - `PanelManager` handles UI panel layout and rendering
struct TimelineDemoApp {
    /// Centralized application state
    state: AppState,
}

impl TimelineDemoApp {
    /// Creates the app with config and view restored from the CLI path,
    /// the user config file or persistent storage.
    fn new(cc: &eframe::CreationContext, config_path: Option<PathBuf>) -> Self {
        let user_config = SettingsCoordinator::user_config_path();
        let resolved = SettingsCoordinator::resolve_config(config_path.as_deref(), user_config.as_deref(), cc.storage);

        log::info!("timeline config from {}", resolved.source.describe());

        let mut state = AppState::new(resolved.config);
        state.error_message = resolved.error;

        Self { state }
    }

    fn persist(&self, storage: &mut dyn eframe::Storage) {
        let view = self.state.timeline.view();
        SettingsCoordinator::save_setting(storage, CONFIG_KEY, self.state.timeline.config());
        SettingsCoordinator::save_setting(
            storage,
            VIEW_KEY,
            &PersistedView {
                center_date: view.center_date,
                days_visible: view.days_visible,
            },
        );
    }
}

impl eframe::App for TimelineDemoApp {
    /// Called when the app is being shut down - ensures the last view is saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.persist(storage);
    }

    /// Main update loop: render panels, then apply their interaction.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            ApplicationCoordinator::handle_interaction(&mut self.state, interaction);
        }
    }
}
