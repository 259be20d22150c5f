//! Application-level modules for the timeline demo.
//!
//! This module contains the application coordinator, settings persistence
//! and centralized state management.

mod app_state;
mod application_coordinator;
mod settings_coordinator;

pub use app_state::{AppState, TIMELINE_SURFACE_ID};
pub use application_coordinator::ApplicationCoordinator;
pub use settings_coordinator::{PersistedView, SettingsCoordinator, CONFIG_KEY, VIEW_KEY};
