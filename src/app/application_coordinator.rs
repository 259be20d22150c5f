//! Application-level coordination and workflow management.
//!
//! Applies panel interactions (header buttons, date jumps, task clicks) to the
//! timeline controller and the demo state.

use crate::app::AppState;
use crate::ui::panel_manager::PanelInteraction;
use crate::utils::parse_date_input;

/// Days moved by the week stepping buttons
const WEEK_DAYS: f64 = 7.0;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Applies one panel interaction to the application state.
    pub fn handle_interaction(state: &mut AppState, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::ZoomInRequested => state.timeline.zoom_in(),
            PanelInteraction::ZoomOutRequested => state.timeline.zoom_out(),
            PanelInteraction::TodayRequested => state.timeline.go_to_today(),
            PanelInteraction::PanWeeksRequested(weeks) => {
                state.timeline.pan_by_days(weeks as f64 * WEEK_DAYS);
            }
            PanelInteraction::DaysVisibleChanged(days) => {
                state.timeline.set_days_visible(days as f64);
            }
            PanelInteraction::GoToDateRequested(text) => Self::go_to_date(state, &text),
            PanelInteraction::TaskBarClicked { task_id } => Self::handle_task_click(state, task_id),
        }
    }

    /// Centers the timeline on the date typed into the "Go to" field.
    ///
    /// Invalid input leaves the view unchanged and sets an error message.
    fn go_to_date(state: &mut AppState, text: &str) {
        let Some(date) = parse_date_input(text) else {
            log::warn!("rejected date input {text:?}");
            state.error_message = Some(format!("Invalid date \"{}\": expected YYYY-MM-DD", text.trim()));
            return;
        };

        // Noon keeps the whole day in the middle of the view.
        if let Some(target) = date.and_hms_opt(12, 0, 0) {
            state.timeline.go_to_date(target);
        }
        state.error_message = None;
    }

    /// Toggles selection of a task.
    fn handle_task_click(state: &mut AppState, task_id: u64) {
        if state.selected_task == Some(task_id) {
            state.selected_task = None;
        } else {
            state.selected_task = Some(task_id);
            if let Some(task) = state.selected() {
                log::debug!("selected task {} ({})", task.id, task.name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use timeline_nav::TimelineConfig;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap().and_hms_opt(9, 0, 0).unwrap()
    }

    fn state() -> AppState {
        AppState::with_clock(TimelineConfig::default(), fixed_now)
    }

    #[test]
    fn test_week_buttons_pan_seven_days() {
        let mut state = state();
        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::PanWeeksRequested(-1));
        assert_eq!(state.timeline.center_date(), fixed_now() - chrono::Duration::days(7));
        assert_eq!(state.view_change_count(), 1);
    }

    #[test]
    fn test_go_to_date() {
        let mut state = state();
        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::GoToDateRequested("2025-12-24".to_string()),
        );
        assert_eq!(
            state.timeline.center_date(),
            NaiveDate::from_ymd_opt(2025, 12, 24).unwrap().and_hms_opt(12, 0, 0).unwrap()
        );
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_invalid_date_sets_error() {
        let mut state = state();
        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::GoToDateRequested("next tuesday".to_string()),
        );
        assert_eq!(state.timeline.center_date(), fixed_now());
        let message = state.error_message.unwrap();
        assert!(message.contains("YYYY-MM-DD"), "{message}");
    }

    #[test]
    fn test_task_click_toggles_selection() {
        let mut state = state();
        let id = state.tasks[0].id;
        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::TaskBarClicked { task_id: id });
        assert_eq!(state.selected_task, Some(id));
        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::TaskBarClicked { task_id: id });
        assert_eq!(state.selected_task, None);
    }

    #[test]
    fn test_days_field_clamps() {
        let mut state = state();
        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::DaysVisibleChanged(1000));
        assert_eq!(state.timeline.days_visible(), 365);
    }
}
