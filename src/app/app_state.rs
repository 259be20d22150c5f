//! Centralized application state for the timeline demo.
//!
//! The timeline controller owns the committed view and gesture state; this
//! struct composes it with the demo's own data (sample tasks, selection and
//! the text buffers of the header widgets).

use std::cell::Cell;
use std::rc::Rc;

use chrono::Duration;
use timeline_nav::{SampleSchedule, ScheduledTask, SurfaceId, TimelineConfig, TimelineController};

use crate::ui::input::{CanvasSurface, EguiInputAdapter};

/// Surface ID of the single timeline canvas
pub const TIMELINE_SURFACE_ID: SurfaceId = 1;

/// Days of schedule generated before the initial center date
const SCHEDULE_LEAD_DAYS: i64 = 30;

/// Main application state.
pub struct AppState {
    /// Gesture-driven timeline controller bound to the canvas
    pub timeline: TimelineController<CanvasSurface>,

    /// Translator from egui events to controller events
    pub input_adapter: EguiInputAdapter,

    /// Sample tasks, sorted by start date
    pub tasks: Vec<ScheduledTask>,

    /// Currently selected task ID (if any)
    pub selected_task: Option<u64>,

    /// Screen rects of the task bars drawn last frame
    pub task_hit_rects: Vec<egui::Rect>,

    /// Text buffer of the "Go to" field
    pub go_to_text: String,

    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Number of view changes reported by the controller
    view_changes: Rc<Cell<u64>>,
}

impl AppState {
    /// Creates the state with a controller reading the local clock.
    pub fn new(config: TimelineConfig) -> Self {
        Self::from_controller(TimelineController::new(config))
    }

    /// Creates the state with a controller reading "now" from `clock`.
    #[cfg(test)]
    pub fn with_clock(config: TimelineConfig, clock: fn() -> chrono::NaiveDateTime) -> Self {
        Self::from_controller(TimelineController::with_clock(config, clock))
    }

    fn from_controller(mut timeline: TimelineController<CanvasSurface>) -> Self {
        let view_changes = Rc::new(Cell::new(0));
        let counter = view_changes.clone();
        timeline.set_on_view_change(move |center, days| {
            counter.set(counter.get() + 1);
            log::trace!("view changed: center {center}, {days} days");
        });

        let project_start = (timeline.center_date() - Duration::days(SCHEDULE_LEAD_DAYS)).date();
        let tasks = SampleSchedule::new().generate(project_start);
        log::info!("generated {} sample tasks starting {}", tasks.len(), project_start);

        Self {
            timeline,
            input_adapter: EguiInputAdapter::new(),
            tasks,
            selected_task: None,
            task_hit_rects: Vec::new(),
            go_to_text: String::new(),
            error_message: None,
            view_changes,
        }
    }

    /// Number of committed view changes since startup.
    pub fn view_change_count(&self) -> u64 {
        self.view_changes.get()
    }

    /// Returns the selected task, if it still exists.
    pub fn selected(&self) -> Option<&ScheduledTask> {
        let id = self.selected_task?;
        self.tasks.iter().find(|t| t.id == id)
    }
}
