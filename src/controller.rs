//! Gesture-to-range timeline controller.
//!
//! [`TimelineController`] owns the committed view (center date, days visible)
//! and the in-progress gesture state. Hosts feed it input events and
//! animation frames; it exposes an immutable [`TimelineView`] snapshot and
//! notifies an optional listener whenever the view changes.

use chrono::NaiveDateTime;

use crate::config::TimelineConfig;
use crate::input::timeline_input_handler::{self, InputResult};
use crate::input::InputEvent;
use crate::state::{DragDirection, GestureState, ViewportState};
use crate::traits::{Surface, ViewChangeListener};

/// Read-only snapshot of the visible range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineView {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub days_visible: u32,
    pub center_date: NaiveDateTime,
    /// True only while a mouse drag is active
    pub is_dragging: bool,
}

/// Outcome of [`TimelineController::attach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    /// No surface was attached before
    Attached,
    /// The same surface was already attached; nothing changed
    AlreadyAttached,
    /// A different surface was attached; the old binding was torn down
    Rebound,
}

fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Translates touch, mouse and wheel input into a visible date range.
pub struct TimelineController<S: Surface> {
    config: TimelineConfig,
    viewport: ViewportState,
    gesture: GestureState,
    surface: Option<S>,
    listener: Option<ViewChangeListener>,
    clock: fn() -> NaiveDateTime,
}

impl<S: Surface> TimelineController<S> {
    /// Creates a detached controller. Invalid configs are normalized, never rejected.
    pub fn new(config: TimelineConfig) -> Self {
        Self::with_clock(config, local_now)
    }

    /// Creates a detached controller reading "now" from `clock`.
    pub fn with_clock(config: TimelineConfig, clock: fn() -> NaiveDateTime) -> Self {
        let config = config.normalized();
        let center = config.initial_center_date.unwrap_or_else(clock);
        let viewport = ViewportState::new(center, config.initial_days, config.min_days, config.max_days);

        Self {
            config,
            viewport,
            gesture: GestureState::new(),
            surface: None,
            listener: None,
            clock,
        }
    }

    /// Registers the callback fired on every committed view change.
    pub fn set_on_view_change(&mut self, listener: impl FnMut(NaiveDateTime, u32) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    // ===== Surface Lifecycle =====

    /// Binds the controller to `surface`.
    ///
    /// Re-attaching the surface that is already bound is a no-op. Attaching a
    /// different surface first tears down the previous binding.
    pub fn attach(&mut self, surface: S) -> AttachOutcome {
        match &self.surface {
            Some(current) if current.id() == surface.id() => AttachOutcome::AlreadyAttached,
            Some(current) => {
                log::debug!("rebinding timeline from surface {} to {}", current.id(), surface.id());
                self.gesture.reset();
                self.surface = Some(surface);
                AttachOutcome::Rebound
            }
            None => {
                log::debug!("timeline attached to surface {}", surface.id());
                self.surface = Some(surface);
                AttachOutcome::Attached
            }
        }
    }

    /// Unbinds the surface, dropping any gesture in progress and pending momentum.
    pub fn detach(&mut self) -> Option<S> {
        self.gesture.reset();
        let surface = self.surface.take();
        if let Some(s) = &surface {
            log::debug!("timeline detached from surface {}", s.id());
        }
        surface
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Mutable access so hosts can update measured width and scroll offset.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    // ===== Queries =====

    /// Returns the current view snapshot.
    pub fn view(&self) -> TimelineView {
        let (start_date, end_date) = self.viewport.range();
        TimelineView {
            start_date,
            end_date,
            days_visible: self.viewport.days_visible(),
            center_date: self.viewport.center_date(),
            is_dragging: self.gesture.is_mouse_dragging(),
        }
    }

    pub fn center_date(&self) -> NaiveDateTime {
        self.viewport.center_date()
    }

    pub fn days_visible(&self) -> u32 {
        self.viewport.days_visible()
    }

    /// Direction lock of the current (or most recent) mouse drag.
    pub fn drag_direction(&self) -> Option<DragDirection> {
        self.gesture.drag_direction()
    }

    /// Read-only gesture state.
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Returns true while momentum is running; hosts keep requesting frames until false.
    pub fn is_animating(&self) -> bool {
        self.gesture.momentum().is_some()
    }

    /// The normalized config in effect.
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    // ===== Programmatic Navigation =====

    /// Sets the zoom to `round(days)`, clamped to the configured bounds.
    pub fn set_days_visible(&mut self, days: f64) {
        self.commit(|viewport| viewport.set_days_visible(days));
    }

    /// Zooms in one step (fewer days).
    pub fn zoom_in(&mut self) {
        let factor = self.config.tuning.zoom_in_factor;
        self.commit(|viewport| viewport.scale_days(factor));
    }

    /// Zooms out one step (more days).
    pub fn zoom_out(&mut self) {
        let factor = self.config.tuning.zoom_out_factor;
        self.commit(|viewport| viewport.scale_days(factor));
    }

    /// Centers the view on the current time.
    pub fn go_to_today(&mut self) {
        let now = (self.clock)();
        self.commit(|viewport| viewport.set_center_date(now));
    }

    /// Centers the view on `date`.
    pub fn go_to_date(&mut self, date: NaiveDateTime) {
        self.commit(|viewport| viewport.set_center_date(date));
    }

    /// Moves the center by `days` (negative goes back in time).
    pub fn pan_by_days(&mut self, days: f64) {
        self.commit(|viewport| viewport.shift_days(days));
    }

    // ===== Event Dispatch =====

    /// Interprets one input event. Events arriving while detached are ignored.
    pub fn handle_event(&mut self, event: &InputEvent) -> InputResult {
        let before = self.snapshot();
        let Some(surface) = self.surface.as_mut() else {
            return InputResult::Ignored;
        };

        let result = timeline_input_handler::handle_input_event(
            event,
            &mut self.viewport,
            &mut self.gesture,
            surface,
            &self.config.tuning,
        );
        self.notify_if_changed(before);
        result
    }

    /// Runs one momentum frame.
    ///
    /// # Returns
    /// True if momentum is still running and another frame should be scheduled
    pub fn on_animation_frame(&mut self) -> bool {
        let before = self.snapshot();
        let Some(surface) = &self.surface else {
            self.gesture.cancel_momentum();
            return false;
        };

        let width = surface.width();
        timeline_input_handler::advance_momentum(
            &mut self.viewport,
            &mut self.gesture,
            width,
            &self.config.tuning,
        );
        self.notify_if_changed(before);
        self.is_animating()
    }

    // ===== Change Notification =====

    fn snapshot(&self) -> (NaiveDateTime, u32) {
        (self.viewport.center_date(), self.viewport.days_visible())
    }

    fn commit(&mut self, mutate: impl FnOnce(&mut ViewportState)) {
        let before = self.snapshot();
        mutate(&mut self.viewport);
        self.notify_if_changed(before);
    }

    fn notify_if_changed(&mut self, before: (NaiveDateTime, u32)) {
        let after = self.snapshot();
        if after != before {
            if let Some(listener) = self.listener.as_mut() {
                listener(after.0, after.1);
            }
        }
    }
}
