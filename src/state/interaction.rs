//! Gesture interaction state.
//!
//! This module encapsulates all state related to an ongoing gesture:
//! the active modality, the anchors captured when it started, velocity
//! sampling, the mouse drag direction lock, and any running momentum.

use chrono::NaiveDateTime;
use egui::Pos2;

use crate::domain::momentum::Momentum;

/// The single input modality currently driving the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modality {
    #[default]
    Idle,
    /// One-finger touch pan
    TouchPan,
    /// Two-finger touch pinch
    Pinch,
    /// Primary-button mouse drag
    MouseDrag,
}

/// Axis a mouse drag has locked onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragDirection {
    /// Drag pans dates
    Horizontal,
    /// Drag scrolls content
    Vertical,
}

/// State of an in-progress interaction.
///
/// Responsibilities:
/// - Tracking which modality is active (exactly one, or idle)
/// - Holding the gesture-start anchors all deltas are computed from
/// - Sampling horizontal velocity between consecutive move events
/// - Holding the momentum animation, if one is running
#[derive(Debug, Clone)]
pub struct GestureState {
    modality: Modality,
    /// Pointer position at gesture start
    start_pos: Pos2,
    /// Center date at gesture start
    start_center_date: NaiveDateTime,
    /// Finger distance at pinch start
    initial_pinch_distance: f32,
    /// Days visible at pinch start
    initial_days_visible: u32,
    /// Signed horizontal speed in px/ms
    velocity: f32,
    /// Previous velocity sample (x, timestamp in ms)
    last_sample: (f32, f64),
    /// Mouse drag axis lock, resolved once per drag
    drag_direction: Option<DragDirection>,
    /// Scroll offset at mouse drag start
    start_scroll_top: f32,
    momentum: Option<Momentum>,
}

impl GestureState {
    /// Creates an idle gesture state.
    pub fn new() -> Self {
        Self {
            modality: Modality::Idle,
            start_pos: Pos2::ZERO,
            start_center_date: NaiveDateTime::default(),
            initial_pinch_distance: 0.0,
            initial_days_visible: 0,
            velocity: 0.0,
            last_sample: (0.0, 0.0),
            drag_direction: None,
            start_scroll_top: 0.0,
            momentum: None,
        }
    }

    /// Resets all interaction state, including running momentum.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // ===== Modality Queries =====

    /// Returns the active modality.
    pub fn modality(&self) -> Modality {
        self.modality
    }

    /// Returns true while a one-finger touch pan is active.
    pub fn is_panning(&self) -> bool {
        self.modality == Modality::TouchPan
    }

    /// Returns true while a two-finger pinch is active.
    pub fn is_pinching(&self) -> bool {
        self.modality == Modality::Pinch
    }

    /// Returns true while a mouse drag is active.
    pub fn is_mouse_dragging(&self) -> bool {
        self.modality == Modality::MouseDrag
    }

    /// Returns the drag direction lock for the current (or last) mouse drag.
    pub fn drag_direction(&self) -> Option<DragDirection> {
        self.drag_direction
    }

    /// Returns the last sampled velocity in px/ms.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Returns the running momentum, if any.
    pub fn momentum(&self) -> Option<&Momentum> {
        self.momentum.as_ref()
    }

    pub fn start_pos(&self) -> Pos2 {
        self.start_pos
    }

    pub fn start_center_date(&self) -> NaiveDateTime {
        self.start_center_date
    }

    pub fn start_scroll_top(&self) -> f32 {
        self.start_scroll_top
    }

    pub fn initial_pinch_distance(&self) -> f32 {
        self.initial_pinch_distance
    }

    pub fn initial_days_visible(&self) -> u32 {
        self.initial_days_visible
    }

    // ===== Gesture Transitions =====

    /// Stops any running momentum.
    pub fn cancel_momentum(&mut self) {
        self.momentum = None;
    }

    /// Anchors a pan (touch or mouse) at `pos`.
    pub fn begin_pan(&mut self, modality: Modality, pos: Pos2, center: NaiveDateTime, time_ms: f64) {
        self.modality = modality;
        self.start_pos = pos;
        self.start_center_date = center;
        self.velocity = 0.0;
        self.last_sample = (pos.x, time_ms);
    }

    /// Additionally anchors the vertical scroll offset and clears the axis lock.
    pub fn begin_mouse_drag(&mut self, pos: Pos2, center: NaiveDateTime, scroll_top: f32, time_ms: f64) {
        self.begin_pan(Modality::MouseDrag, pos, center, time_ms);
        self.start_scroll_top = scroll_top;
        self.drag_direction = None;
    }

    /// Anchors a pinch.
    pub fn begin_pinch(&mut self, distance: f32, days_visible: u32) {
        self.modality = Modality::Pinch;
        self.initial_pinch_distance = distance;
        self.initial_days_visible = days_visible;
        self.velocity = 0.0;
    }

    /// Returns to idle, keeping anchors for inspection.
    pub fn end(&mut self) {
        self.modality = Modality::Idle;
    }

    /// Locks the drag direction; the first lock of a drag wins.
    pub fn lock_drag_direction(&mut self, direction: DragDirection) {
        if self.drag_direction.is_none() {
            self.drag_direction = Some(direction);
        }
    }

    /// Records a move sample and updates velocity as `Δx / Δt`.
    ///
    /// Samples with no elapsed time keep the previous velocity.
    pub fn sample_velocity(&mut self, x: f32, time_ms: f64) {
        let (last_x, last_time) = self.last_sample;
        let dt = time_ms - last_time;
        if dt > 0.0 && dt.is_finite() {
            self.velocity = ((x - last_x) as f64 / dt) as f32;
        }
        self.last_sample = (x, time_ms);
    }

    /// Replaces the running momentum.
    pub fn set_momentum(&mut self, momentum: Option<Momentum>) {
        self.momentum = momentum;
    }

    /// Mutable access for the per-frame momentum tick.
    pub(crate) fn momentum_mut(&mut self) -> Option<&mut Momentum> {
        self.momentum.as_mut()
    }
}

impl Default for GestureState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_active_modality() {
        let mut state = GestureState::new();
        let center = NaiveDateTime::default();

        state.begin_pan(Modality::TouchPan, Pos2::new(10.0, 10.0), center, 0.0);
        assert!(state.is_panning() && !state.is_pinching() && !state.is_mouse_dragging());

        state.begin_pinch(100.0, 30);
        assert!(!state.is_panning() && state.is_pinching());

        state.end();
        assert_eq!(state.modality(), Modality::Idle);
    }

    #[test]
    fn test_velocity_sampling() {
        let mut state = GestureState::new();
        state.begin_pan(Modality::TouchPan, Pos2::new(0.0, 0.0), NaiveDateTime::default(), 100.0);

        state.sample_velocity(20.0, 110.0);
        assert_eq!(state.velocity(), 2.0);

        // Same timestamp: velocity is kept.
        state.sample_velocity(40.0, 110.0);
        assert_eq!(state.velocity(), 2.0);

        state.sample_velocity(30.0, 120.0);
        assert_eq!(state.velocity(), -1.0);
    }

    #[test]
    fn test_drag_direction_locks_once() {
        let mut state = GestureState::new();
        state.begin_mouse_drag(Pos2::ZERO, NaiveDateTime::default(), 0.0, 0.0);
        state.lock_drag_direction(DragDirection::Vertical);
        state.lock_drag_direction(DragDirection::Horizontal);
        assert_eq!(state.drag_direction(), Some(DragDirection::Vertical));

        state.begin_mouse_drag(Pos2::ZERO, NaiveDateTime::default(), 0.0, 0.0);
        assert_eq!(state.drag_direction(), None);
    }
}
