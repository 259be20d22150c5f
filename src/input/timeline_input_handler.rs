//! Timeline input handling for panning, zooming, and scrolling.
//!
//! This module interprets raw input events for the timeline surface:
//! - One-finger touch pan and two-finger pinch zoom
//! - Primary-button mouse drag, locked to horizontal (pan) or vertical (scroll)
//! - Ctrl/Meta + wheel zoom, Shift or horizontal wheel pan
//! - Momentum after a fast release
//!
//! Pans always move the view relative to the gesture-start anchor. Dragging
//! right moves the view back in time, so content follows the pointer.

use egui::Pos2;

use crate::config::GestureTuning;
use crate::domain::momentum::Momentum;
use crate::domain::viewport_operations;
use crate::input::events::{EventTarget, InputEvent, Modifiers, MouseButton};
use crate::state::{DragDirection, GestureState, Modality, ViewportState};
use crate::traits::Surface;

/// Result of timeline input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Not a timeline gesture; the host should apply its default behavior
    Ignored,
    /// Gesture state changed but the view did not
    Handled,
    /// Center date or zoom was updated
    ViewportUpdated,
    /// The surface scroll offset was updated
    Scrolled,
}

/// Handles one input event and updates viewport/gesture state.
///
/// # Arguments
/// * `event` - The event to interpret
/// * `viewport` - Committed view state (mutable)
/// * `gesture` - In-progress gesture state (mutable)
/// * `surface` - The attached surface, for live width and scroll offset
/// * `tuning` - Gesture constants
///
/// # Returns
/// The result of input handling
pub fn handle_input_event<S: Surface + ?Sized>(
    event: &InputEvent,
    viewport: &mut ViewportState,
    gesture: &mut GestureState,
    surface: &mut S,
    tuning: &GestureTuning,
) -> InputResult {
    match event {
        InputEvent::TouchStart { touches, time_ms } => {
            handle_touch_start(touches, *time_ms, viewport, gesture)
        }
        InputEvent::TouchMove { touches, time_ms } => {
            handle_touch_move(touches, *time_ms, viewport, gesture, surface.width())
        }
        InputEvent::TouchEnd { touches, time_ms } => {
            handle_touch_end(touches, *time_ms, viewport, gesture, tuning)
        }
        InputEvent::TouchCancel => match gesture.modality() {
            Modality::TouchPan | Modality::Pinch => {
                gesture.end();
                InputResult::Handled
            }
            _ => InputResult::Ignored,
        },
        InputEvent::MouseDown { pos, button, target, time_ms } => {
            handle_mouse_down(*pos, *button, target, *time_ms, viewport, gesture, surface)
        }
        InputEvent::MouseMove { pos, time_ms } => {
            handle_mouse_move(*pos, *time_ms, viewport, gesture, surface, tuning)
        }
        InputEvent::MouseUp { .. } | InputEvent::MouseLeave => {
            handle_mouse_release(gesture, tuning)
        }
        InputEvent::Wheel { delta, modifiers } => {
            handle_wheel(delta.x, delta.y, modifiers, viewport, surface.width(), tuning)
        }
    }
}

/// Advances a running momentum animation by one frame.
///
/// # Returns
/// True if the view moved during this frame
pub fn advance_momentum(
    viewport: &mut ViewportState,
    gesture: &mut GestureState,
    surface_width: f32,
    tuning: &GestureTuning,
) -> bool {
    let Some(momentum) = gesture.momentum_mut() else {
        return false;
    };

    match momentum.step(tuning) {
        Some(px) => {
            let settled = momentum.velocity().abs() < tuning.momentum_stop_velocity;
            viewport.shift_days(-viewport.pixels_to_days(px, surface_width));
            if settled {
                log::debug!("momentum settled");
                gesture.cancel_momentum();
            }
            true
        }
        None => {
            gesture.cancel_momentum();
            false
        }
    }
}

// ===== Touch =====

fn handle_touch_start(
    touches: &[Pos2],
    time_ms: f64,
    viewport: &ViewportState,
    gesture: &mut GestureState,
) -> InputResult {
    gesture.cancel_momentum();

    match touches {
        [finger] => {
            gesture.begin_pan(Modality::TouchPan, *finger, viewport.center_date(), time_ms);
            log::trace!("touch pan started at {finger:?}");
            InputResult::Handled
        }
        [a, b] => {
            let distance = viewport_operations::touch_distance(*a, *b);
            gesture.begin_pinch(distance, viewport.days_visible());
            log::trace!("pinch started, distance {distance}");
            InputResult::Handled
        }
        _ => InputResult::Ignored,
    }
}

fn handle_touch_move(
    touches: &[Pos2],
    time_ms: f64,
    viewport: &mut ViewportState,
    gesture: &mut GestureState,
    surface_width: f32,
) -> InputResult {
    match gesture.modality() {
        Modality::TouchPan => match touches.first() {
            Some(finger) => {
                pan_from_anchor(finger.x, time_ms, viewport, gesture, surface_width);
                InputResult::ViewportUpdated
            }
            None => {
                gesture.end();
                InputResult::Handled
            }
        },
        Modality::Pinch => match touches {
            [a, b, ..] => {
                let current_distance = viewport_operations::touch_distance(*a, *b);
                let initial_distance = gesture.initial_pinch_distance();
                if current_distance <= 0.0 || initial_distance <= 0.0 {
                    return InputResult::Handled;
                }
                // Spreading fingers grows the distance, shrinking the scale and the days shown.
                let scale = initial_distance as f64 / current_distance as f64;
                viewport.set_days_visible(gesture.initial_days_visible() as f64 * scale);
                InputResult::ViewportUpdated
            }
            [finger] => {
                downgrade_pinch_to_pan(*finger, time_ms, viewport, gesture);
                InputResult::Handled
            }
            [] => {
                gesture.end();
                InputResult::Handled
            }
        },
        _ => InputResult::Ignored,
    }
}

fn handle_touch_end(
    touches: &[Pos2],
    time_ms: f64,
    viewport: &ViewportState,
    gesture: &mut GestureState,
    tuning: &GestureTuning,
) -> InputResult {
    match gesture.modality() {
        Modality::TouchPan => {
            if touches.is_empty() {
                gesture.end();
                start_momentum(gesture, tuning.touch_momentum_threshold);
            }
            InputResult::Handled
        }
        Modality::Pinch => {
            match touches {
                [finger] => downgrade_pinch_to_pan(*finger, time_ms, viewport, gesture),
                [] => gesture.end(),
                _ => {}
            }
            InputResult::Handled
        }
        _ => InputResult::Ignored,
    }
}

fn downgrade_pinch_to_pan(
    finger: Pos2,
    time_ms: f64,
    viewport: &ViewportState,
    gesture: &mut GestureState,
) {
    gesture.begin_pan(Modality::TouchPan, finger, viewport.center_date(), time_ms);
    log::trace!("pinch downgraded to pan at {finger:?}");
}

// ===== Mouse =====

fn handle_mouse_down<S: Surface + ?Sized>(
    pos: Pos2,
    button: MouseButton,
    target: &EventTarget,
    time_ms: f64,
    viewport: &ViewportState,
    gesture: &mut GestureState,
    surface: &S,
) -> InputResult {
    if button != MouseButton::Primary || target.is_interactive() {
        return InputResult::Ignored;
    }

    gesture.cancel_momentum();
    gesture.begin_mouse_drag(pos, viewport.center_date(), surface.scroll_top(), time_ms);
    log::trace!("mouse drag started at {pos:?}");
    InputResult::Handled
}

fn handle_mouse_move<S: Surface + ?Sized>(
    pos: Pos2,
    time_ms: f64,
    viewport: &mut ViewportState,
    gesture: &mut GestureState,
    surface: &mut S,
    tuning: &GestureTuning,
) -> InputResult {
    if !gesture.is_mouse_dragging() {
        return InputResult::Ignored;
    }

    let delta = pos - gesture.start_pos();
    if gesture.drag_direction().is_none() {
        let threshold = tuning.drag_lock_threshold_px;
        if delta.x.abs() > threshold || delta.y.abs() > threshold {
            let direction = if delta.y.abs() > delta.x.abs() {
                DragDirection::Vertical
            } else {
                DragDirection::Horizontal
            };
            gesture.lock_drag_direction(direction);
            log::trace!("drag direction locked: {direction:?}");
        }
    }

    match gesture.drag_direction() {
        Some(DragDirection::Vertical) => {
            surface.set_scroll_top((gesture.start_scroll_top() - delta.y).max(0.0));
            InputResult::Scrolled
        }
        _ => {
            pan_from_anchor(pos.x, time_ms, viewport, gesture, surface.width());
            InputResult::ViewportUpdated
        }
    }
}

fn handle_mouse_release(gesture: &mut GestureState, tuning: &GestureTuning) -> InputResult {
    if !gesture.is_mouse_dragging() {
        return InputResult::Ignored;
    }

    gesture.end();
    if gesture.drag_direction() == Some(DragDirection::Horizontal) {
        start_momentum(gesture, tuning.mouse_momentum_threshold);
    }
    InputResult::Handled
}

// ===== Wheel =====

fn handle_wheel(
    delta_x: f32,
    delta_y: f32,
    modifiers: &Modifiers,
    viewport: &mut ViewportState,
    surface_width: f32,
    tuning: &GestureTuning,
) -> InputResult {
    if modifiers.ctrl || modifiers.meta {
        // Trackpad pinch arrives as ctrl+wheel.
        let zoom_factor = 1.0 + delta_y as f64 * tuning.wheel_zoom_sensitivity as f64;
        viewport.scale_days(zoom_factor);
        return InputResult::ViewportUpdated;
    }

    if modifiers.shift || delta_x.abs() > delta_y.abs() {
        // Wheel pans follow the scroll direction, unlike drags.
        let px = if delta_x != 0.0 { delta_x } else { delta_y };
        viewport.shift_days(viewport.pixels_to_days(px, surface_width));
        return InputResult::ViewportUpdated;
    }

    InputResult::Ignored
}

// ===== Shared =====

fn pan_from_anchor(
    x: f32,
    time_ms: f64,
    viewport: &mut ViewportState,
    gesture: &mut GestureState,
    surface_width: f32,
) {
    let days = viewport.pixels_to_days(x - gesture.start_pos().x, surface_width);
    viewport.set_center_date(viewport_operations::shift_by_days(gesture.start_center_date(), -days));
    gesture.sample_velocity(x, time_ms);
}

fn start_momentum(gesture: &mut GestureState, threshold: f32) {
    let momentum = Momentum::start(gesture.velocity(), threshold);
    if let Some(m) = &momentum {
        log::debug!("momentum started at {:.3} px/ms", m.velocity());
    }
    gesture.set_momentum(momentum);
}
