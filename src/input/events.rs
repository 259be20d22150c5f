//! Input event model consumed by the timeline controller.
//!
//! Hosts translate their platform events into these values. Positions are in
//! surface-independent client coordinates; only differences are used.
//! Timestamps are milliseconds on any monotonic clock.

use egui::{Pos2, Vec2};

/// Mouse buttons relevant to timeline dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// Keyboard modifiers held during a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

/// What a mouse-down landed on.
///
/// Hosts resolve these flags against the target and its ancestors, so a
/// press inside a button's label still counts as a button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventTarget {
    /// A button element
    pub button: bool,
    /// An element with the button role
    pub role_button: bool,
    /// A draggable element
    pub draggable: bool,
    /// An element flagged as clickable by the host
    pub data_clickable: bool,
}

impl EventTarget {
    /// The bare timeline surface.
    pub const SURFACE: EventTarget = EventTarget {
        button: false,
        role_button: false,
        draggable: false,
        data_clickable: false,
    };

    /// A host-flagged clickable element (e.g. a task bar).
    pub const CLICKABLE: EventTarget = EventTarget {
        button: false,
        role_button: false,
        draggable: false,
        data_clickable: true,
    };

    /// Returns true if presses on this target belong to the element, not the timeline.
    pub fn is_interactive(&self) -> bool {
        self.button || self.role_button || self.draggable || self.data_clickable
    }
}

/// A raw input event.
///
/// Touch events carry the full list of touches still on the surface after
/// the event, mirroring DOM touch lists.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    TouchStart { touches: Vec<Pos2>, time_ms: f64 },
    TouchMove { touches: Vec<Pos2>, time_ms: f64 },
    TouchEnd { touches: Vec<Pos2>, time_ms: f64 },
    /// The platform aborted the touch sequence
    TouchCancel,
    MouseDown { pos: Pos2, button: MouseButton, target: EventTarget, time_ms: f64 },
    MouseMove { pos: Pos2, time_ms: f64 },
    /// Delivered for releases anywhere in the window
    MouseUp { pos: Pos2, time_ms: f64 },
    /// The pointer left the surface
    MouseLeave,
    /// Wheel deltas follow DOM sign conventions (positive y scrolls down)
    Wheel { delta: Vec2, modifiers: Modifiers },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_targets() {
        assert!(!EventTarget::SURFACE.is_interactive());
        assert!(EventTarget::CLICKABLE.is_interactive());
        assert!(EventTarget { draggable: true, ..EventTarget::default() }.is_interactive());
        assert!(EventTarget { role_button: true, ..EventTarget::default() }.is_interactive());
        assert!(EventTarget { button: true, ..EventTarget::default() }.is_interactive());
    }
}
