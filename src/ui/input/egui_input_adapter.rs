//! Translation of egui raw input into timeline controller events.
//!
//! egui reports input for the whole window. This adapter keeps the DOM-like
//! semantics the controller expects:
//! - Presses, moves and wheel only count over the canvas
//! - Releases count anywhere in the window
//! - Leaving the canvas produces a single `MouseLeave`
//! - Touches are reported as full touch lists, and egui's simulated
//!   pointer events are suppressed while fingers are down

use eframe::egui;
use egui::{Event, MouseWheelUnit, PointerButton, Pos2, Rect, TouchId, TouchPhase, Vec2};
use timeline_nav::{EventTarget, InputEvent, Modifiers, MouseButton, Surface, SurfaceId};

/// Pixels per wheel "line" for line-based wheel devices
const LINE_HEIGHT_PX: f32 = 40.0;

/// The timeline canvas as seen by the controller.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    id: SurfaceId,
    width: f32,
    scroll_top: f32,
}

impl CanvasSurface {
    pub fn new(id: SurfaceId) -> Self {
        Self {
            id,
            width: 0.0,
            scroll_top: 0.0,
        }
    }

    /// Records the width measured during layout.
    pub fn set_width(&mut self, width: f32) {
        self.width = width.max(0.0);
    }
}

impl Surface for CanvasSurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, scroll_top: f32) {
        self.scroll_top = scroll_top.max(0.0);
    }
}

/// Stateful translator from egui events to [`InputEvent`]s.
#[derive(Debug, Default)]
pub struct EguiInputAdapter {
    /// Fingers currently down, in the order they touched
    touches: Vec<(TouchId, Pos2)>,
    /// Whether the mouse pointer was over the canvas after the last event
    pointer_inside: bool,
}

impl EguiInputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates one frame of egui events.
    ///
    /// # Arguments
    /// * `events` - Raw egui events of this frame
    /// * `time_ms` - Frame time in milliseconds
    /// * `canvas_rect` - Screen rect of the timeline canvas
    /// * `clickable` - Screen rects of clickable elements (task bars)
    pub fn translate(
        &mut self,
        events: &[Event],
        time_ms: f64,
        canvas_rect: Rect,
        clickable: &[Rect],
    ) -> Vec<InputEvent> {
        let touch_frame = !self.touches.is_empty() || events.iter().any(|e| matches!(e, Event::Touch { .. }));
        let mut out = Vec::new();

        for event in events {
            match event {
                Event::Touch { id, phase, pos, .. } => {
                    self.translate_touch(*id, *phase, *pos, time_ms, canvas_rect, &mut out);
                }
                // Pointer events synthesized from touches would double-drive the controller.
                Event::PointerButton { .. } | Event::PointerMoved(_) | Event::PointerGone if touch_frame => {}
                Event::PointerButton { pos, button, pressed: true, .. } => {
                    if canvas_rect.contains(*pos) {
                        let target = if clickable.iter().any(|r| r.contains(*pos)) {
                            EventTarget::CLICKABLE
                        } else {
                            EventTarget::SURFACE
                        };
                        out.push(InputEvent::MouseDown {
                            pos: *pos,
                            button: map_button(*button),
                            target,
                            time_ms,
                        });
                    }
                }
                Event::PointerButton { pos, pressed: false, .. } => {
                    out.push(InputEvent::MouseUp { pos: *pos, time_ms });
                }
                Event::PointerMoved(pos) => {
                    let inside = canvas_rect.contains(*pos);
                    if inside {
                        out.push(InputEvent::MouseMove { pos: *pos, time_ms });
                    } else if self.pointer_inside {
                        out.push(InputEvent::MouseLeave);
                    }
                    self.pointer_inside = inside;
                }
                Event::PointerGone => {
                    if self.pointer_inside {
                        out.push(InputEvent::MouseLeave);
                    }
                    self.pointer_inside = false;
                }
                Event::MouseWheel { unit, delta, modifiers, .. } => {
                    if self.pointer_inside {
                        out.push(InputEvent::Wheel {
                            delta: wheel_to_dom(*unit, *delta, canvas_rect.height()),
                            modifiers: Modifiers {
                                ctrl: modifiers.ctrl,
                                meta: modifiers.mac_cmd,
                                shift: modifiers.shift,
                            },
                        });
                    }
                }
                Event::Zoom(factor) => {
                    // Trackpad pinch, expressed as the ctrl+wheel it replaces.
                    if self.pointer_inside && *factor > 0.0 {
                        out.push(InputEvent::Wheel {
                            delta: egui::vec2(0.0, (1.0 / factor - 1.0) * 100.0),
                            modifiers: Modifiers { ctrl: true, ..Modifiers::default() },
                        });
                    }
                }
                _ => {}
            }
        }

        out
    }

    fn translate_touch(
        &mut self,
        id: TouchId,
        phase: TouchPhase,
        pos: Pos2,
        time_ms: f64,
        canvas_rect: Rect,
        out: &mut Vec<InputEvent>,
    ) {
        match phase {
            TouchPhase::Start => {
                if canvas_rect.contains(pos) {
                    self.touches.push((id, pos));
                    out.push(InputEvent::TouchStart { touches: self.positions(), time_ms });
                }
            }
            TouchPhase::Move => {
                if let Some(entry) = self.touches.iter_mut().find(|(tid, _)| *tid == id) {
                    entry.1 = pos;
                    out.push(InputEvent::TouchMove { touches: self.positions(), time_ms });
                }
            }
            TouchPhase::End => {
                if let Some(index) = self.touches.iter().position(|(tid, _)| *tid == id) {
                    self.touches.remove(index);
                    out.push(InputEvent::TouchEnd { touches: self.positions(), time_ms });
                }
            }
            TouchPhase::Cancel => {
                if !self.touches.is_empty() {
                    self.touches.clear();
                    out.push(InputEvent::TouchCancel);
                }
            }
        }
    }

    fn positions(&self) -> Vec<Pos2> {
        self.touches.iter().map(|(_, pos)| *pos).collect()
    }
}

/// Converts an egui wheel delta to DOM pixels.
///
/// egui deltas are positive when scrolling up; DOM deltas are the opposite.
fn wheel_to_dom(unit: MouseWheelUnit, delta: Vec2, page_height: f32) -> Vec2 {
    let scale = match unit {
        MouseWheelUnit::Point => 1.0,
        MouseWheelUnit::Line => LINE_HEIGHT_PX,
        MouseWheelUnit::Page => page_height,
    };
    -delta * scale
}

fn map_button(button: PointerButton) -> MouseButton {
    match button {
        PointerButton::Primary => MouseButton::Primary,
        PointerButton::Secondary => MouseButton::Secondary,
        PointerButton::Middle => MouseButton::Middle,
        _ => MouseButton::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn canvas() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 400.0))
    }

    fn touch(id: u64, phase: TouchPhase, pos: Pos2) -> Event {
        Event::Touch {
            device_id: egui::TouchDeviceId(0),
            id: TouchId(id),
            phase,
            pos,
            force: None,
        }
    }

    #[test]
    fn test_press_on_clickable_is_flagged() {
        let mut adapter = EguiInputAdapter::new();
        let bar = Rect::from_min_size(pos2(50.0, 50.0), vec2(100.0, 20.0));
        let events = [Event::PointerButton {
            pos: pos2(60.0, 55.0),
            button: PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        }];
        let out = adapter.translate(&events, 0.0, canvas(), &[bar]);
        assert!(matches!(
            out.as_slice(),
            [InputEvent::MouseDown { target: EventTarget::CLICKABLE, .. }]
        ));
    }

    #[test]
    fn test_release_outside_canvas_still_reported() {
        let mut adapter = EguiInputAdapter::new();
        let events = [
            Event::PointerMoved(pos2(10.0, 10.0)),
            Event::PointerMoved(pos2(900.0, 10.0)),
            Event::PointerButton {
                pos: pos2(900.0, 10.0),
                button: PointerButton::Primary,
                pressed: false,
                modifiers: egui::Modifiers::NONE,
            },
        ];
        let out = adapter.translate(&events, 0.0, canvas(), &[]);
        assert!(matches!(
            out.as_slice(),
            [InputEvent::MouseMove { .. }, InputEvent::MouseLeave, InputEvent::MouseUp { .. }]
        ));
    }

    #[test]
    fn test_touch_lists_and_pointer_suppression() {
        let mut adapter = EguiInputAdapter::new();
        let events = [
            touch(1, TouchPhase::Start, pos2(100.0, 100.0)),
            Event::PointerButton {
                pos: pos2(100.0, 100.0),
                button: PointerButton::Primary,
                pressed: true,
                modifiers: egui::Modifiers::NONE,
            },
            touch(2, TouchPhase::Start, pos2(200.0, 100.0)),
            touch(1, TouchPhase::End, pos2(100.0, 100.0)),
        ];
        let out = adapter.translate(&events, 5.0, canvas(), &[]);
        assert_eq!(
            out,
            vec![
                InputEvent::TouchStart { touches: vec![pos2(100.0, 100.0)], time_ms: 5.0 },
                InputEvent::TouchStart {
                    touches: vec![pos2(100.0, 100.0), pos2(200.0, 100.0)],
                    time_ms: 5.0
                },
                InputEvent::TouchEnd { touches: vec![pos2(200.0, 100.0)], time_ms: 5.0 },
            ]
        );
    }

    #[test]
    fn test_wheel_sign_follows_dom() {
        assert_eq!(wheel_to_dom(MouseWheelUnit::Line, vec2(0.0, 1.0), 400.0), vec2(0.0, -40.0));
        assert_eq!(wheel_to_dom(MouseWheelUnit::Point, vec2(-3.0, 0.0), 400.0), vec2(3.0, 0.0));
        assert_eq!(wheel_to_dom(MouseWheelUnit::Page, vec2(0.0, -1.0), 400.0), vec2(0.0, 400.0));
    }

    #[test]
    fn test_trackpad_zoom_becomes_ctrl_wheel() {
        let mut adapter = EguiInputAdapter::new();
        let events = [Event::PointerMoved(pos2(10.0, 10.0)), Event::Zoom(2.0)];
        let out = adapter.translate(&events, 0.0, canvas(), &[]);
        assert_eq!(
            out.last(),
            Some(&InputEvent::Wheel {
                delta: vec2(0.0, -50.0),
                modifiers: Modifiers { ctrl: true, ..Modifiers::default() },
            })
        );
    }

    #[test]
    fn test_wheel_outside_canvas_ignored() {
        let mut adapter = EguiInputAdapter::new();
        let out = adapter.translate(&[Event::Zoom(2.0)], 0.0, canvas(), &[]);
        assert!(out.is_empty());
    }
}
