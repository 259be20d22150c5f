//! Color mapping for task bars based on the room they belong to.
//!
//! Color assignment is deterministic based on room names.

use egui::Color32;

/// Returns a bar color for a room.
///
/// # Arguments
/// * `room` - The room name of the task
///
/// # Returns
/// A color based on the room name, gray for unknown rooms
pub fn room_color(room: &str) -> Color32 {
    match room {
        r if r.contains("Kitchen") => Color32::from_rgb(0x4e, 0x9a, 0xe6),
        r if r.contains("Bath") => Color32::from_rgb(0x2e, 0xb8, 0xa0),
        r if r.contains("Bedroom") || r.contains("Living") => Color32::from_rgb(0xa0, 0x7c, 0xe0),
        r if r.contains("Basement") || r.contains("Garage") => Color32::from_rgb(0xe6, 0x9a, 0x3c),
        r if r.contains("Exterior") => Color32::from_rgb(0x7c, 0xb3, 0x42),
        r if r.contains("Laundry") => Color32::from_rgb(0xe0, 0x6c, 0x75),
        _ => Color32::GRAY,
    }
}

/// Returns the highlight color for the selected task.
pub fn selection_color() -> Color32 {
    Color32::from_rgb(0xff, 0xd5, 0x4f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_colors_are_stable() {
        assert_eq!(room_color("Main Bath"), room_color("Guest Bath"));
        assert_ne!(room_color("Kitchen"), room_color("Garage"));
        assert_eq!(room_color("Attic"), Color32::GRAY);
    }
}
