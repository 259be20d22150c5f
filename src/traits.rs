/// Type alias for surface identities (stable per host element)
pub type SurfaceId = u64;

/// Trait for the host element a timeline controller is attached to.
///
/// The controller never touches a real widget tree. The host implements this
/// trait for whatever owns the timeline area, and keeps it up to date:
/// - `width` is measured live and read on every pixel-to-day conversion
/// - `scroll_top` is the vertical scroll offset the controller may drive
///   during a vertical mouse drag
///
/// Two attachments are considered the same binding when their `id` matches.
pub trait Surface {
    /// Returns the stable identity of this surface
    fn id(&self) -> SurfaceId;

    /// Returns the measured width in pixels (may be zero before layout)
    fn width(&self) -> f32;

    /// Returns the current vertical scroll offset in pixels
    fn scroll_top(&self) -> f32;

    /// Sets the vertical scroll offset in pixels
    fn set_scroll_top(&mut self, scroll_top: f32);
}

/// Callback fired on every committed change of `(center_date, days_visible)`.
pub type ViewChangeListener = Box<dyn FnMut(chrono::NaiveDateTime, u32)>;
