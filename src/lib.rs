pub mod traits;
pub mod config;
pub mod domain;
pub mod state;
pub mod input;
pub mod controller;
pub mod sample_schedule;

// Export traits
pub use traits::{Surface, SurfaceId, ViewChangeListener};

// Export configuration
pub use config::{GestureTuning, TimelineConfig};

// Export controller
pub use controller::{AttachOutcome, TimelineController, TimelineView};

// Export input model
pub use input::{EventTarget, InputEvent, InputResult, Modifiers, MouseButton};

// Export state inspection types
pub use state::{DragDirection, GestureState, Modality};

// Export demo data generator
pub use sample_schedule::{SampleSchedule, ScheduledTask};
