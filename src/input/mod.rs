//! Input handling: pointer events for free-look and page button triggers.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw pointer events into camera commands.
pub mod processor;
/// Button ids → transition requests.
pub mod triggers;

pub use event::{InputEvent, MouseButton};
pub use processor::PointerProcessor;
pub use triggers::TriggerBindings;
