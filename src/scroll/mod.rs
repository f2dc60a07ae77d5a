//! Scroll timeline: page scroll offset to camera progress and element
//! styles.

/// Per-event scroll recomputation.
pub mod driver;
/// Scroll-scrubbed element styles.
pub mod element;
/// Range marker parsing.
pub mod marker;
/// Section ranges and the camera timeline.
pub mod timeline;

pub use driver::{ScrollDriver, ScrollFrame};
pub use element::{ElementStyle, ElementTrack};
pub use marker::{Edge, Marker};
pub use timeline::{PageLayout, ScrollRange, ScrollTimeline, SectionBox};
