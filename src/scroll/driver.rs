use super::element::{ElementStyle, ElementTrack};
use super::timeline::{PageLayout, ScrollTimeline};
use crate::error::VitrineError;
use crate::options::ScrollOptions;

/// Everything one scroll event recomputes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollFrame {
    /// Overall camera progress in [0, 1].
    pub camera_progress: f32,
    /// Style of each element track whose section is on the page.
    pub elements: Vec<(String, ElementStyle)>,
}

/// Binds the camera timeline and element tracks to the page layout.
///
/// Re-run [`on_scroll`](Self::on_scroll) on every scroll and resize event;
/// it holds no state beyond the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollDriver {
    timeline: ScrollTimeline,
    elements: Vec<ElementTrack>,
    layout: PageLayout,
}

impl ScrollDriver {
    /// Bind the `[scroll]` options against a measured layout.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Config`] when an anchor has no range and
    /// [`VitrineError::Marker`] when a range marker does not parse.
    pub fn new(options: &ScrollOptions, layout: PageLayout) -> Result<Self, VitrineError> {
        let timeline = ScrollTimeline::from_options(options)?;
        let elements = options
            .elements
            .iter()
            .map(ElementTrack::from_options)
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "scroll driver bound: {} camera segments, {} element tracks",
            timeline.len(),
            elements.len()
        );
        Ok(Self {
            timeline,
            elements,
            layout,
        })
    }

    /// Current layout.
    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Replace the layout after the page was re-measured.
    pub fn set_layout(&mut self, layout: PageLayout) {
        self.layout = layout;
    }

    /// Recompute progress and element styles at `scroll`.
    #[must_use]
    pub fn on_scroll(&self, scroll: f32) -> ScrollFrame {
        let elements = self
            .elements
            .iter()
            .filter_map(|track| {
                track
                    .sample(scroll, &self.layout)
                    .map(|style| (track.selector().to_owned(), style))
            })
            .collect();
        ScrollFrame {
            camera_progress: self.timeline.camera_progress(scroll, &self.layout),
            elements,
        }
    }
}
