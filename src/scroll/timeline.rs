//! Scroll offset → camera progress.
//!
//! Every value here is a pure function of the scroll offset and the page
//! layout, so replaying the same scroll pass yields the same progress.

use rustc_hash::FxHashMap;

use super::marker::Marker;
use crate::error::VitrineError;
use crate::options::{ScrollOptions, SectionRange};

/// Vertical extent of a page section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBox {
    /// Distance from the document top to the section top.
    pub top: f32,
    /// Section height.
    pub height: f32,
}

/// Viewport height plus the boxes of every section a range refers to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    viewport_height: f32,
    sections: FxHashMap<String, SectionBox>,
}

impl PageLayout {
    /// Empty layout for a viewport of the given height.
    #[must_use]
    pub fn new(viewport_height: f32) -> Self {
        Self {
            viewport_height,
            sections: FxHashMap::default(),
        }
    }

    /// Builder-style [`set_section`](Self::set_section).
    #[must_use]
    pub fn with_section(mut self, selector: &str, top: f32, height: f32) -> Self {
        self.set_section(selector, top, height);
        self
    }

    /// Record (or replace, after a resize) a section's box.
    pub fn set_section(&mut self, selector: &str, top: f32, height: f32) {
        let _ = self
            .sections
            .insert(selector.to_owned(), SectionBox { top, height });
    }

    /// Update the viewport height after a resize.
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
    }

    /// Viewport height.
    #[must_use]
    pub const fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Box of a section, if the page has it.
    #[must_use]
    pub fn section(&self, selector: &str) -> Option<SectionBox> {
        self.sections.get(selector).copied()
    }
}

/// A start/end marker pair measured against one section.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRange {
    section: String,
    start: Marker,
    end: Marker,
}

impl ScrollRange {
    /// Bind a range to `section` between two marker strings.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Marker`] if either marker is malformed.
    pub fn bind(section: &str, start: &str, end: &str) -> Result<Self, VitrineError> {
        Ok(Self {
            section: section.to_owned(),
            start: start.parse()?,
            end: end.parse()?,
        })
    }

    /// Bind a range described in options.
    ///
    /// # Errors
    ///
    /// See [`bind`](Self::bind).
    pub fn from_options(range: &SectionRange) -> Result<Self, VitrineError> {
        Self::bind(&range.section, &range.start, &range.end)
    }

    /// Section selector this range is measured against.
    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Local progress in [0, 1] at `scroll`, or `None` when the page has no
    /// such section.
    #[must_use]
    pub fn progress(&self, scroll: f32, layout: &PageLayout) -> Option<f32> {
        let section = layout.section(&self.section)?;
        let viewport = layout.viewport_height();
        let start = self.start.scroll_offset(section.top, section.height, viewport);
        let end = self.end.scroll_offset(section.top, section.height, viewport);

        let span = end - start;
        if span <= f32::EPSILON {
            return Some(if scroll >= end { 1.0 } else { 0.0 });
        }
        Some(((scroll - start) / span).clamp(0.0, 1.0))
    }
}

/// One range driving the camera between two anchor progress values.
#[derive(Debug, Clone, PartialEq)]
struct Segment {
    range: ScrollRange,
    from: f32,
    to: f32,
}

/// Sequential ranges that together map scroll offset to overall camera
/// progress along the keyframe track.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTimeline {
    segments: Vec<Segment>,
}

impl ScrollTimeline {
    /// Pair each anchor after the first with the range of its section.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Config`] when an anchor's section has no
    /// range, or [`VitrineError::Marker`] when a range does not parse.
    pub fn from_options(options: &ScrollOptions) -> Result<Self, VitrineError> {
        let mut segments = Vec::with_capacity(options.anchors.len().saturating_sub(1));
        for pair in options.anchors.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let range = options
                .ranges
                .iter()
                .find(|r| r.section == next.section)
                .ok_or_else(|| {
                    VitrineError::Config(format!(
                        "anchor `{}` has no scroll range",
                        next.section
                    ))
                })?;
            segments.push(Segment {
                range: ScrollRange::from_options(range)?,
                from: prev.at,
                to: next.at,
            });
        }
        Ok(Self { segments })
    }

    /// Number of camera segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments (single-anchor track).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Overall camera progress at `scroll`.
    ///
    /// The last segment whose range has started wins; before any range
    /// starts the camera sits at the first segment's origin. Sections
    /// missing from the layout are skipped.
    #[must_use]
    pub fn camera_progress(&self, scroll: f32, layout: &PageLayout) -> f32 {
        let mut progress = self.segments.first().map_or(0.0, |s| s.from);
        for segment in &self.segments {
            match segment.range.progress(scroll, layout) {
                Some(local) if local > 0.0 => {
                    progress = segment.from + (segment.to - segment.from) * local;
                }
                _ => {}
            }
        }
        progress
    }
}
