use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::timeline::{PageLayout, ScrollRange};
use crate::error::VitrineError;
use crate::options::ElementTrackOptions;

/// Scroll-scrubbed style of a page element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ElementStyle {
    /// Horizontal translation as a percentage of the element's width.
    pub x_percent: f32,
    /// Opacity in [0, 1].
    pub opacity: f32,
}

impl ElementStyle {
    /// Linear blend of both properties.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            x_percent: self.x_percent + (other.x_percent - self.x_percent) * t,
            opacity: self.opacity + (other.opacity - self.opacity) * t,
        }
    }

    /// CSS `transform` value for this style.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("translateX({}%)", self.x_percent)
    }
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            x_percent: 0.0,
            opacity: 1.0,
        }
    }
}

/// An element whose style follows a scroll range.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementTrack {
    selector: String,
    range: ScrollRange,
    from: ElementStyle,
    to: ElementStyle,
}

impl ElementTrack {
    /// Bind a track described in options.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Marker`] if either range marker is malformed.
    pub fn from_options(options: &ElementTrackOptions) -> Result<Self, VitrineError> {
        Ok(Self {
            selector: options.selector.clone(),
            range: ScrollRange::from_options(&options.range)?,
            from: options.from,
            to: options.to,
        })
    }

    /// Selector of the styled element.
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Style at `scroll`, or `None` when the driving section is missing.
    #[must_use]
    pub fn sample(&self, scroll: f32, layout: &PageLayout) -> Option<ElementStyle> {
        self.range
            .progress(scroll, layout)
            .map(|t| self.from.lerp(&self.to, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ScrollOptions;

    #[test]
    fn overlay_fades_out_over_first_fifth_of_viewport() {
        let options = ScrollOptions::default();
        let track = ElementTrack::from_options(&options.elements[0]).unwrap();
        let layout = PageLayout::new(1000.0).with_section(".second", 1000.0, 1000.0);

        // "top bottom" fires at 0, "top 80%" at 200
        let start = track.sample(0.0, &layout).unwrap();
        assert_eq!(start, ElementStyle::default());

        let mid = track.sample(100.0, &layout).unwrap();
        assert!((mid.opacity - 0.5).abs() < 1e-6);
        assert!((mid.x_percent + 75.0).abs() < 1e-4);

        let end = track.sample(900.0, &layout).unwrap();
        assert_eq!(end.opacity, 0.0);
        assert_eq!(end.css_transform(), "translateX(-150%)");
    }

    #[test]
    fn missing_section_yields_no_style() {
        let options = ScrollOptions::default();
        let track = ElementTrack::from_options(&options.elements[0]).unwrap();
        assert_eq!(track.sample(0.0, &PageLayout::new(800.0)), None);
        assert_eq!(track.selector(), ".section--one--container");
    }
}
