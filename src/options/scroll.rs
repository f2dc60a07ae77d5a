use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{AnchorPose, CameraPose};
use crate::scroll::ElementStyle;

/// Scroll range bound to one page section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct SectionRange {
    /// Section selector the range is measured against.
    pub section: String,
    /// Start marker, e.g. `"top bottom"`.
    pub start: String,
    /// End marker, e.g. `"top top"`.
    pub end: String,
}

impl SectionRange {
    fn new(section: &str, start: &str, end: &str) -> Self {
        Self {
            section: section.to_owned(),
            start: start.to_owned(),
            end: end.to_owned(),
        }
    }
}

/// A page element whose style is scrubbed by scroll.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ElementTrackOptions {
    /// Selector of the element being styled.
    pub selector: String,
    /// Range that scrubs the style.
    pub range: SectionRange,
    /// Style before the range starts.
    #[serde(default)]
    pub from: ElementStyle,
    /// Style once the range has ended.
    pub to: ElementStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scroll", inline)]
#[serde(default)]
/// Scroll-bound camera keyframes and element tracks.
///
/// Each anchor after the first is reached through the range registered for
/// its section.
pub struct ScrollOptions {
    /// Camera anchors in scroll order.
    #[schemars(skip)]
    pub anchors: Vec<AnchorPose>,
    /// Ranges that drive the camera between anchors.
    #[schemars(skip)]
    pub ranges: Vec<SectionRange>,
    /// Element style tracks (overlay fade-out).
    #[schemars(skip)]
    pub elements: Vec<ElementTrackOptions>,
}

fn anchor(section: &str, at: f32, position: Vec3, target: Vec3) -> AnchorPose {
    AnchorPose {
        section: section.to_owned(),
        at,
        pose: CameraPose::new(position, target),
    }
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            anchors: vec![
                anchor(
                    ".first",
                    0.0,
                    Vec3::new(-3.825_786_2, -2.249_399_6, 7.552_691_5),
                    Vec3::new(-1.37, 1.99, -0.37),
                ),
                anchor(
                    ".second",
                    0.5,
                    Vec3::new(3.209_718_5, -4.053_279_4, -6.081_696_5),
                    Vec3::new(-0.564_016_4, 0.131_094_3, -0.738_582_5),
                ),
                anchor(
                    ".third",
                    1.0,
                    Vec3::new(-2.720_103_5, -0.498_032_17, 1.463_892),
                    Vec3::new(-0.717_193, 1.394_700_2, -0.497_880_97),
                ),
            ],
            ranges: vec![
                SectionRange::new(".second", "top bottom", "top top"),
                SectionRange::new(".third", "top bottom", "top top"),
            ],
            elements: vec![ElementTrackOptions {
                selector: ".section--one--container".to_owned(),
                range: SectionRange::new(".second", "top bottom", "top 80%"),
                from: ElementStyle::default(),
                to: ElementStyle {
                    x_percent: -150.0,
                    opacity: 0.0,
                },
            }],
        }
    }
}
