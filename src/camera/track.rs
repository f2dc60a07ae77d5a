//! Scroll-bound keyframe track: anchor poses keyed to page sections.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::pose::CameraPose;
use crate::error::VitrineError;

/// A named keyframe tied to a page section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnchorPose {
    /// Selector of the section this pose belongs to (e.g. `".second"`).
    pub section: String,
    /// Overall scroll progress at which the pose is reached, in [0, 1].
    pub at: f32,
    /// Camera pose at this anchor.
    pub pose: CameraPose,
}

/// Piecewise-linear camera path over scroll progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTrack {
    anchors: Vec<AnchorPose>,
}

impl ScrollTrack {
    /// Build a track, rejecting empty or unordered anchor lists.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Config`] if `anchors` is empty, any anchor
    /// lies outside [0, 1], or progress values are not strictly increasing.
    pub fn new(anchors: Vec<AnchorPose>) -> Result<Self, VitrineError> {
        if anchors.is_empty() {
            return Err(VitrineError::Config(
                "scroll track needs at least one anchor".into(),
            ));
        }
        for anchor in &anchors {
            if !(0.0..=1.0).contains(&anchor.at) {
                return Err(VitrineError::Config(format!(
                    "anchor `{}` at {} lies outside [0, 1]",
                    anchor.section, anchor.at
                )));
            }
        }
        if anchors.windows(2).any(|w| w[1].at <= w[0].at) {
            return Err(VitrineError::Config(
                "anchors must be sorted by strictly increasing progress".into(),
            ));
        }
        Ok(Self { anchors })
    }

    /// Anchors in progress order.
    #[must_use]
    pub fn anchors(&self) -> &[AnchorPose] {
        &self.anchors
    }

    /// Camera pose prescribed at `progress` (clamped to [0, 1]).
    #[must_use]
    pub fn sample(&self, progress: f32) -> CameraPose {
        let progress = progress.clamp(0.0, 1.0);
        let next = self.anchors.partition_point(|a| a.at <= progress);

        match next {
            0 => self.anchors[0].pose,
            n if n == self.anchors.len() => self.anchors[n - 1].pose,
            n => {
                let a = &self.anchors[n - 1];
                let b = &self.anchors[n];
                let t = (progress - a.at) / (b.at - a.at);
                a.pose.lerp(&b.pose, t)
            }
        }
    }
}
