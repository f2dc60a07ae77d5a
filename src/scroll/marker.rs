//! Scroll range markers such as `"top bottom"` or `"top 80%"`.
//!
//! A marker names a point on the element and a point on the viewport; the
//! marker fires at the scroll offset where the two coincide.

use std::fmt;
use std::str::FromStr;

use crate::error::VitrineError;

/// A position along an element or the viewport, measured from its top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    /// The top edge.
    Top,
    /// The vertical center.
    Center,
    /// The bottom edge.
    Bottom,
    /// A percentage of the height from the top (`"80%"`).
    Percent(f32),
    /// An absolute pixel offset from the top (`"120px"`).
    Pixels(f32),
}

impl Edge {
    /// Offset from the top of a box of the given height.
    #[must_use]
    pub fn resolve(self, height: f32) -> f32 {
        match self {
            Self::Top => 0.0,
            Self::Center => height * 0.5,
            Self::Bottom => height,
            Self::Percent(p) => height * p / 100.0,
            Self::Pixels(px) => px,
        }
    }
}

impl FromStr for Edge {
    type Err = VitrineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => return Ok(Self::Top),
            "center" => return Ok(Self::Center),
            "bottom" => return Ok(Self::Bottom),
            _ => {}
        }

        let parsed = if let Some(pct) = s.strip_suffix('%') {
            pct.parse::<f32>().ok().map(Self::Percent)
        } else if let Some(px) = s.strip_suffix("px") {
            px.parse::<f32>().ok().map(Self::Pixels)
        } else {
            s.parse::<f32>().ok().map(Self::Pixels)
        };

        parsed
            .filter(|edge| match edge {
                Self::Percent(v) | Self::Pixels(v) => v.is_finite(),
                _ => true,
            })
            .ok_or_else(|| VitrineError::Marker(format!("unknown edge `{s}`")))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => f.write_str("top"),
            Self::Center => f.write_str("center"),
            Self::Bottom => f.write_str("bottom"),
            Self::Percent(p) => write!(f, "{p}%"),
            Self::Pixels(px) => write!(f, "{px}px"),
        }
    }
}

/// A `"<element-edge> <viewport-edge>"` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Point on the trigger element.
    pub element: Edge,
    /// Point on the viewport.
    pub viewport: Edge,
}

impl Marker {
    /// Scroll offset at which this marker fires for an element whose top
    /// sits at `element_top` (document coordinates).
    #[must_use]
    pub fn scroll_offset(
        &self,
        element_top: f32,
        element_height: f32,
        viewport_height: f32,
    ) -> f32 {
        element_top + self.element.resolve(element_height)
            - self.viewport.resolve(viewport_height)
    }
}

impl FromStr for Marker {
    type Err = VitrineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(element), Some(viewport), None) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(VitrineError::Marker(format!(
                "expected `<element-edge> <viewport-edge>`, got `{s}`"
            )));
        };
        Ok(Self {
            element: element.parse()?,
            viewport: viewport.parse()?,
        })
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element, self.viewport)
    }
}
