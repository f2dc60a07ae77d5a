use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VitrineError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Free-look pointer control parameters.
pub struct CameraOptions {
    /// Orbit radians per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub pan_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Closest the eye may get to its target.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest the eye may get from its target.
    #[schemars(skip)]
    pub max_distance: f32,
}

impl CameraOptions {
    /// Check that speeds are finite and the zoom limits form a range.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Config`] for non-finite values, negative
    /// speeds, or a `min_distance` that is not positive and at most
    /// `max_distance`.
    pub fn validate(&self) -> Result<(), VitrineError> {
        let speeds = [
            ("rotate_speed", self.rotate_speed),
            ("pan_speed", self.pan_speed),
            ("zoom_speed", self.zoom_speed),
        ];
        for (name, value) in speeds {
            if !value.is_finite() || value < 0.0 {
                return Err(VitrineError::Config(format!(
                    "camera {name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        let (min, max) = (self.min_distance, self.max_distance);
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min > max {
            return Err(VitrineError::Config(format!(
                "camera zoom limits must satisfy 0 < min_distance <= max_distance, got {min}..{max}"
            )));
        }
        Ok(())
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 0.005,
            pan_speed: 1.0,
            zoom_speed: 0.1,
            min_distance: 1.0,
            max_distance: 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_are_valid() {
        assert!(CameraOptions::default().validate().is_ok());
    }

    #[test]
    fn inverted_or_non_finite_limits_are_rejected() {
        let inverted = CameraOptions {
            min_distance: 30.0,
            max_distance: 20.0,
            ..CameraOptions::default()
        };
        assert!(matches!(inverted.validate(), Err(VitrineError::Config(_))));

        let nan = CameraOptions {
            max_distance: f32::NAN,
            ..CameraOptions::default()
        };
        assert!(matches!(nan.validate(), Err(VitrineError::Config(_))));

        let bad_speed = CameraOptions {
            zoom_speed: f32::INFINITY,
            ..CameraOptions::default()
        };
        assert!(matches!(bad_speed.validate(), Err(VitrineError::Config(_))));
    }
}
