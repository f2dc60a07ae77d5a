use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where the camera sits and what it looks at.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
pub struct CameraPose {
    /// Eye position in world space.
    #[schemars(with = "[f32; 3]")]
    pub position: Vec3,
    /// Look-at target in world space.
    #[schemars(with = "[f32; 3]")]
    pub target: Vec3,
}

impl CameraPose {
    /// Build a pose from an eye position and a look-at target.
    #[must_use]
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Linear blend of both position and target.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            target: self.target.lerp(other.target, t),
        }
    }

    /// Distance from eye to target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        (self.position - self.target).length()
    }

    /// Whether both points lie within `epsilon` of `other`'s.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.position.distance(other.position) <= epsilon
            && self.target.distance(other.target) <= epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = CameraPose::new(Vec3::ZERO, Vec3::X);
        let b = CameraPose::new(Vec3::new(2.0, 0.0, 0.0), Vec3::Y);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        let mid = a.lerp(&b, 0.5);
        assert!(mid.approx_eq(
            &CameraPose::new(Vec3::X, Vec3::new(0.5, 0.5, 0.0)),
            1e-6
        ));
    }

    #[test]
    fn distance_is_eye_to_target() {
        let pose = CameraPose::new(Vec3::new(0.0, 3.0, 4.0), Vec3::ZERO);
        assert!((pose.distance() - 5.0).abs() < 1e-6);
    }
}
