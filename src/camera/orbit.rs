use glam::{Quat, Vec2, Vec3};

use super::pose::CameraPose;
use crate::options::CameraOptions;

/// Smallest angle (radians) kept between the view direction and the world
/// up axis so the orbit never flips over the pole.
const POLE_MARGIN: f32 = 0.01;

/// Pointer-driven orbit, pan and zoom around the pose target.
///
/// Only the free-look mode routes input here; the mode controller decides
/// whether a gesture is allowed to touch the pose at all.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
}

impl OrbitControls {
    /// Build orbit controls from the `[camera]` options section.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
        }
    }

    /// Orbit the eye around the target by `delta` pixels of drag.
    pub fn rotate(&self, pose: &mut CameraPose, delta: Vec2) {
        let offset = pose.position - pose.target;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }

        // Horizontal drag yaws around world up
        let yaw = Quat::from_axis_angle(Vec3::Y, -delta.x * self.rotate_speed);
        let offset = yaw * offset;

        // Vertical drag pitches around the camera's right axis
        let dir = offset / distance;
        let right = right_axis(dir);
        let current = dir.angle_between(Vec3::Y);
        let pitch = (-delta.y * self.rotate_speed)
            .clamp(POLE_MARGIN - current, std::f32::consts::PI - POLE_MARGIN - current);
        let offset = Quat::from_axis_angle(right, pitch) * offset;

        pose.position = pose.target + offset;
    }

    /// Slide eye and target together in the view plane.
    pub fn pan(&self, pose: &mut CameraPose, delta: Vec2) {
        let forward = (pose.target - pose.position).normalize_or_zero();
        if forward == Vec3::ZERO {
            return;
        }
        let right = right_axis(-forward);
        let up = right.cross(forward);

        let scale = self.pan_speed * pose.distance() * 0.001;
        let translation = (right * -delta.x + up * delta.y) * scale;

        pose.position += translation;
        pose.target += translation;
    }

    /// Dolly the eye toward (positive) or away from (negative) the target.
    pub fn zoom(&self, pose: &mut CameraPose, delta: f32) {
        let offset = pose.position - pose.target;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }
        // `clamp` panics on unordered limits
        let new_distance = (distance * (1.0 - delta * self.zoom_speed))
            .max(self.min_distance)
            .min(self.max_distance);
        if !new_distance.is_finite() || new_distance <= f32::EPSILON {
            return;
        }
        pose.position = pose.target + offset * (new_distance / distance);
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

/// Right-hand axis for a camera whose eye sits at `target + dir`.
fn right_axis(dir: Vec3) -> Vec3 {
    let right = Vec3::Y.cross(dir).normalize_or_zero();
    if right == Vec3::ZERO {
        Vec3::X
    } else {
        right
    }
}
