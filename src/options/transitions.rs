use std::time::Duration;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;
use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transitions", inline)]
#[serde(default)]
/// Timing and destination of the free-look enter/exit tweens.
pub struct TransitionOptions {
    /// Seconds taken to fly into free-look.
    #[schemars(title = "Enter Duration", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub enter_duration_secs: f32,
    /// Seconds taken to fly back to the scroll pose.
    #[schemars(title = "Exit Duration", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub exit_duration_secs: f32,
    /// Easing curve shared by both tweens.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// Pose the camera settles on when free-look begins.
    #[schemars(skip)]
    pub free_look_pose: CameraPose,
}

impl TransitionOptions {
    /// Enter tween duration.
    #[must_use]
    pub fn enter_duration(&self) -> Duration {
        secs(self.enter_duration_secs)
    }

    /// Exit tween duration.
    #[must_use]
    pub fn exit_duration(&self) -> Duration {
        secs(self.exit_duration_secs)
    }
}

fn secs(value: f32) -> Duration {
    Duration::try_from_secs_f32(value.max(0.0)).unwrap_or(Duration::ZERO)
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            enter_duration_secs: 2.0,
            exit_duration_secs: 1.0,
            easing: EasingFunction::DEFAULT,
            free_look_pose: CameraPose::new(
                Vec3::new(-4.2, 1.6, 5.8),
                Vec3::new(-0.6, 0.8, -0.5),
            ),
        }
    }
}
