use std::time::Duration;

use super::pose::CameraPose;
use crate::util::easing::EasingFunction;

/// A fixed-duration eased interpolation between two camera poses.
///
/// Time only moves when [`advance`](Self::advance) is called, so tests
/// can step a tween deterministically without a clock.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseTween {
    from: CameraPose,
    to: CameraPose,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFunction,
}

/// Result of stepping a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenStep {
    /// Interpolated pose after the step.
    pub pose: CameraPose,
    /// Whether the tween reached its destination on this step.
    pub finished: bool,
}

impl PoseTween {
    /// Start a tween from `from` to `to` lasting `duration`.
    #[must_use]
    pub fn new(
        from: CameraPose,
        to: CameraPose,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Destination pose.
    #[must_use]
    pub const fn destination(&self) -> CameraPose {
        self.to
    }

    /// Raw (un-eased) progress in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Whether the tween has reached its destination.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Pose at the current elapsed time.
    #[must_use]
    pub fn current(&self) -> CameraPose {
        if self.is_finished() {
            return self.to;
        }
        self.from.lerp(&self.to, self.easing.evaluate(self.progress()))
    }

    /// Move time forward by `dt` and return the resulting pose.
    pub fn advance(&mut self, dt: Duration) -> TweenStep {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        TweenStep {
            pose: self.current(),
            finished: self.is_finished(),
        }
    }
}
