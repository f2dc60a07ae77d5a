//! Free-look enter/exit transitions for CameraModeController

use std::time::Duration;

use super::{ActiveTransition, CameraModeController, Mode, ViewerHost};
use crate::camera::{CameraPose, PoseTween};

impl CameraModeController {
    /// Start flying into free-look.
    ///
    /// Honored from `ScrollDriven`. A request arriving while an exit tween
    /// is in flight replaces that tween (last request wins). Anything else
    /// is ignored.
    pub fn request_enter_free_look(&mut self, host: &mut dyn ViewerHost) {
        match (self.mode, self.transition_target()) {
            (Mode::ScrollDriven, _) => {}
            (Mode::Transitioning, Some(Mode::ScrollDriven)) => {
                log::debug!("free-look requested mid-exit, retargeting");
            }
            (mode, toward) => {
                log::debug!(
                    "ignoring free-look request in {mode:?} (toward {toward:?})"
                );
                return;
            }
        }

        self.set_scroll_binding(false, host);
        host.set_overlay_visible(false);
        host.set_exit_visible(false);

        let destination = self.transitions.free_look_pose;
        let duration = self.transitions.enter_duration();
        self.start_transition(Mode::FreeLook, destination, duration);
    }

    /// Start flying back to the scroll-prescribed pose.
    ///
    /// Honored only from `FreeLook`.
    pub fn request_exit_free_look(&mut self, host: &mut dyn ViewerHost) {
        if self.mode != Mode::FreeLook {
            log::debug!(
                "ignoring exit request in {:?} (toward {:?})",
                self.mode,
                self.transition_target()
            );
            return;
        }

        self.set_user_control(false, host);
        host.set_exit_visible(false);
        host.set_overlay_visible(true);

        let destination = self.track.sample(self.scroll_progress);
        let duration = self.transitions.exit_duration();
        self.start_transition(Mode::ScrollDriven, destination, duration);
    }

    /// Step the in-flight tween by `dt`, resolving the transition when it
    /// lands. No-op outside `Transitioning`.
    pub fn advance(&mut self, dt: Duration, host: &mut dyn ViewerHost) {
        let Some(active) = self.transition.as_mut() else {
            return;
        };
        let step = active.tween.advance(dt);
        let toward = active.toward;

        self.write_pose(step.pose);
        if step.finished {
            self.transition = None;
            self.complete_transition(toward, host);
        }
    }

    /// Replace any in-flight tween with a fresh one from the current pose.
    fn start_transition(
        &mut self,
        toward: Mode,
        destination: CameraPose,
        duration: Duration,
    ) {
        let tween = PoseTween::new(
            self.pose,
            destination,
            duration,
            self.transitions.easing,
        );
        self.transition = Some(ActiveTransition { toward, tween });
        self.mode = Mode::Transitioning;
        log::debug!("transitioning toward {toward:?} over {duration:?}");
    }

    fn complete_transition(&mut self, toward: Mode, host: &mut dyn ViewerHost) {
        match toward {
            Mode::FreeLook => {
                self.mode = Mode::FreeLook;
                self.set_user_control(true, host);
                host.set_exit_visible(true);
            }
            // Tweens are only ever started toward a resting mode
            Mode::ScrollDriven | Mode::Transitioning => {
                self.mode = Mode::ScrollDriven;
                self.set_scroll_binding(true, host);
                // Scroll may have moved while the tween was flying
                let pose = self.track.sample(self.scroll_progress);
                self.write_pose(pose);
            }
        }
        log::debug!("camera mode is now {:?}", self.mode);
    }

    fn set_scroll_binding(&mut self, enabled: bool, host: &mut dyn ViewerHost) {
        if self.scroll_binding != enabled {
            self.scroll_binding = enabled;
            host.set_scroll_binding_enabled(enabled);
        }
    }

    fn set_user_control(&mut self, enabled: bool, host: &mut dyn ViewerHost) {
        if self.user_control != enabled {
            self.user_control = enabled;
            host.set_user_control_enabled(enabled);
        }
    }
}
