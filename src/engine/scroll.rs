//! Scroll-driven camera updates for CameraModeController

use super::{CameraModeController, Mode};

impl CameraModeController {
    /// Scroll driver callback with overall progress in [0, 1].
    ///
    /// Moves the camera along the keyframe track in `ScrollDriven` mode.
    /// In other modes the progress is only remembered; the pose is left to
    /// whichever driver owns it.
    pub fn on_scroll_progress(&mut self, progress: f32) {
        if !progress.is_finite() {
            log::debug!("ignoring non-finite scroll progress");
            return;
        }
        self.scroll_progress = progress.clamp(0.0, 1.0);

        if self.mode != Mode::ScrollDriven {
            return;
        }
        self.pose = self.track.sample(self.scroll_progress);
        self.dirty = true;
    }
}
