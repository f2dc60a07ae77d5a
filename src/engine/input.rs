//! Free-look pointer gestures for CameraModeController

use glam::Vec2;

use super::{CameraModeController, Mode};

impl CameraModeController {
    /// Whether pointer gestures may move the camera right now.
    fn accepts_pointer(&self) -> bool {
        self.mode == Mode::FreeLook && self.user_control
    }

    /// Orbit around the target. Ignored outside free-look.
    pub fn rotate(&mut self, delta: Vec2) {
        if !self.accepts_pointer() {
            return;
        }
        self.orbit.rotate(&mut self.pose, delta);
        self.dirty = true;
    }

    /// Slide eye and target in the view plane. Ignored outside free-look.
    pub fn pan(&mut self, delta: Vec2) {
        if !self.accepts_pointer() {
            return;
        }
        self.orbit.pan(&mut self.pose, delta);
        self.dirty = true;
    }

    /// Dolly toward or away from the target. Ignored outside free-look.
    pub fn zoom(&mut self, delta: f32) {
        if !self.accepts_pointer() {
            return;
        }
        self.orbit.zoom(&mut self.pose, delta);
        self.dirty = true;
    }
}
