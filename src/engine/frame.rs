use super::{CameraModeController, ViewerHost};

impl CameraModeController {
    /// Per-frame hook: publish a pending pose change exactly once.
    pub fn on_frame(&mut self, host: &mut dyn ViewerHost) {
        if !self.dirty {
            return;
        }
        host.reset_shadows();
        host.camera_changed(&self.pose);
        self.dirty = false;
    }
}
