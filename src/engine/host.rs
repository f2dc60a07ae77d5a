use crate::camera::CameraPose;

/// Effects the mode controller pushes out to the viewer runtime and page.
///
/// Only [`camera_changed`](Self::camera_changed) and
/// [`set_user_control_enabled`](Self::set_user_control_enabled) are
/// required; the page-facing methods default to no-ops so a page without
/// an overlay or exit button needs no special handling.
pub trait ViewerHost {
    /// Position and target changed; refresh camera-dependent state.
    fn camera_changed(&mut self, pose: &CameraPose);

    /// Accumulated progressive/shadow buffers are stale.
    fn reset_shadows(&mut self) {}

    /// Enable or disable direct pointer control of the camera.
    fn set_user_control_enabled(&mut self, enabled: bool);

    /// Enable or disable scroll-to-camera binding.
    fn set_scroll_binding_enabled(&mut self, _enabled: bool) {}

    /// Show or hide the informational overlay.
    fn set_overlay_visible(&mut self, _visible: bool) {}

    /// Show or hide the exit affordance.
    fn set_exit_visible(&mut self, _visible: bool) {}
}
