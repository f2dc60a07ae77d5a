//! The camera mode controller.
//!
//! [`CameraModeController`] owns the camera pose and decides which driver
//! may write it: the scroll track (`ScrollDriven`), a pose tween
//! (`Transitioning`), or pointer input (`FreeLook`). Pose writes set a dirty
//! flag that [`on_frame`](CameraModeController::on_frame) consumes once per
//! rendered frame.
//!
//! The controller holds no references to the page or renderer. Every
//! operation that has outside effects takes a [`ViewerHost`].

pub mod command;
mod frame;
/// Effects the controller pushes out to the runtime and page.
pub mod host;
mod input;
mod scroll;
mod transition;

pub use command::{Mode, TransitionRequest, ViewerCommand};
pub use host::ViewerHost;

use crate::camera::{CameraPose, OrbitControls, PoseTween, ScrollTrack};
use crate::error::VitrineError;
use crate::options::{Options, TransitionOptions};

/// An in-flight tween and the mode it resolves to.
#[derive(Debug, Clone)]
struct ActiveTransition {
    toward: Mode,
    tween: PoseTween,
}

/// State machine governing who drives the camera.
#[derive(Debug, Clone)]
pub struct CameraModeController {
    mode: Mode,
    pose: CameraPose,
    dirty: bool,
    /// Present exactly while `mode == Mode::Transitioning`.
    transition: Option<ActiveTransition>,
    /// Last progress reported by the scroll driver, remembered in every
    /// mode so the exit tween can aim at the current scroll pose.
    scroll_progress: f32,
    scroll_binding: bool,
    user_control: bool,
    track: ScrollTrack,
    orbit: OrbitControls,
    transitions: TransitionOptions,
}

impl CameraModeController {
    /// Create a controller in `ScrollDriven` mode at progress 0.
    ///
    /// The initial pose is marked dirty so the first frame publishes it.
    #[must_use]
    pub fn new(
        track: ScrollTrack,
        orbit: OrbitControls,
        transitions: TransitionOptions,
    ) -> Self {
        let pose = track.sample(0.0);
        Self {
            mode: Mode::ScrollDriven,
            pose,
            dirty: true,
            transition: None,
            scroll_progress: 0.0,
            scroll_binding: true,
            user_control: false,
            track,
            orbit,
            transitions,
        }
    }

    /// Build a controller from the `[scroll]`, `[camera]` and
    /// `[transitions]` sections.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Config`] when the camera limits are unusable
    /// or the scroll anchors are empty or out of order.
    pub fn from_options(options: &Options) -> Result<Self, VitrineError> {
        options.camera.validate()?;
        let track = ScrollTrack::new(options.scroll.anchors.clone())?;
        Ok(Self::new(
            track,
            OrbitControls::from_options(&options.camera),
            options.transitions.clone(),
        ))
    }

    /// Dispatch a command.
    pub fn execute(&mut self, command: ViewerCommand, host: &mut dyn ViewerHost) {
        match command {
            ViewerCommand::EnterFreeLook => self.request_enter_free_look(host),
            ViewerCommand::ExitFreeLook => self.request_exit_free_look(host),
            ViewerCommand::ScrollProgress { progress } => {
                self.on_scroll_progress(progress);
            }
            ViewerCommand::RotateCamera { delta } => self.rotate(delta),
            ViewerCommand::PanCamera { delta } => self.pan(delta),
            ViewerCommand::Zoom { delta } => self.zoom(delta),
        }
    }

    /// Honor a page-raised request if the current mode allows it.
    pub fn handle_request(
        &mut self,
        request: &TransitionRequest,
        host: &mut dyn ViewerHost,
    ) {
        log::debug!(
            "transition request from `{}` toward {:?}",
            request.triggering_element,
            request.target_mode
        );
        match request.target_mode {
            Mode::FreeLook => self.request_enter_free_look(host),
            Mode::ScrollDriven => self.request_exit_free_look(host),
            Mode::Transitioning => {
                log::debug!("ignoring request for transient mode");
            }
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Mode the in-flight tween resolves to, if transitioning.
    #[must_use]
    pub fn transition_target(&self) -> Option<Mode> {
        self.transition.as_ref().map(|t| t.toward)
    }

    /// Current camera pose.
    #[must_use]
    pub const fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Whether a pose change is waiting for the next frame.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Last progress reported by the scroll driver.
    #[must_use]
    pub const fn scroll_progress(&self) -> f32 {
        self.scroll_progress
    }

    /// Whether scroll currently moves the camera.
    #[must_use]
    pub const fn scroll_binding_enabled(&self) -> bool {
        self.scroll_binding
    }

    /// Whether pointer input currently moves the camera.
    #[must_use]
    pub const fn user_control_enabled(&self) -> bool {
        self.user_control
    }

    /// The keyframe track scroll progress is sampled from.
    #[must_use]
    pub fn track(&self) -> &ScrollTrack {
        &self.track
    }

    fn write_pose(&mut self, pose: CameraPose) {
        if pose != self.pose {
            self.pose = pose;
            self.dirty = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use glam::{Vec2, Vec3};

    use super::*;
    use crate::camera::AnchorPose;
    use crate::options::CameraOptions;
    use crate::util::easing::EasingFunction;

    /// Records every effect the controller pushes out.
    #[derive(Default)]
    struct RecordingHost {
        camera_changes: Vec<CameraPose>,
        shadow_resets: usize,
        user_control: Vec<bool>,
        scroll_binding: Vec<bool>,
        overlay: Vec<bool>,
        exit: Vec<bool>,
    }

    impl ViewerHost for RecordingHost {
        fn camera_changed(&mut self, pose: &CameraPose) {
            self.camera_changes.push(*pose);
        }

        fn reset_shadows(&mut self) {
            self.shadow_resets += 1;
        }

        fn set_user_control_enabled(&mut self, enabled: bool) {
            self.user_control.push(enabled);
        }

        fn set_scroll_binding_enabled(&mut self, enabled: bool) {
            self.scroll_binding.push(enabled);
        }

        fn set_overlay_visible(&mut self, visible: bool) {
            self.overlay.push(visible);
        }

        fn set_exit_visible(&mut self, visible: bool) {
            self.exit.push(visible);
        }
    }

    fn anchor(section: &str, at: f32, x: f32) -> AnchorPose {
        AnchorPose {
            section: section.into(),
            at,
            pose: CameraPose::new(Vec3::new(x, 1.0, 4.0), Vec3::new(x, 0.0, 0.0)),
        }
    }

    fn free_look_pose() -> CameraPose {
        CameraPose::new(Vec3::new(0.0, 3.0, 6.0), Vec3::ZERO)
    }

    fn controller() -> CameraModeController {
        let track = ScrollTrack::new(vec![
            anchor(".first", 0.0, 0.0),
            anchor(".second", 0.5, 10.0),
            anchor(".third", 1.0, 20.0),
        ])
        .unwrap();
        let transitions = TransitionOptions {
            enter_duration_secs: 2.0,
            exit_duration_secs: 1.0,
            easing: EasingFunction::Linear,
            free_look_pose: free_look_pose(),
        };
        CameraModeController::new(track, OrbitControls::default(), transitions)
    }

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    /// Controller already settled in free-look.
    fn in_free_look(host: &mut RecordingHost) -> CameraModeController {
        let mut c = controller();
        c.request_enter_free_look(host);
        c.advance(secs(2.0), host);
        assert_eq!(c.mode(), Mode::FreeLook);
        c
    }

    // ── Construction & scroll ───────────────────────────────────────────────

    #[test]
    fn starts_scroll_driven_with_pending_first_pose() {
        let c = controller();
        assert_eq!(c.mode(), Mode::ScrollDriven);
        assert_eq!(c.pose(), c.track().anchors()[0].pose);
        assert!(c.is_dirty());
        assert!(c.scroll_binding_enabled());
        assert!(!c.user_control_enabled());
        assert_eq!(c.transition_target(), None);
    }

    #[test]
    fn scroll_at_zero_lands_on_first_anchor() {
        let mut c = controller();
        let mut host = RecordingHost::default();
        c.on_frame(&mut host);
        assert!(!c.is_dirty());

        c.on_scroll_progress(0.0);
        assert_eq!(c.pose(), c.track().anchors()[0].pose);
        assert!(c.is_dirty());
    }

    #[test]
    fn scroll_at_one_lands_on_last_anchor() {
        let mut c = controller();
        c.on_scroll_progress(1.0);
        assert_eq!(c.pose(), c.track().anchors()[2].pose);
    }

    #[test]
    fn scroll_progress_is_clamped_and_non_finite_ignored() {
        let mut c = controller();
        c.on_scroll_progress(4.0);
        assert_eq!(c.scroll_progress(), 1.0);
        c.on_scroll_progress(f32::NAN);
        assert_eq!(c.scroll_progress(), 1.0);
    }

    // ── Frame notification ──────────────────────────────────────────────────

    #[test]
    fn on_frame_notifies_at_most_once_per_change() {
        let mut c = controller();
        let mut host = RecordingHost::default();

        c.on_frame(&mut host);
        c.on_frame(&mut host);
        assert_eq!(host.camera_changes.len(), 1);
        assert_eq!(host.shadow_resets, 1);

        c.on_scroll_progress(0.25);
        c.on_frame(&mut host);
        c.on_frame(&mut host);
        assert_eq!(host.camera_changes.len(), 2);
        assert_eq!(host.camera_changes[1], c.pose());
    }

    // ── Entering free-look ──────────────────────────────────────────────────

    #[test]
    fn enter_passes_through_transitioning_then_enables_control() {
        let mut c = controller();
        let mut host = RecordingHost::default();

        c.request_enter_free_look(&mut host);
        assert_eq!(c.mode(), Mode::Transitioning);
        assert_eq!(c.transition_target(), Some(Mode::FreeLook));
        assert!(!c.scroll_binding_enabled());
        assert_eq!(host.scroll_binding, vec![false]);
        assert_eq!(host.overlay, vec![false]);
        assert!(!c.user_control_enabled());

        c.advance(secs(1.0), &mut host);
        assert_eq!(c.mode(), Mode::Transitioning);
        assert!(!c.user_control_enabled());
        assert!(host.user_control.is_empty());
        assert!(!host.exit.contains(&true));

        c.advance(secs(1.0), &mut host);
        assert_eq!(c.mode(), Mode::FreeLook);
        assert_eq!(c.pose(), free_look_pose());
        assert!(c.user_control_enabled());
        assert_eq!(host.user_control, vec![true]);
        assert_eq!(host.exit.last(), Some(&true));
        assert_eq!(c.transition_target(), None);
    }

    #[test]
    fn enter_in_free_look_is_a_no_op() {
        let mut host = RecordingHost::default();
        let mut c = in_free_look(&mut host);
        let pose = c.pose();

        c.request_enter_free_look(&mut host);
        assert_eq!(c.mode(), Mode::FreeLook);
        assert_eq!(c.pose(), pose);
        assert!(c.user_control_enabled());
    }

    #[test]
    fn enter_while_entering_keeps_first_tween() {
        let mut c = controller();
        let mut host = RecordingHost::default();
        c.request_enter_free_look(&mut host);
        c.advance(secs(1.5), &mut host);
        let pose = c.pose();

        c.request_enter_free_look(&mut host);
        assert_eq!(c.mode(), Mode::Transitioning);
        assert_eq!(c.pose(), pose);

        // Remaining half second of the first tween finishes it
        c.advance(secs(0.5), &mut host);
        assert_eq!(c.mode(), Mode::FreeLook);
    }

    #[test]
    fn scroll_is_ignored_while_entering() {
        let mut c = controller();
        let mut host = RecordingHost::default();
        c.request_enter_free_look(&mut host);
        c.advance(secs(0.5), &mut host);
        let pose = c.pose();

        c.on_scroll_progress(1.0);
        assert_eq!(c.pose(), pose);

        c.advance(secs(0.5), &mut host);
        let expected = c.track().anchors()[0].pose.lerp(&free_look_pose(), 0.5);
        assert!(c.pose().approx_eq(&expected, 1e-4));
    }

    // ── Exiting free-look ───────────────────────────────────────────────────

    #[test]
    fn exit_outside_free_look_leaves_state_unchanged() {
        let mut c = controller();
        let mut host = RecordingHost::default();

        c.request_exit_free_look(&mut host);
        assert_eq!(c.mode(), Mode::ScrollDriven);
        assert_eq!(c.pose(), c.track().anchors()[0].pose);

        c.request_enter_free_look(&mut host);
        c.advance(secs(0.4), &mut host);
        let pose = c.pose();
        c.request_exit_free_look(&mut host);
        assert_eq!(c.mode(), Mode::Transitioning);
        assert_eq!(c.transition_target(), Some(Mode::FreeLook));
        assert_eq!(c.pose(), pose);

        c.advance(secs(1.6), &mut host);
        assert_eq!(c.mode(), Mode::FreeLook);
    }

    #[test]
    fn exit_flies_back_to_scroll_pose_and_rebinds_scroll() {
        let mut host = RecordingHost::default();
        let mut c = in_free_look(&mut host);

        c.request_exit_free_look(&mut host);
        assert_eq!(c.mode(), Mode::Transitioning);
        assert_eq!(c.transition_target(), Some(Mode::ScrollDriven));
        assert!(!c.user_control_enabled());
        assert_eq!(host.user_control, vec![true, false]);
        assert_eq!(host.overlay.last(), Some(&true));
        assert_eq!(host.exit.last(), Some(&false));
        assert!(!c.scroll_binding_enabled());

        c.advance(secs(1.0), &mut host);
        assert_eq!(c.mode(), Mode::ScrollDriven);
        assert!(c.scroll_binding_enabled());
        assert_eq!(host.scroll_binding, vec![false, true]);
        assert_eq!(c.pose(), c.track().sample(0.0));
    }

    #[test]
    fn round_trip_returns_to_scroll_pose() {
        let mut c = controller();
        let mut host = RecordingHost::default();
        c.on_scroll_progress(0.3);
        let scroll_pose = c.pose();

        c.request_enter_free_look(&mut host);
        c.advance(secs(2.0), &mut host);
        c.rotate(Vec2::new(40.0, 10.0));
        c.request_exit_free_look(&mut host);
        c.advance(secs(1.0), &mut host);

        assert_eq!(c.mode(), Mode::ScrollDriven);
        assert!(c.pose().approx_eq(&scroll_pose, 1e-4));
    }

    #[test]
    fn exit_aims_at_progress_scrolled_during_free_look() {
        let mut host = RecordingHost::default();
        let mut c = in_free_look(&mut host);
        let pose = c.pose();

        c.on_scroll_progress(1.0);
        assert_eq!(c.pose(), pose);

        c.request_exit_free_look(&mut host);
        c.advance(secs(1.0), &mut host);
        assert_eq!(c.pose(), c.track().sample(1.0));
    }

    #[test]
    fn scroll_during_exit_is_applied_on_landing() {
        let mut host = RecordingHost::default();
        let mut c = in_free_look(&mut host);
        c.request_exit_free_look(&mut host);
        c.advance(secs(0.5), &mut host);

        c.on_scroll_progress(0.5);
        c.advance(secs(0.5), &mut host);
        assert_eq!(c.mode(), Mode::ScrollDriven);
        assert_eq!(c.pose(), c.track().sample(0.5));
    }

    // ── Cancellation ────────────────────────────────────────────────────────

    #[test]
    fn enter_during_exit_replaces_the_exit_tween() {
        let mut host = RecordingHost::default();
        let mut c = in_free_look(&mut host);
        c.request_exit_free_look(&mut host);
        c.advance(secs(0.5), &mut host);
        let mid_pose = c.pose();

        c.request_enter_free_look(&mut host);
        assert_eq!(c.mode(), Mode::Transitioning);
        assert_eq!(c.transition_target(), Some(Mode::FreeLook));
        assert_eq!(c.pose(), mid_pose);

        // Long enough for the superseded exit tween to have landed
        c.advance(secs(1.0), &mut host);
        assert_eq!(c.mode(), Mode::Transitioning);
        assert_eq!(host.scroll_binding, vec![false]);

        c.advance(secs(1.0), &mut host);
        assert_eq!(c.mode(), Mode::FreeLook);
        assert_eq!(c.pose(), free_look_pose());
        assert_eq!(host.user_control, vec![true, false, true]);
    }

    #[test]
    fn exit_while_exiting_keeps_first_tween() {
        let mut host = RecordingHost::default();
        let mut c = in_free_look(&mut host);
        c.request_exit_free_look(&mut host);
        c.advance(secs(0.5), &mut host);
        let pose = c.pose();
        let overlay_calls = host.overlay.len();

        c.request_exit_free_look(&mut host);
        assert_eq!(c.mode(), Mode::Transitioning);
        assert_eq!(c.transition_target(), Some(Mode::ScrollDriven));
        assert_eq!(c.pose(), pose);
        assert_eq!(host.overlay.len(), overlay_calls);

        // Remaining half second of the first tween lands it
        c.advance(secs(0.5), &mut host);
        assert_eq!(c.mode(), Mode::ScrollDriven);
        assert_eq!(c.pose(), c.track().sample(0.0));
    }

    // ── Pointer input ───────────────────────────────────────────────────────

    #[test]
    fn pointer_input_only_moves_camera_in_free_look() {
        let mut c = controller();
        let mut host = RecordingHost::default();
        c.on_frame(&mut host);
        let pose = c.pose();

        c.rotate(Vec2::new(50.0, 0.0));
        c.pan(Vec2::new(5.0, 5.0));
        c.zoom(1.0);
        assert_eq!(c.pose(), pose);
        assert!(!c.is_dirty());

        c.request_enter_free_look(&mut host);
        c.advance(secs(1.0), &mut host);
        let mid = c.pose();
        c.rotate(Vec2::new(50.0, 0.0));
        assert_eq!(c.pose(), mid);

        c.advance(secs(1.0), &mut host);
        c.on_frame(&mut host);
        c.rotate(Vec2::new(50.0, 0.0));
        assert_ne!(c.pose(), free_look_pose());
        assert!(c.is_dirty());
    }

    // ── Requests & commands ─────────────────────────────────────────────────

    #[test]
    fn requests_route_to_enter_and_exit() {
        let mut c = controller();
        let mut host = RecordingHost::default();

        c.handle_request(&TransitionRequest::enter_free_look("customize"), &mut host);
        assert_eq!(c.transition_target(), Some(Mode::FreeLook));
        c.advance(secs(2.0), &mut host);

        c.handle_request(&TransitionRequest::exit_free_look("exit-customize"), &mut host);
        assert_eq!(c.transition_target(), Some(Mode::ScrollDriven));

        let before = c.pose();
        let transient = TransitionRequest {
            target_mode: Mode::Transitioning,
            triggering_element: "bogus".into(),
        };
        c.handle_request(&transient, &mut host);
        assert_eq!(c.transition_target(), Some(Mode::ScrollDriven));
        assert_eq!(c.pose(), before);
    }

    #[test]
    fn execute_dispatches_every_command() {
        let mut c = controller();
        let mut host = RecordingHost::default();

        c.execute(ViewerCommand::ScrollProgress { progress: 0.5 }, &mut host);
        assert_eq!(c.pose(), c.track().sample(0.5));

        c.execute(ViewerCommand::EnterFreeLook, &mut host);
        c.advance(secs(2.0), &mut host);
        assert_eq!(c.mode(), Mode::FreeLook);

        c.execute(ViewerCommand::Zoom { delta: 1.0 }, &mut host);
        assert!(c.pose().distance() < free_look_pose().distance());
        c.execute(ViewerCommand::PanCamera { delta: Vec2::new(3.0, 0.0) }, &mut host);
        c.execute(ViewerCommand::RotateCamera { delta: Vec2::new(3.0, 0.0) }, &mut host);

        c.execute(ViewerCommand::ExitFreeLook, &mut host);
        assert_eq!(c.transition_target(), Some(Mode::ScrollDriven));
    }

    #[test]
    fn inverted_zoom_limits_are_rejected_at_construction() {
        let options =
            Options::from_toml("[camera]\nmin_distance = 30.0\nmax_distance = 20.0")
                .unwrap();
        assert!(matches!(
            CameraModeController::from_options(&options),
            Err(VitrineError::Config(_))
        ));
    }

    #[test]
    fn zoom_with_unordered_limits_stays_bounded() {
        let track = ScrollTrack::new(vec![anchor(".first", 0.0, 0.0)]).unwrap();
        let orbit = OrbitControls::from_options(&CameraOptions {
            min_distance: 30.0,
            max_distance: 20.0,
            ..CameraOptions::default()
        });
        let mut c = CameraModeController::new(
            track,
            orbit,
            TransitionOptions {
                easing: EasingFunction::Linear,
                free_look_pose: free_look_pose(),
                ..TransitionOptions::default()
            },
        );
        let mut host = RecordingHost::default();
        c.request_enter_free_look(&mut host);
        c.advance(secs(2.0), &mut host);

        c.zoom(0.5);
        assert!(c.pose().distance().is_finite());
        assert!(c.pose().distance() <= 20.0 + 1e-3);
    }

    #[test]
    fn default_options_build_a_controller() {
        let c = CameraModeController::from_options(&Options::default()).unwrap();
        assert_eq!(c.mode(), Mode::ScrollDriven);
        assert_eq!(c.track().anchors().len(), 3);
    }
}
