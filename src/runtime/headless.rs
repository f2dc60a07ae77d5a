//! A runtime and page with no renderer or DOM behind them.
//!
//! They record what the controller asks for and log it, which is all the
//! headless preview binary and the session tests need.

use std::path::Path;

use rustc_hash::FxHashMap;

use super::{ColorSpace, PageSurface, RenderPlugin, ViewerRuntime};
use crate::camera::CameraPose;
use crate::error::VitrineError;
use crate::scroll::ElementStyle;

/// Records every runtime call instead of rendering.
#[derive(Debug, Clone, Default)]
pub struct HeadlessRuntime {
    canvas_id: Option<String>,
    color_space: ColorSpace,
    plugins: Vec<RenderPlugin>,
    pipeline_refreshed: bool,
    tweak_panel: Vec<RenderPlugin>,
    loaded_model: Option<String>,
    check_files: bool,
    camera_updates: usize,
    shadow_resets: usize,
    last_pose: Option<CameraPose>,
    user_control: bool,
}

impl HeadlessRuntime {
    /// Runtime that accepts any non-empty model path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runtime that fails `load_model` when the file does not exist.
    #[must_use]
    pub fn checking_files() -> Self {
        Self {
            check_files: true,
            ..Self::default()
        }
    }

    /// Whether `initialize` has been called.
    #[must_use]
    pub const fn initialized(&self) -> bool {
        self.canvas_id.is_some()
    }

    /// Color space requested at initialization.
    #[must_use]
    pub const fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    /// Registered plugins in order.
    #[must_use]
    pub fn plugins(&self) -> &[RenderPlugin] {
        &self.plugins
    }

    /// Whether the pipeline was rebuilt after registration.
    #[must_use]
    pub const fn pipeline_refreshed(&self) -> bool {
        self.pipeline_refreshed
    }

    /// Plugins exposed in the tweak panel.
    #[must_use]
    pub fn tweak_panel(&self) -> &[RenderPlugin] {
        &self.tweak_panel
    }

    /// Path of the loaded model.
    #[must_use]
    pub fn loaded_model(&self) -> Option<&str> {
        self.loaded_model.as_deref()
    }

    /// Number of camera change notifications received.
    #[must_use]
    pub const fn camera_updates(&self) -> usize {
        self.camera_updates
    }

    /// Number of shadow resets requested.
    #[must_use]
    pub const fn shadow_resets(&self) -> usize {
        self.shadow_resets
    }

    /// Pose from the most recent camera notification.
    #[must_use]
    pub const fn last_pose(&self) -> Option<CameraPose> {
        self.last_pose
    }

    /// Whether pointer camera control is enabled.
    #[must_use]
    pub const fn user_control(&self) -> bool {
        self.user_control
    }
}

impl ViewerRuntime for HeadlessRuntime {
    fn initialize(
        &mut self,
        canvas_id: &str,
        color_space: ColorSpace,
    ) -> Result<(), VitrineError> {
        log::debug!("headless viewer on #{canvas_id} ({color_space:?})");
        self.canvas_id = Some(canvas_id.to_owned());
        self.color_space = color_space;
        Ok(())
    }

    fn register_render_plugins(
        &mut self,
        plugins: &[RenderPlugin],
    ) -> Result<(), VitrineError> {
        if !self.initialized() {
            return Err(VitrineError::Runtime(
                "plugins registered before initialize".into(),
            ));
        }
        self.plugins.extend_from_slice(plugins);
        Ok(())
    }

    fn refresh_pipeline(&mut self) {
        self.pipeline_refreshed = true;
    }

    async fn load_model(&mut self, path: &str) -> Result<(), VitrineError> {
        if path.is_empty() {
            return Err(VitrineError::Runtime("empty model path".into()));
        }
        if self.check_files && !Path::new(path).is_file() {
            return Err(VitrineError::Runtime(format!("model not found: {path}")));
        }
        self.loaded_model = Some(path.to_owned());
        Ok(())
    }

    fn attach_tweak_ui(&mut self, plugins: &[RenderPlugin]) {
        self.tweak_panel = plugins.to_vec();
    }

    fn notify_camera_changed(&mut self, pose: &CameraPose) {
        self.camera_updates += 1;
        self.last_pose = Some(*pose);
        log::debug!(
            "camera position {:.3} target {:.3}",
            pose.position,
            pose.target
        );
    }

    fn reset_shadows(&mut self) {
        self.shadow_resets += 1;
    }

    fn set_user_control_enabled(&mut self, enabled: bool) {
        self.user_control = enabled;
        log::debug!("user camera control {}", if enabled { "on" } else { "off" });
    }
}

/// Remembers element visibility and styles by id/selector.
#[derive(Debug, Clone, Default)]
pub struct HeadlessPage {
    visibility: FxHashMap<String, bool>,
    styles: FxHashMap<String, ElementStyle>,
}

impl HeadlessPage {
    /// Last visibility set for `element_id`.
    #[must_use]
    pub fn visible(&self, element_id: &str) -> Option<bool> {
        self.visibility.get(element_id).copied()
    }

    /// Last style applied to `selector`.
    #[must_use]
    pub fn style(&self, selector: &str) -> Option<ElementStyle> {
        self.styles.get(selector).copied()
    }
}

impl PageSurface for HeadlessPage {
    fn set_visible(&mut self, element_id: &str, visible: bool) {
        let _ = self.visibility.insert(element_id.to_owned(), visible);
    }

    fn set_element_style(&mut self, selector: &str, style: &ElementStyle) {
        let _ = self.styles.insert(selector.to_owned(), *style);
    }
}
