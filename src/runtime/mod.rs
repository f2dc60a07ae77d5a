//! The viewer runtime and page seams, and the one setup routine that wires
//! them to the camera mode controller.
//!
//! Rendering, asset decoding and post-processing all live behind
//! [`ViewerRuntime`]; DOM visibility and style changes behind
//! [`PageSurface`]. [`setup_viewer`] drives both through the startup
//! sequence and returns a [`ViewerSession`] that routes scroll, click,
//! pointer and frame events.

/// Recording runtime and page used by the headless preview.
pub mod headless;
/// Render plugin identifiers.
pub mod plugin;
/// Startup sequence and event routing.
pub mod session;

pub use headless::{HeadlessPage, HeadlessRuntime};
pub use plugin::RenderPlugin;
pub use session::{setup_viewer, ViewerSession};

use crate::camera::CameraPose;
use crate::error::VitrineError;
use crate::scroll::ElementStyle;

/// Render target encoding requested at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorSpace {
    /// RGBM-encoded 8-bit targets instead of half-float ones.
    pub use_rgbm: bool,
}

/// The 3D viewer the controller drives: scene, camera, renderer and
/// plugin pipeline.
#[allow(async_fn_in_trait)]
pub trait ViewerRuntime {
    /// Bind to the canvas and create the renderer.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Runtime`] if the canvas or renderer is
    /// unavailable.
    fn initialize(
        &mut self,
        canvas_id: &str,
        color_space: ColorSpace,
    ) -> Result<(), VitrineError>;

    /// Add plugins to the pipeline in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Runtime`] if a plugin cannot be added.
    fn register_render_plugins(
        &mut self,
        plugins: &[RenderPlugin],
    ) -> Result<(), VitrineError>;

    /// Rebuild the pipeline; called once after every plugin is registered.
    fn refresh_pipeline(&mut self);

    /// Import a model into the scene.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Runtime`] if the model cannot be fetched or
    /// decoded.
    async fn load_model(&mut self, path: &str) -> Result<(), VitrineError>;

    /// Expose the settings of `plugins` in a tweak panel.
    fn attach_tweak_ui(&mut self, _plugins: &[RenderPlugin]) {}

    /// Camera position and target changed since the last frame.
    fn notify_camera_changed(&mut self, pose: &CameraPose);

    /// Throw away accumulated shadow/progressive buffers.
    fn reset_shadows(&mut self) {}

    /// Enable or disable the runtime's own pointer camera controls.
    fn set_user_control_enabled(&mut self, enabled: bool);
}

/// The page around the canvas.
pub trait PageSurface {
    /// Show or hide the element with the given id. Unknown ids are ignored.
    fn set_visible(&mut self, element_id: &str, visible: bool);

    /// Apply a scroll-scrubbed style to every element matching `selector`.
    fn set_element_style(&mut self, selector: &str, style: &ElementStyle);
}
