use std::time::Duration;

use super::{ColorSpace, PageSurface, RenderPlugin, ViewerRuntime};
use crate::camera::CameraPose;
use crate::engine::{CameraModeController, ViewerHost};
use crate::error::VitrineError;
use crate::input::{InputEvent, PointerProcessor, TriggerBindings};
use crate::options::{DomOptions, Options};
use crate::scroll::{PageLayout, ScrollDriver};

/// Whether a registered plugin is exposed in the tweak panel.
fn in_tweak_panel(plugin: &RenderPlugin) -> bool {
    matches!(
        plugin,
        RenderPlugin::Tonemap { .. } | RenderPlugin::CanvasSnipper
    )
}

/// Full plugin registration order for `options`.
///
/// Tonemapping is forced off when the viewer renders into RGBM targets.
fn plugin_order(options: &Options) -> Vec<RenderPlugin> {
    let mut plugins = vec![RenderPlugin::AssetManager];
    if options.features.enable_popup {
        plugins.push(RenderPlugin::AssetDownloadPopup);
    }
    let use_rgbm = options.viewer.use_rgbm;
    plugins.extend(options.viewer.plugins.iter().filter_map(|p| match *p {
        RenderPlugin::AssetManager | RenderPlugin::AssetDownloadPopup => None,
        RenderPlugin::Tonemap { enabled } => Some(RenderPlugin::Tonemap {
            enabled: enabled && !use_rgbm,
        }),
        other => Some(other),
    }));
    plugins
}

/// Initialize the runtime, build the pipeline, load the model and bind
/// scroll and page triggers.
///
/// Scroll binding only happens once the model has loaded; a load failure
/// is returned before any camera driver exists.
///
/// # Errors
///
/// Propagates runtime failures from initialization, plugin registration
/// and model loading, then [`VitrineError::Config`] or
/// [`VitrineError::Marker`] from binding the scroll and camera options.
pub async fn setup_viewer<R, P>(
    mut runtime: R,
    page: P,
    options: &Options,
    layout: PageLayout,
) -> Result<ViewerSession<R, P>, VitrineError>
where
    R: ViewerRuntime,
    P: PageSurface,
{
    let viewer = &options.viewer;
    runtime.initialize(
        &viewer.canvas_id,
        ColorSpace {
            use_rgbm: viewer.use_rgbm,
        },
    )?;

    let plugins = plugin_order(options);
    runtime.register_render_plugins(&plugins)?;
    runtime.refresh_pipeline();
    log::info!(
        "pipeline: {}",
        plugins.iter().map(RenderPlugin::name).collect::<Vec<_>>().join(" → ")
    );

    runtime.load_model(&viewer.model_path).await?;
    log::info!("loaded model {}", viewer.model_path);

    if options.features.enable_tweak_ui {
        let panel: Vec<RenderPlugin> =
            plugins.iter().copied().filter(in_tweak_panel).collect();
        runtime.attach_tweak_ui(&panel);
    }

    let scroll = ScrollDriver::new(&options.scroll, layout)?;
    let controller = CameraModeController::from_options(options)?;
    let triggers = TriggerBindings::from_options(&options.dom, &options.features);

    Ok(ViewerSession {
        runtime,
        page,
        controller,
        scroll,
        triggers,
        pointer: PointerProcessor::new(),
        dom: options.dom.clone(),
    })
}

/// A running viewer: the controller plus everything that feeds it.
pub struct ViewerSession<R, P> {
    runtime: R,
    page: P,
    controller: CameraModeController,
    scroll: ScrollDriver,
    triggers: TriggerBindings,
    pointer: PointerProcessor,
    dom: DomOptions,
}

/// Forwards controller effects to the runtime and the page.
struct SessionHost<'a, R, P> {
    runtime: &'a mut R,
    page: &'a mut P,
    dom: &'a DomOptions,
}

impl<R: ViewerRuntime, P: PageSurface> ViewerHost for SessionHost<'_, R, P> {
    fn camera_changed(&mut self, pose: &CameraPose) {
        self.runtime.notify_camera_changed(pose);
    }

    fn reset_shadows(&mut self) {
        self.runtime.reset_shadows();
    }

    fn set_user_control_enabled(&mut self, enabled: bool) {
        self.runtime.set_user_control_enabled(enabled);
    }

    fn set_scroll_binding_enabled(&mut self, enabled: bool) {
        log::debug!("scroll binding {}", if enabled { "on" } else { "off" });
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.page.set_visible(&self.dom.overlay, visible);
    }

    fn set_exit_visible(&mut self, visible: bool) {
        self.page.set_visible(&self.dom.exit_container, visible);
    }
}

impl<R: ViewerRuntime, P: PageSurface> ViewerSession<R, P> {
    /// Scroll or resize event at document offset `scroll`.
    pub fn on_scroll(&mut self, scroll: f32) {
        let frame = self.scroll.on_scroll(scroll);
        for (selector, style) in &frame.elements {
            self.page.set_element_style(selector, style);
        }
        self.controller.on_scroll_progress(frame.camera_progress);
    }

    /// Page was re-measured; call [`on_scroll`](Self::on_scroll) afterwards.
    pub fn set_layout(&mut self, layout: PageLayout) {
        self.scroll.set_layout(layout);
    }

    /// Click on the element with the given id.
    pub fn click(&mut self, element_id: &str) {
        let Some(request) = self.triggers.on_click(element_id) else {
            return;
        };
        let mut host = SessionHost {
            runtime: &mut self.runtime,
            page: &mut self.page,
            dom: &self.dom,
        };
        self.controller.handle_request(request, &mut host);
    }

    /// Pointer event over the canvas.
    pub fn pointer(&mut self, event: InputEvent) {
        let Some(command) = self.pointer.handle_event(event) else {
            return;
        };
        let mut host = SessionHost {
            runtime: &mut self.runtime,
            page: &mut self.page,
            dom: &self.dom,
        };
        self.controller.execute(command, &mut host);
    }

    /// Pre-frame hook: step tweens by `dt`, then publish pose changes.
    pub fn frame(&mut self, dt: Duration) {
        let mut host = SessionHost {
            runtime: &mut self.runtime,
            page: &mut self.page,
            dom: &self.dom,
        };
        self.controller.advance(dt, &mut host);
        self.controller.on_frame(&mut host);
    }

    /// The camera mode controller.
    #[must_use]
    pub fn controller(&self) -> &CameraModeController {
        &self.controller
    }

    /// The viewer runtime.
    #[must_use]
    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// The page surface.
    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }
}
