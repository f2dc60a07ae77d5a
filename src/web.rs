//! Browser bindings for the camera mode controller.
//!
//! The page's JavaScript owns the 3D runtime and the scroll library. It
//! forwards scroll offsets, button clicks, pointer events and the per-frame
//! tick to [`WebViewer`], then reads the camera pose back whenever
//! [`WebViewer::tick`] reports a change. Visibility of the overlay and the
//! exit button and the scroll-scrubbed element styles are applied to the
//! DOM directly.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::camera::CameraPose;
use crate::engine::{CameraModeController, ViewerHost};
use crate::input::{InputEvent, MouseButton, PointerProcessor, TriggerBindings};
use crate::options::{DomOptions, Options};
use crate::scroll::{ElementStyle, PageLayout, ScrollDriver};
use crate::util::frame_timing::millis_to_duration;

/// Route `log` output to the browser console and install the panic hook.
#[wasm_bindgen(js_name = "initLogging")]
pub fn init_logging() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    let _ = console_log::init_with_level(log::Level::Info);
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

fn html_element(element: web_sys::Element) -> Option<web_sys::HtmlElement> {
    element.dyn_into::<web_sys::HtmlElement>().ok()
}

/// Show or hide an element by id. Missing elements are skipped.
fn set_display(element_id: &str, visible: bool) {
    let Some(el) = document()
        .and_then(|d| d.get_element_by_id(element_id))
        .and_then(html_element)
    else {
        log::debug!("no element #{element_id}");
        return;
    };
    let value = if visible { "" } else { "none" };
    if el.style().set_property("display", value).is_err() {
        log::warn!("could not set display on #{element_id}");
    }
}

fn apply_style(selector: &str, style: &ElementStyle) {
    let Some(el) = document()
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .and_then(html_element)
    else {
        return;
    };
    let css = el.style();
    let applied = css
        .set_property("transform", &style.css_transform())
        .and_then(|()| css.set_property("opacity", &style.opacity.to_string()));
    if applied.is_err() {
        log::warn!("could not style {selector}");
    }
}

/// Collects controller effects for the current call.
#[derive(Default)]
struct DomHost<'a> {
    dom: Option<&'a DomOptions>,
    camera_changed: bool,
    shadows_reset: bool,
}

impl ViewerHost for DomHost<'_> {
    fn camera_changed(&mut self, _pose: &CameraPose) {
        self.camera_changed = true;
    }

    fn reset_shadows(&mut self) {
        self.shadows_reset = true;
    }

    // Polled through `userControlEnabled`.
    fn set_user_control_enabled(&mut self, _enabled: bool) {}

    fn set_overlay_visible(&mut self, visible: bool) {
        if let Some(dom) = self.dom {
            set_display(&dom.overlay, visible);
        }
    }

    fn set_exit_visible(&mut self, visible: bool) {
        if let Some(dom) = self.dom {
            set_display(&dom.exit_container, visible);
        }
    }
}

/// Camera mode controller exposed to page scripts.
#[wasm_bindgen]
pub struct WebViewer {
    controller: CameraModeController,
    scroll: ScrollDriver,
    triggers: TriggerBindings,
    pointer: PointerProcessor,
    dom: DomOptions,
    shadows_reset: bool,
}

#[wasm_bindgen]
impl WebViewer {
    /// Build from an optional TOML preset; defaults otherwise.
    ///
    /// # Errors
    ///
    /// Throws when the preset does not parse or describes an unusable
    /// camera or scroll setup.
    #[wasm_bindgen(constructor)]
    pub fn new(
        options_toml: Option<String>,
        viewport_height: f32,
    ) -> Result<WebViewer, JsError> {
        let options = match options_toml {
            Some(text) => Options::from_toml(&text)?,
            None => Options::default(),
        };
        let scroll =
            ScrollDriver::new(&options.scroll, PageLayout::new(viewport_height))?;
        let controller = CameraModeController::from_options(&options)?;
        Ok(Self {
            controller,
            scroll,
            triggers: TriggerBindings::from_options(
                &options.dom,
                &options.features,
            ),
            pointer: PointerProcessor::new(),
            dom: options.dom,
            shadows_reset: false,
        })
    }

    /// Record where a section sits on the page, in document pixels.
    #[wasm_bindgen(js_name = "setSection")]
    pub fn set_section(&mut self, selector: &str, top: f32, height: f32) {
        let mut layout = self.scroll.layout().clone();
        layout.set_section(selector, top, height);
        self.scroll.set_layout(layout);
    }

    /// Record the viewport height after a resize.
    #[wasm_bindgen(js_name = "setViewportHeight")]
    pub fn set_viewport_height(&mut self, height: f32) {
        let mut layout = self.scroll.layout().clone();
        layout.set_viewport_height(height);
        self.scroll.set_layout(layout);
    }

    /// Page scrolled to `scroll_y`.
    #[wasm_bindgen(js_name = "onScroll")]
    pub fn on_scroll(&mut self, scroll_y: f32) {
        let frame = self.scroll.on_scroll(scroll_y);
        for (selector, style) in &frame.elements {
            apply_style(selector, style);
        }
        self.controller.on_scroll_progress(frame.camera_progress);
    }

    /// Progress reported by an external scroll library, bypassing markers.
    #[wasm_bindgen(js_name = "onScrollProgress")]
    pub fn on_scroll_progress(&mut self, progress: f32) {
        self.controller.on_scroll_progress(progress);
    }

    /// Click on an element; returns `true` when it was a mode trigger.
    pub fn click(&mut self, element_id: &str) -> bool {
        let Some(request) = self.triggers.on_click(element_id) else {
            return false;
        };
        let mut host = DomHost {
            dom: Some(&self.dom),
            ..DomHost::default()
        };
        self.controller.handle_request(request, &mut host);
        true
    }

    /// Pointer moved over the canvas.
    #[wasm_bindgen(js_name = "pointerMove")]
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer_event(InputEvent::CursorMoved { x, y });
    }

    /// Pointer button changed; `button` is `MouseEvent.button`.
    #[wasm_bindgen(js_name = "pointerButton")]
    pub fn pointer_button(&mut self, button: i16, pressed: bool, shift: bool) {
        self.pointer_event(InputEvent::ModifiersChanged { shift });
        self.pointer_event(InputEvent::MouseButton {
            button: MouseButton::from_dom(button),
            pressed,
        });
    }

    /// Wheel over the canvas, positive to zoom in.
    pub fn wheel(&mut self, delta: f32) {
        self.pointer_event(InputEvent::Wheel { delta });
    }

    /// Pre-frame hook. Returns `true` when the pose changed and should be
    /// pushed to the renderer.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        let dt = millis_to_duration(dt_ms);
        let mut host = DomHost {
            dom: Some(&self.dom),
            ..DomHost::default()
        };
        self.controller.advance(dt, &mut host);
        self.controller.on_frame(&mut host);
        self.shadows_reset |= host.shadows_reset;
        host.camera_changed
    }

    /// Whether shadows should be reset; clears the flag.
    #[wasm_bindgen(js_name = "takeShadowReset")]
    pub fn take_shadow_reset(&mut self) -> bool {
        std::mem::take(&mut self.shadows_reset)
    }

    /// Camera position as `[x, y, z]`.
    pub fn position(&self) -> Vec<f32> {
        self.controller.pose().position.to_array().to_vec()
    }

    /// Camera target as `[x, y, z]`.
    pub fn target(&self) -> Vec<f32> {
        self.controller.pose().target.to_array().to_vec()
    }

    /// Whether the runtime's own pointer controls should be on.
    #[wasm_bindgen(js_name = "userControlEnabled")]
    pub fn user_control_enabled(&self) -> bool {
        self.controller.user_control_enabled()
    }

    /// Current mode name.
    pub fn mode(&self) -> String {
        format!("{:?}", self.controller.mode())
    }
}

impl WebViewer {
    fn pointer_event(&mut self, event: InputEvent) {
        let Some(command) = self.pointer.handle_event(event) else {
            return;
        };
        let mut host = DomHost::default();
        self.controller.execute(command, &mut host);
    }
}
