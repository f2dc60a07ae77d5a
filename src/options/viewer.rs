use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::runtime::RenderPlugin;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Viewer", inline)]
#[serde(default)]
/// Canvas, model and render pipeline configuration.
pub struct ViewerOptions {
    /// Id of the canvas element the viewer renders into.
    #[schemars(skip)]
    pub canvas_id: String,
    /// Model file loaded once the pipeline is ready.
    #[schemars(skip)]
    pub model_path: String,
    /// Render into RGBM-encoded targets instead of half-float ones.
    /// Tonemapping is only enabled when this is off.
    #[schemars(title = "RGBM Targets")]
    pub use_rgbm: bool,
    /// Post-processing plugins in pipeline order.
    #[schemars(skip)]
    pub plugins: Vec<RenderPlugin>,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            canvas_id: "webgi-canvas".into(),
            model_path: "./assets/drill.glb".into(),
            use_rgbm: false,
            plugins: vec![
                RenderPlugin::GBuffer,
                RenderPlugin::Progressive { frames: 32 },
                RenderPlugin::Tonemap { enabled: true },
                RenderPlugin::GammaCorrection,
                RenderPlugin::ScreenSpaceReflection,
                RenderPlugin::ScreenSpaceAmbientOcclusion,
                RenderPlugin::Bloom,
                RenderPlugin::CanvasSnipper,
            ],
        }
    }
}
