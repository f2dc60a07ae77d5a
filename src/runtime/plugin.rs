use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A render pipeline plugin provided by the viewer runtime.
///
/// Plugins are registered in list order; the runtime builds its pipeline
/// from that order once `refresh_pipeline` is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderPlugin {
    /// Asset import and caching.
    AssetManager,
    /// HTML popup showing download progress while assets load.
    AssetDownloadPopup,
    /// Depth/normal G-buffer shared by screen-space effects.
    GBuffer,
    /// Progressive accumulation over a number of still frames.
    Progressive {
        /// Frames accumulated once the camera stops moving.
        frames: u32,
    },
    /// Tonemapping. Only meaningful with half-float targets, so setup
    /// switches it off when RGBM targets are requested.
    Tonemap {
        /// Whether the pass runs.
        #[serde(default = "enabled_by_default")]
        enabled: bool,
    },
    /// Linear → sRGB output conversion.
    GammaCorrection,
    /// Screen-space reflections.
    ScreenSpaceReflection,
    /// Screen-space ambient occlusion.
    ScreenSpaceAmbientOcclusion,
    /// Bloom.
    Bloom,
    /// Canvas snapshot/download helpers.
    CanvasSnipper,
}

const fn enabled_by_default() -> bool {
    true
}

impl RenderPlugin {
    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AssetManager => "asset-manager",
            Self::AssetDownloadPopup => "asset-download-popup",
            Self::GBuffer => "gbuffer",
            Self::Progressive { .. } => "progressive",
            Self::Tonemap { .. } => "tonemap",
            Self::GammaCorrection => "gamma-correction",
            Self::ScreenSpaceReflection => "ssr",
            Self::ScreenSpaceAmbientOcclusion => "ssao",
            Self::Bloom => "bloom",
            Self::CanvasSnipper => "canvas-snipper",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    #[test]
    fn bare_tonemap_table_defaults_to_enabled() {
        let opts =
            Options::from_toml("[[viewer.plugins]]\nkind = \"tonemap\"").unwrap();
        assert_eq!(
            opts.viewer.plugins,
            vec![RenderPlugin::Tonemap { enabled: true }]
        );
        assert_eq!(opts.viewer.plugins[0].name(), "tonemap");
    }
}
