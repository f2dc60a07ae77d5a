use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Features", inline)]
#[serde(default)]
/// Optional page features layered onto the base viewer setup.
pub struct FeatureOptions {
    /// Show a download progress popup while assets load.
    #[schemars(title = "Download Popup")]
    pub enable_popup: bool,
    /// Wire the customize/exit buttons to free-look mode.
    #[schemars(title = "Customize Mode")]
    pub enable_customize_mode: bool,
    /// Attach a tweak panel for tonemapping and canvas snapshots.
    #[schemars(title = "Tweak Panel")]
    pub enable_tweak_ui: bool,
}

impl Default for FeatureOptions {
    fn default() -> Self {
        Self {
            enable_popup: true,
            enable_customize_mode: true,
            enable_tweak_ui: false,
        }
    }
}
