//! Centralized viewer options with TOML preset support.
//!
//! Everything the page variants used to hard-code (model path, plugin
//! order, scroll keyframes, transition timing, optional features) lives
//! here. Options serialize to/from TOML so a page can ship its own preset.

mod camera;
mod dom;
mod features;
mod scroll;
mod transitions;
mod viewer;

use std::path::Path;

pub use camera::CameraOptions;
pub use dom::DomOptions;
pub use features::FeatureOptions;
use schemars::JsonSchema;
pub use scroll::{ElementTrackOptions, ScrollOptions, SectionRange};
use serde::{Deserialize, Serialize};
pub use transitions::TransitionOptions;
pub use viewer::ViewerOptions;

use crate::error::VitrineError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[features]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Canvas, model and render pipeline.
    pub viewer: ViewerOptions,
    /// Optional page features.
    pub features: FeatureOptions,
    /// Free-look pointer control.
    pub camera: CameraOptions,
    /// Free-look enter/exit tweens.
    pub transitions: TransitionOptions,
    /// Scroll-bound keyframes.
    pub scroll: ScrollOptions,
    /// Page element ids.
    #[schemars(skip)]
    pub dom: DomOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::OptionsParse`] for malformed TOML or values of
    /// the wrong type.
    pub fn from_toml(content: &str) -> Result<Self, VitrineError> {
        toml::from_str(content)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Io`] if the file cannot be read, or
    /// [`VitrineError::OptionsParse`] if its contents do not parse.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path).map_err(VitrineError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Io`] if the directory or file cannot be
    /// written, or [`VitrineError::OptionsParse`] if serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), VitrineError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VitrineError::Io)?;
        }
        std::fs::write(path, content).map_err(VitrineError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::RenderPlugin;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn saved_presets_are_listed_and_reload() {
        let dir = std::env::temp_dir()
            .join(format!("vitrine-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.features.enable_tweak_ui = true;
        opts.save(&dir.join("studio.toml")).unwrap();
        Options::default().save(&dir.join("plain.toml")).unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["plain", "studio"]);
        assert_eq!(Options::load(&dir.join("studio.toml")).unwrap(), opts);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[features]
enable_popup = false

[transitions]
enter_duration_secs = 3.5
easing = "linear"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert!(!opts.features.enable_popup);
        assert!(opts.features.enable_customize_mode);
        assert_eq!(opts.transitions.enter_duration_secs, 3.5);
        assert_eq!(opts.transitions.exit_duration_secs, 1.0);
        assert_eq!(opts.transitions.easing, EasingFunction::Linear);
        assert_eq!(opts.scroll.anchors.len(), 3);
    }

    #[test]
    fn plugin_list_parses_tagged_tables() {
        let toml_str = r#"
[[viewer.plugins]]
kind = "g_buffer"

[[viewer.plugins]]
kind = "progressive"
frames = 8
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.viewer.plugins,
            vec![
                RenderPlugin::GBuffer,
                RenderPlugin::Progressive { frames: 8 }
            ]
        );
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[features]\nenable_popup = 3").unwrap_err();
        assert!(matches!(err, VitrineError::OptionsParse(_)));
    }

    #[test]
    fn default_durations_match_customize_flow() {
        let t = TransitionOptions::default();
        assert_eq!(t.enter_duration().as_secs_f32(), 2.0);
        assert_eq!(t.exit_duration().as_secs_f32(), 1.0);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("viewer"));
        assert!(props.contains_key("features"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("transitions"));
        assert!(!props.contains_key("dom"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("rotate_speed").is_some());
        assert!(camera.get("min_distance").is_none());
    }
}
