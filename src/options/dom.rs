use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(default)]
/// Element ids of the page controls the viewer talks to.
///
/// Any of these may be absent from the page; the matching trigger simply
/// never fires and visibility changes are skipped.
pub struct DomOptions {
    /// Button that enters free-look.
    pub customize_button: String,
    /// Button that leaves free-look.
    pub exit_button: String,
    /// Informational overlay hidden during free-look.
    pub overlay: String,
    /// Container of the exit button, shown only in free-look.
    pub exit_container: String,
}

impl Default for DomOptions {
    fn default() -> Self {
        Self {
            customize_button: "customize".into(),
            exit_button: "exit-customize".into(),
            overlay: "content".into(),
            exit_container: "exit-container".into(),
        }
    }
}
