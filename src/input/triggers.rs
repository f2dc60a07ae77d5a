//! Page buttons → transition requests.

use rustc_hash::FxHashMap;

use crate::engine::TransitionRequest;
use crate::options::{DomOptions, FeatureOptions};

/// Maps clickable element ids to the request each one raises.
///
/// Ids absent from the page never fire, so a missing button needs no
/// special handling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerBindings {
    bindings: FxHashMap<String, TransitionRequest>,
}

impl TriggerBindings {
    /// Bindings for the configured buttons. Customize mode buttons are only
    /// bound when the feature is enabled.
    #[must_use]
    pub fn from_options(dom: &DomOptions, features: &FeatureOptions) -> Self {
        let mut triggers = Self::default();
        if features.enable_customize_mode {
            triggers.bind(TransitionRequest::enter_free_look(&*dom.customize_button));
            triggers.bind(TransitionRequest::exit_free_look(&*dom.exit_button));
        }
        triggers
    }

    /// Bind a request to the element named in it, replacing any previous
    /// binding for that element.
    pub fn bind(&mut self, request: TransitionRequest) {
        let _ = self
            .bindings
            .insert(request.triggering_element.clone(), request);
    }

    /// Request raised by clicking `element_id`, if it is bound.
    #[must_use]
    pub fn on_click(&self, element_id: &str) -> Option<&TransitionRequest> {
        self.bindings.get(element_id)
    }

    /// Bound element ids, sorted.
    #[must_use]
    pub fn element_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
