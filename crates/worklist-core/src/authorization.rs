//! Per-resource action capabilities derived from server-declared links.
//!
//! Permissions are server-authoritative and must never lag: the state is
//! rebuilt from the latest response on every fetch, never cached across
//! fetches. A resource type absent from the latest response has an empty
//! capability set.

use std::collections::{BTreeMap, BTreeSet};

use worklist_model::LinkSet;

#[derive(Debug, Clone, Default)]
pub struct AuthorizationState {
    capabilities: BTreeMap<String, BTreeSet<String>>,
}

impl AuthorizationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all capability sets, ahead of a rebuild from a fresh response.
    pub fn reset(&mut self) {
        self.capabilities.clear();
    }

    /// Register the permitted actions for one resource type from its links.
    pub fn init_model_auth(&mut self, resource: &str, links: &LinkSet) {
        let actions = links.actions().map(str::to_string).collect();
        self.capabilities.insert(resource.to_string(), actions);
    }

    /// Whether the latest response permits `action` on `resource`.
    /// Fail-closed: an unknown resource permits nothing.
    pub fn allowed(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .get(resource)
            .is_some_and(|actions| actions.contains(action))
    }

    /// The full permitted-action set for a resource type.
    pub fn actions(&self, resource: &str) -> impl Iterator<Item = &str> {
        self.capabilities
            .get(resource)
            .into_iter()
            .flat_map(|actions| actions.iter().map(String::as_str))
    }
}
