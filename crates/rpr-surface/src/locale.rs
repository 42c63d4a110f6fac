// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Translation loading.

use std::sync::Arc;

use rpr_core::{PluginIdentity, RprError};
use rpr_hooks::HookRegistry;
use tracing::debug;

use crate::component::SurfaceComponent;

/// Loads the plugin's text domain once all plugins are loaded.
pub struct Locale {
    text_domain: String,
    component: Arc<SurfaceComponent>,
}

impl Locale {
    pub fn new(identity: &PluginIdentity) -> Self {
        Self {
            text_domain: identity.text_domain.clone(),
            component: SurfaceComponent::new("i18n", &["load_plugin_textdomain"]),
        }
    }

    pub fn text_domain(&self) -> &str {
        &self.text_domain
    }

    pub fn register(&self, hooks: &mut HookRegistry) -> Result<(), RprError> {
        debug!(text_domain = %self.text_domain, "registering text domain loader");
        hooks.add_action("plugins_loaded", self.component.target("load_plugin_textdomain"))
    }
}
