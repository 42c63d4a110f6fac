// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `rpr_recipe` custom post type.

use std::sync::Arc;

use rpr_core::{PluginIdentity, RprError};
use rpr_hooks::HookRegistry;
use tracing::debug;

use crate::component::SurfaceComponent;

/// Slug the recipe post type is registered under.
pub const RECIPE_POST_TYPE: &str = "rpr_recipe";

/// Registers the recipe post type when the host initializes.
///
/// Runs before modules load so that modules can rely on the post type.
pub struct RecipePostType {
    identity: PluginIdentity,
    component: Arc<SurfaceComponent>,
}

impl RecipePostType {
    pub fn new(identity: PluginIdentity) -> Self {
        Self {
            identity,
            component: SurfaceComponent::new("recipe_post_type", &["register_post_type"]),
        }
    }

    pub fn register(&self, hooks: &mut HookRegistry) -> Result<(), RprError> {
        debug!(
            post_type = RECIPE_POST_TYPE,
            plugin = %self.identity.name,
            "registering recipe post type"
        );
        hooks.add_action("init", self.component.target("register_post_type"))
    }
}
