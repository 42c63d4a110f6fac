// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registrations for the publicly served site.

use std::sync::Arc;

use rpr_core::{PluginIdentity, RprError, Surface};
use rpr_hooks::HookRegistry;
use tracing::info;

use crate::component::SurfaceComponent;
use crate::composer::SurfaceComposer;

/// Shortcode tags handled by the public surface.
pub const SHORTCODES: [(&str, &str); 3] = [
    ("rpr-recipe", "do_recipe_shortcode"),
    ("rpr-recipe-index", "do_recipe_index_shortcode"),
    ("rpr-tax-list", "do_taxlist_shortcode"),
];

pub struct PublicSurface {
    identity: PluginIdentity,
    public: Arc<SurfaceComponent>,
}

impl PublicSurface {
    pub fn new(identity: PluginIdentity) -> Self {
        Self {
            identity,
            public: SurfaceComponent::new(
                "public",
                &[
                    "enqueue_styles",
                    "enqueue_scripts",
                    "query_recipes",
                    "add_recipes_to_feed",
                    "get_recipe_excerpt",
                    "get_recipe_content",
                    "do_recipe_shortcode",
                    "do_recipe_index_shortcode",
                    "do_taxlist_shortcode",
                    "register_widgets",
                ],
            ),
        }
    }

    pub fn identity(&self) -> &PluginIdentity {
        &self.identity
    }
}

impl SurfaceComposer for PublicSurface {
    fn surface(&self) -> Surface {
        Surface::Public
    }

    fn compose(&self, hooks: &mut HookRegistry) -> Result<(), RprError> {
        let before = hooks.len();
        let public = &self.public;

        hooks.add_action("wp_enqueue_scripts", public.target("enqueue_styles"))?;
        hooks.add_action("wp_enqueue_scripts", public.target("enqueue_scripts"))?;

        // recipes on the home page and in the main feed
        hooks.add_action("pre_get_posts", public.target("query_recipes"))?;
        hooks.add_filter("request", public.target("add_recipes_to_feed"))?;

        hooks.add_filter("the_excerpt", public.target("get_recipe_excerpt"))?;
        hooks.add_filter("the_content", public.target("get_recipe_content"))?;

        for (tag, method) in SHORTCODES {
            hooks.add_shortcode(tag, public.target(method))?;
        }

        hooks.add_action("widgets_init", public.target("register_widgets"))?;

        info!(
            surface = %self.surface(),
            plugin = %self.identity.name,
            registrations = hooks.len() - before,
            "surface composed"
        );
        Ok(())
    }
}
