// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registrations for the admin area.

use std::sync::Arc;

use rpr_core::{OptionSource, PluginIdentity, RprError, Surface};
use rpr_hooks::HookRegistry;
use tracing::{debug, info};

use crate::component::SurfaceComponent;
use crate::composer::SurfaceComposer;

/// Option namespace holding the plugin settings.
pub const OPTIONS_NAMESPACE: &str = "rpr_options";

/// Path of the switch that enables the nutrition meta box.
pub const NUTRITION_FLAG: [&str; 2] = ["metadata", "use_nutritional_data"];

/// Composes everything the admin area hooks into: assets, data migration,
/// demo data, the options page, recipe meta boxes, saving and the shortcode
/// editor buttons.
pub struct AdminSurface {
    identity: PluginIdentity,
    use_nutritional_data: bool,
    admin: Arc<SurfaceComponent>,
    migration: Arc<SurfaceComponent>,
    demo: Arc<SurfaceComponent>,
    general_meta: Arc<SurfaceComponent>,
    nutrition: Arc<SurfaceComponent>,
    ingredients: Arc<SurfaceComponent>,
    instructions: Arc<SurfaceComponent>,
    shortcodes: Arc<SurfaceComponent>,
}

impl AdminSurface {
    /// Resolve the options this surface depends on and build its components.
    ///
    /// The nutrition switch is read here, once. Later changes to the option
    /// store do not affect an already built surface.
    pub fn new(identity: PluginIdentity, options: &dyn OptionSource) -> Self {
        let use_nutritional_data = options.get_flag(OPTIONS_NAMESPACE, &NUTRITION_FLAG, false);
        debug!(use_nutritional_data, "admin surface options resolved");

        Self {
            identity,
            use_nutritional_data,
            admin: SurfaceComponent::new(
                "admin",
                &[
                    "enqueue_styles",
                    "enqueue_scripts",
                    "create_options",
                    "save_recipe",
                    "admin_notice_handler",
                ],
            ),
            migration: SurfaceComponent::new(
                "migration",
                &["check_migration", "rpr_do_migration", "notice_migration"],
            ),
            demo: SurfaceComponent::new("demo", &["do_install_base_options", "notice_demo"]),
            general_meta: SurfaceComponent::new(
                "general_meta",
                &[
                    "metabox_postimage",
                    "metabox_description",
                    "metabox_details",
                    "metabox_notes",
                ],
            ),
            nutrition: SurfaceComponent::new("nutrition", &["metabox_nutrition"]),
            ingredients: SurfaceComponent::new("ingredients", &["metabox_ingredients"]),
            instructions: SurfaceComponent::new("instructions", &["metabox_instructions"]),
            shortcodes: SurfaceComponent::new(
                "shortcodes",
                &[
                    "add_button_scr",
                    "load_in_admin_footer_scr",
                    "load_ajax_scripts_scr",
                    "process_ajax_scr",
                    "add_button_scl",
                    "load_in_admin_footer_scl",
                    "load_ajax_scripts_scl",
                ],
            ),
        }
    }

    pub fn identity(&self) -> &PluginIdentity {
        &self.identity
    }

    pub fn uses_nutritional_data(&self) -> bool {
        self.use_nutritional_data
    }

    fn compose_meta_boxes(&self, hooks: &mut HookRegistry) -> Result<(), RprError> {
        let meta = &self.general_meta;
        hooks.add_action("do_meta_boxes", meta.target("metabox_postimage"))?;
        hooks.add_action("do_meta_boxes", meta.target("metabox_description"))?;
        hooks.add_action("do_meta_boxes", meta.target("metabox_details"))?;

        if self.use_nutritional_data {
            hooks.add_action("do_meta_boxes", self.nutrition.target("metabox_nutrition"))?;
        }

        hooks.add_action("do_meta_boxes", self.ingredients.target("metabox_ingredients"))?;
        hooks.add_action("do_meta_boxes", self.instructions.target("metabox_instructions"))?;
        hooks.add_action("do_meta_boxes", meta.target("metabox_notes"))
    }

    fn compose_shortcode_buttons(&self, hooks: &mut HookRegistry) -> Result<(), RprError> {
        let sc = &self.shortcodes;
        // single recipe
        hooks.add_action("media_buttons", sc.target("add_button_scr"))?;
        hooks.add_action("in_admin_footer", sc.target("load_in_admin_footer_scr"))?;
        hooks.add_action("admin_enqueue_scripts", sc.target("load_ajax_scripts_scr"))?;
        hooks.add_action("wp_ajax_rpr_get_results", sc.target("process_ajax_scr"))?;
        // listings
        hooks.add_action("media_buttons", sc.target("add_button_scl"))?;
        hooks.add_action("in_admin_footer", sc.target("load_in_admin_footer_scl"))?;
        hooks.add_action("admin_enqueue_scripts", sc.target("load_ajax_scripts_scl"))
    }
}

impl SurfaceComposer for AdminSurface {
    fn surface(&self) -> Surface {
        Surface::Admin
    }

    fn compose(&self, hooks: &mut HookRegistry) -> Result<(), RprError> {
        let before = hooks.len();

        hooks.add_action("admin_enqueue_scripts", self.admin.target("enqueue_styles"))?;
        hooks.add_action("admin_enqueue_scripts", self.admin.target("enqueue_scripts"))?;

        hooks.add_action("admin_init", self.migration.target("check_migration"))?;
        hooks.add_action("admin_init", self.migration.target("rpr_do_migration"))?;
        hooks.add_action("admin_notices", self.migration.target("notice_migration"))?;

        hooks.add_action("admin_init", self.demo.target("do_install_base_options"))?;
        hooks.add_action("admin_notices", self.demo.target("notice_demo"))?;

        hooks.add_action("init", self.admin.target("create_options"))?;
        self.compose_meta_boxes(hooks)?;

        hooks.add_action_with("save_post", self.admin.target("save_recipe"), 10, 2)?;
        hooks.add_action("admin_notices", self.admin.target("admin_notice_handler"))?;

        self.compose_shortcode_buttons(hooks)?;

        info!(
            surface = %self.surface(),
            db_version = %self.identity.db_version,
            registrations = hooks.len() - before,
            "surface composed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    struct Flag(Option<Value>);

    impl OptionSource for Flag {
        fn get_option(&self, _namespace: &str, _path: &[&str]) -> Option<Value> {
            self.0.clone()
        }
    }

    fn compose_with(flag: Option<Value>) -> HookRegistry {
        let identity = PluginIdentity::new("recipepress-reloaded", "1.0.0", "5");
        let surface = AdminSurface::new(identity, &Flag(flag));
        let mut hooks = HookRegistry::new();
        surface.compose(&mut hooks).unwrap();
        hooks
    }

    fn nutrition_count(hooks: &HookRegistry) -> usize {
        hooks
            .registrations()
            .iter()
            .filter(|r| r.target().to_string() == "nutrition::metabox_nutrition")
            .count()
    }

    #[test]
    fn nutrition_meta_box_follows_the_flag() {
        assert_eq!(nutrition_count(&compose_with(None)), 0);
        assert_eq!(nutrition_count(&compose_with(Some(json!(false)))), 0);
        assert_eq!(nutrition_count(&compose_with(Some(json!(true)))), 1);
        assert_eq!(nutrition_count(&compose_with(Some(json!("1")))), 1);
    }

    #[test]
    fn malformed_flag_falls_back_to_disabled() {
        let hooks = compose_with(Some(json!({"unexpected": "shape"})));
        assert_eq!(nutrition_count(&hooks), 0);
    }

    #[test]
    fn meta_box_order_places_nutrition_after_details() {
        let hooks = compose_with(Some(json!(true)));
        let boxes: Vec<String> = hooks
            .registrations()
            .iter()
            .filter(|r| r.event() == "do_meta_boxes")
            .map(|r| r.target().to_string())
            .collect();
        assert_eq!(
            boxes,
            vec![
                "general_meta::metabox_postimage",
                "general_meta::metabox_description",
                "general_meta::metabox_details",
                "nutrition::metabox_nutrition",
                "ingredients::metabox_ingredients",
                "instructions::metabox_instructions",
                "general_meta::metabox_notes",
            ]
        );
    }

    #[test]
    fn save_post_takes_two_arguments() {
        let hooks = compose_with(None);
        let save: Vec<_> = hooks
            .registrations()
            .iter()
            .filter(|r| r.event() == "save_post")
            .collect();
        assert_eq!(save.len(), 1);
        assert_eq!(save[0].priority(), 10);
        assert_eq!(save[0].accepted_args(), 2);
    }

    #[test]
    fn registration_counts() {
        let hooks = compose_with(None);
        assert_eq!(hooks.len(), 23);
        assert_eq!(hooks.count_for("admin_enqueue_scripts"), 4);
        assert_eq!(hooks.count_for("admin_notices"), 3);
        assert_eq!(hooks.count_for("do_meta_boxes"), 6);
        assert_eq!(compose_with(Some(json!(true))).len(), 24);
    }
}
