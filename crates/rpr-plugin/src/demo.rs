// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Demo` module: a minimal module that touches both surfaces.

use rpr_core::{ModulePhase, PluginIdentity, RprError};
use rpr_hooks::{HookRegistry, HookTarget};
use serde_json::{json, Value};
use tracing::debug;

use crate::manifest::ModuleManifest;
use crate::module::Module;

/// Shows an admin notice and appends a footer to recipe content.
pub struct DemoModule {
    identity: PluginIdentity,
    dependencies_loaded: bool,
}

impl DemoModule {
    pub const NAME: &'static str = "Demo";

    pub fn new(identity: PluginIdentity) -> Self {
        Self {
            identity,
            dependencies_loaded: false,
        }
    }

    /// Constructor used by the built-in catalog.
    pub fn boxed(identity: &PluginIdentity) -> Box<dyn Module> {
        Box::new(Self::new(identity.clone()))
    }

    pub fn manifest() -> ModuleManifest {
        ModuleManifest::new(Self::NAME, "1.0.0", "Demonstrates the module lifecycle")
            .with_author("RecipePress Contributors")
    }

    fn ensure_loaded(&self, phase: ModulePhase) -> Result<(), RprError> {
        if self.dependencies_loaded {
            Ok(())
        } else {
            Err(RprError::module_phase(
                Self::NAME,
                phase,
                "dependencies were not loaded",
            ))
        }
    }
}

impl Module for DemoModule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn load_dependencies(&mut self) -> Result<(), RprError> {
        debug!(module = Self::NAME, "loading dependencies");
        self.dependencies_loaded = true;
        Ok(())
    }

    fn define_admin_hooks(&self, hooks: &mut HookRegistry) -> Result<(), RprError> {
        self.ensure_loaded(ModulePhase::DefineAdminHooks)?;
        let notice = format!(
            "<div class=\"notice notice-info\"><p>{} {}: demo module active</p></div>",
            self.identity.name, self.identity.version
        );
        hooks.add_action(
            "admin_notices",
            HookTarget::callback("demo::notice", move |_: &[Value]| Some(json!(notice))),
        )
    }

    fn define_main_hooks(&self, hooks: &mut HookRegistry) -> Result<(), RprError> {
        self.ensure_loaded(ModulePhase::DefineMainHooks)?;
        hooks.add_filter_with(
            "the_content",
            HookTarget::callback("demo::content_footer", |args: &[Value]| {
                let content = args.first()?.as_str()?;
                Some(json!(format!("{content}\n<p class=\"rpr-demo\">Demo module</p>")))
            }),
            20,
            1,
        )
    }
}
