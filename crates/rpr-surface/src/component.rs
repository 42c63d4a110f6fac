// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named components exposing a fixed set of host-callable methods.

use std::sync::Arc;

use rpr_hooks::{Component, HookTarget};
use serde_json::Value;
use tracing::{trace, warn};

/// A component whose callable methods are known up front.
///
/// Feature logic (rendering, saving, migrations) lives behind the host. At
/// this layer a call records that it happened and hands the first argument
/// back, so filters leave the filtered value untouched.
#[derive(Debug, Clone)]
pub struct SurfaceComponent {
    name: String,
    methods: &'static [&'static str],
}

impl SurfaceComponent {
    pub fn new(name: impl Into<String>, methods: &'static [&'static str]) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            methods,
        })
    }

    pub fn methods(&self) -> &[&'static str] {
        self.methods
    }

    pub fn has_method(&self, method: &str) -> bool {
        self.methods.contains(&method)
    }

    /// Registration target for `method` on this component.
    pub fn target(self: &Arc<Self>, method: &str) -> HookTarget {
        debug_assert!(
            self.has_method(method),
            "{} has no method {method}",
            self.name
        );
        HookTarget::method(Arc::clone(self) as Arc<dyn Component>, method)
    }
}

impl Component for SurfaceComponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn call(&self, method: &str, args: &[Value]) -> Option<Value> {
        if !self.has_method(method) {
            warn!(component = %self.name, method, "unknown component method");
            return None;
        }
        trace!(component = %self.name, method, args = args.len(), "component method called");
        args.first().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_test::traced_test;

    #[test]
    fn known_method_passes_first_argument_through() {
        let public = SurfaceComponent::new("public", &["get_recipe_content"]);
        let target = public.target("get_recipe_content");
        assert_eq!(target.to_string(), "public::get_recipe_content");
        assert_eq!(
            target.invoke(&[json!("<p>Soup</p>"), json!(42)]),
            Some(json!("<p>Soup</p>"))
        );
        assert_eq!(target.invoke(&[]), None);
    }

    #[test]
    #[traced_test]
    fn unknown_method_is_logged() {
        let admin = SurfaceComponent::new("admin", &["save_recipe"]);
        assert_eq!(admin.call("drop_tables", &[json!(1)]), None);
        assert!(logs_contain("unknown component method"));
    }
}
