// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Composing both surfaces from a loaded configuration.

use rpr_config::load_config_from_str;
use rpr_hooks::HookRegistry;
use rpr_surface::{AdminSurface, PublicSurface, SurfaceComposer};
use tracing_test::traced_test;

fn targets(hooks: &HookRegistry) -> Vec<String> {
    hooks
        .registrations()
        .iter()
        .map(|r| format!("{}:{}", r.event(), r.target()))
        .collect()
}

fn nutrition_registrations(toml: &str) -> usize {
    let config = load_config_from_str(toml).expect("valid config");
    let mut hooks = HookRegistry::new();
    AdminSurface::new(config.identity(), &config)
        .compose(&mut hooks)
        .unwrap();
    targets(&hooks)
        .iter()
        .filter(|t| t.ends_with("nutrition::metabox_nutrition"))
        .count()
}

#[test]
fn nutrition_flag_from_config() {
    let enabled = r#"
[options.rpr_options.metadata]
use_nutritional_data = true
"#;
    let disabled = r#"
[options.rpr_options.metadata]
use_nutritional_data = false
"#;
    assert_eq!(nutrition_registrations(enabled), 1);
    assert_eq!(nutrition_registrations(disabled), 0);
    assert_eq!(nutrition_registrations(""), 0);
}

#[test]
#[traced_test]
fn malformed_flag_is_logged_and_ignored() {
    let toml = r#"
[options.rpr_options.metadata]
use_nutritional_data = "sometimes"
"#;
    assert_eq!(nutrition_registrations(toml), 0);
    assert!(logs_contain("malformed option value, falling back to default"));
}

#[test]
fn surfaces_compose_in_either_order() {
    let config = load_config_from_str("").unwrap();
    let admin = AdminSurface::new(config.identity(), &config);
    let public = PublicSurface::new(config.identity());

    let mut admin_first = HookRegistry::new();
    admin.compose(&mut admin_first).unwrap();
    public.compose(&mut admin_first).unwrap();

    let mut public_first = HookRegistry::new();
    public.compose(&mut public_first).unwrap();
    admin.compose(&mut public_first).unwrap();

    let mut a = targets(&admin_first);
    let mut b = targets(&public_first);
    assert_eq!(a.len(), b.len());
    a.sort();
    b.sort();
    assert_eq!(a, b);
}
