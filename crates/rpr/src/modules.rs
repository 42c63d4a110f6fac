// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `rpr modules` command implementation.

use rpr_config::RprConfig;
use rpr_plugin::builtin_catalog;

/// List the compiled-in modules and whether the configuration activates them.
pub fn run_modules(config: &RprConfig, query: Option<&str>) {
    let catalog = builtin_catalog();
    let manifests = catalog.search(query.unwrap_or_default());

    if manifests.is_empty() {
        println!("no modules match");
    }
    for m in manifests {
        let active = config.modules.active.iter().any(|name| name == &m.name);
        println!(
            "{:<16} {:<8} {:<8} {}",
            m.name,
            m.version,
            if active { "active" } else { "inactive" },
            m.description
        );
    }

    for name in &config.modules.active {
        if catalog.resolve(name).is_none() {
            println!("{name:<16} {:<8} {:<8} not compiled in", "-", "missing");
        }
    }
}
