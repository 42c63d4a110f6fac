// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the RecipePress orchestration core.
//!
//! The fixed sections use `#[serde(deny_unknown_fields)]` so typos are
//! rejected at startup. The `[options]` tree is free-form: each namespace
//! holds whatever the option pages stored and is read through
//! [`OptionSource`].

use std::collections::BTreeMap;

use rpr_core::traits::{lookup_path, OptionSource};
use rpr_core::PluginIdentity;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RprConfig {
    /// Plugin identity and logging.
    #[serde(default)]
    pub plugin: PluginConfig,

    /// Optional feature modules.
    #[serde(default)]
    pub modules: ModulesConfig,

    /// Stored options keyed by namespace (e.g. `rpr_options`).
    #[serde(default)]
    pub options: BTreeMap<String, Value>,
}

impl RprConfig {
    /// Identity handed to surfaces and modules.
    pub fn identity(&self) -> PluginIdentity {
        PluginIdentity {
            name: self.plugin.name.clone(),
            version: self.plugin.version.clone(),
            db_version: self.plugin.db_version.clone(),
            text_domain: self
                .plugin
                .text_domain
                .clone()
                .unwrap_or_else(|| self.plugin.name.clone()),
        }
    }
}

impl OptionSource for RprConfig {
    fn get_option(&self, namespace: &str, path: &[&str]) -> Option<Value> {
        self.options
            .get(namespace)
            .and_then(|ns| lookup_path(ns, path))
            .cloned()
    }
}

/// Plugin identity configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PluginConfig {
    /// Unique slug of the plugin.
    #[serde(default = "default_plugin_name")]
    pub name: String,

    /// Release version (semver).
    #[serde(default = "default_version")]
    pub version: String,

    /// Version of the stored recipe data layout, compared by migrations.
    #[serde(default = "default_db_version")]
    pub db_version: String,

    /// Translation domain. Defaults to the plugin name.
    #[serde(default)]
    pub text_domain: Option<String>,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            name: default_plugin_name(),
            version: default_version(),
            db_version: default_db_version(),
            text_domain: None,
            log_level: default_log_level(),
        }
    }
}

fn default_plugin_name() -> String {
    "recipepress-reloaded".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_db_version() -> String {
    "5".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Module activation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModulesConfig {
    /// Names of modules to load, in load order.
    #[serde(default = "default_active_modules")]
    pub active: Vec<String>,
}

impl Default for ModulesConfig {
    fn default() -> Self {
        Self {
            active: default_active_modules(),
        }
    }
}

fn default_active_modules() -> Vec<String> {
    vec!["Demo".to_string()]
}
