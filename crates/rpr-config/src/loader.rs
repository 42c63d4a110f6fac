// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./rpr.toml` > `~/.config/rpr/rpr.toml` > `/etc/rpr/rpr.toml`,
//! with environment variable overrides via the `RPR_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::RprConfig;

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/rpr/rpr.toml`
/// 3. `~/.config/rpr/rpr.toml`
/// 4. `./rpr.toml`
/// 5. `RPR_*` environment variables
pub fn load_config() -> Result<RprConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<RprConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RprConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from an explicit file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<RprConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RprConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The Figment used by [`load_config`], before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(RprConfig::default()))
        .merge(Toml::file("/etc/rpr/rpr.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("rpr/rpr.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("rpr.toml"))
        .merge(env_provider())
}

/// Environment provider with an explicit section mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `RPR_PLUGIN_DB_VERSION` must become `plugin.db_version`.
fn env_provider() -> Env {
    Env::prefixed("RPR_").map(|key| {
        key.as_str()
            .replacen("plugin_", "plugin.", 1)
            .replacen("modules_", "modules.", 1)
            .into()
    })
}
