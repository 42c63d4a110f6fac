// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the registry, modules, surfaces and runtime.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Priority the host assigns when a registration does not name one.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Number of arguments the host passes when a registration does not name one.
pub const DEFAULT_ACCEPTED_ARGS: usize = 1;

/// Flavor of a hook registration.
///
/// Actions run for their side effects, filters transform and return a value.
/// Shortcodes are content tags the host expands. All three are stored and
/// ordered identically by the registry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HookKind {
    Action,
    Filter,
    Shortcode,
}

/// Registration context that decides which hooks are relevant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Surface {
    Admin,
    Public,
}

/// Lifecycle phase a module may take part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ModulePhase {
    LoadDependencies,
    DefineAdminHooks,
    DefineMainHooks,
}

/// Identity of the running plugin.
///
/// Handed by value to surfaces and modules when they are constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginIdentity {
    /// Unique slug of the plugin (e.g. "recipepress-reloaded").
    pub name: String,
    /// Plugin release version.
    pub version: String,
    /// Version of the stored data layout.
    pub db_version: String,
    /// Translation domain loaded on `plugins_loaded`.
    pub text_domain: String,
}

impl PluginIdentity {
    /// Build an identity whose text domain equals the plugin name.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        db_version: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            text_domain: name.clone(),
            name,
            version: version.into(),
            db_version: db_version.into(),
        }
    }
}
