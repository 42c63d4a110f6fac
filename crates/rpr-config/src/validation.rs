// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use std::collections::HashSet;

use serde_json::Value;

use crate::diagnostic::ConfigError;
use crate::model::RprConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &RprConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let name = config.plugin.name.trim();
    if name.is_empty() {
        fail("plugin.name must not be empty".to_string());
    } else if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        fail(format!(
            "plugin.name `{name}` must be a slug (lowercase letters, digits, `-`, `_`)"
        ));
    }

    if let Err(e) = semver::Version::parse(&config.plugin.version) {
        fail(format!(
            "plugin.version `{}` is not a semantic version: {e}",
            config.plugin.version
        ));
    }

    if config.plugin.db_version.trim().is_empty() {
        fail("plugin.db_version must not be empty".to_string());
    }

    if !LOG_LEVELS.contains(&config.plugin.log_level.as_str()) {
        fail(format!(
            "plugin.log_level `{}` must be one of: {}",
            config.plugin.log_level,
            LOG_LEVELS.join(", ")
        ));
    }

    let mut seen = HashSet::new();
    for (i, module) in config.modules.active.iter().enumerate() {
        if module.trim().is_empty() {
            fail(format!("modules.active[{i}] must not be empty"));
        } else if !seen.insert(module.as_str()) {
            fail(format!("duplicate module `{module}` in modules.active"));
        }
    }

    for (namespace, value) in &config.options {
        if !matches!(value, Value::Object(_)) {
            fail(format!("options.{namespace} must be a table"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(config: &RprConfig) -> Vec<String> {
        validate_config(config)
            .unwrap_err()
            .into_iter()
            .map(|e| e.to_string())
            .collect()
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&RprConfig::default()).is_ok());
    }

    #[test]
    fn bad_version_fails_validation() {
        let mut config = RprConfig::default();
        config.plugin.version = "1.0".to_string();
        assert!(messages(&config)
            .iter()
            .any(|m| m.contains("not a semantic version")));
    }

    #[test]
    fn duplicate_and_empty_modules_fail_validation() {
        let mut config = RprConfig::default();
        config.modules.active = vec!["Demo".into(), "".into(), "Demo".into()];
        let msgs = messages(&config);
        assert!(msgs.iter().any(|m| m.contains("modules.active[1] must not be empty")));
        assert!(msgs.iter().any(|m| m.contains("duplicate module `Demo`")));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = RprConfig::default();
        config.plugin.name = "Recipe Press".to_string();
        config.plugin.db_version = " ".to_string();
        config.plugin.log_level = "loud".to_string();
        config
            .options
            .insert("rpr_options".to_string(), Value::Bool(true));

        let msgs = messages(&config);
        assert_eq!(msgs.len(), 4, "{msgs:?}");
        assert!(msgs.iter().any(|m| m.contains("must be a slug")));
        assert!(msgs.iter().any(|m| m.contains("options.rpr_options must be a table")));
    }

    #[test]
    fn empty_activation_list_is_valid() {
        let mut config = RprConfig::default();
        config.modules.active.clear();
        assert!(validate_config(&config).is_ok());
    }
}
