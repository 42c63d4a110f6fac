// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the RecipePress orchestration core.
//!
//! Provides layered TOML configuration with strict key checking,
//! environment variable overrides, miette diagnostics with typo
//! suggestions, and the option store the surface composers read their
//! switches from. Configuration is fully resolved before any surface is
//! composed.
//!
//! # Usage
//!
//! ```no_run
//! use rpr_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("Active modules: {:?}", config.modules.active);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::RprConfig;

/// Load configuration from the standard hierarchy and validate it.
pub fn load_and_validate() -> Result<RprConfig, Vec<ConfigError>> {
    finish(loader::load_config())
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<RprConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content))
}

/// Load configuration from an explicit file and validate it.
pub fn load_and_validate_path(path: &Path) -> Result<RprConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_path(path))
}

fn finish(loaded: Result<RprConfig, figment::Error>) -> Result<RprConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            tracing::debug!(
                plugin = %config.plugin.name,
                modules = config.modules.active.len(),
                "configuration loaded"
            );
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}
