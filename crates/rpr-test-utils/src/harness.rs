// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end boot tests.
//!
//! `TestHarness` assembles a `PluginRuntime` from a TOML snippet and a
//! module catalog, and pairs it with a [`RecordingDispatcher`] standing in
//! for the host.

use rpr_config::{load_and_validate_str, RprConfig};
use rpr_core::RprError;
use rpr_plugin::{builtin_catalog, ModuleCatalog, ModuleFactory};
use rpr_runtime::PluginRuntime;

use crate::dispatcher::RecordingDispatcher;

/// Builder for a boot environment.
pub struct TestHarnessBuilder {
    config_toml: String,
    catalog: ModuleCatalog,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            config_toml: String::new(),
            catalog: builtin_catalog(),
        }
    }

    /// Configuration to boot with. Empty means compiled defaults.
    pub fn with_config(mut self, toml: &str) -> Self {
        self.config_toml = toml.to_string();
        self
    }

    /// Set `[modules] active` without writing TOML.
    pub fn with_active_modules(mut self, names: &[&str]) -> Self {
        let quoted: Vec<String> = names.iter().map(|n| format!("{n:?}")).collect();
        self.config_toml
            .push_str(&format!("\n[modules]\nactive = [{}]\n", quoted.join(", ")));
        self
    }

    /// Add a factory to the catalog.
    pub fn with_module(mut self, factory: Box<dyn ModuleFactory>) -> Self {
        self.catalog.insert(factory);
        self
    }

    /// Start from an empty catalog instead of the built-in one.
    pub fn without_builtin_modules(mut self) -> Self {
        self.catalog = ModuleCatalog::new();
        self
    }

    pub fn build(self) -> Result<TestHarness, RprError> {
        let config: RprConfig = load_and_validate_str(&self.config_toml).map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            RprError::Config(messages.join("; "))
        })?;
        Ok(TestHarness {
            runtime: PluginRuntime::new(config, self.catalog),
            dispatcher: RecordingDispatcher::new(),
        })
    }
}

/// A runtime plus the fake host it delivers to.
pub struct TestHarness {
    pub runtime: PluginRuntime,
    pub dispatcher: RecordingDispatcher,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Boot with defaults and the built-in catalog.
    pub fn booted() -> Result<TestHarness, RprError> {
        let mut harness = Self::builder().build()?;
        harness.runtime.boot()?;
        Ok(harness)
    }

    /// Deliver the registry to the recording dispatcher.
    pub fn run(&mut self) -> Result<usize, RprError> {
        self.dispatcher.begin_batch();
        self.runtime.run(&mut self.dispatcher)
    }

    /// Boot and deliver in one go.
    pub fn boot_and_run(&mut self) -> Result<usize, RprError> {
        self.runtime.boot()?;
        self.run()
    }
}
