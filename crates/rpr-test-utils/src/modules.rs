// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted modules for exercising the module lifecycle.

use std::sync::{Arc, Mutex};

use rpr_core::{ModulePhase, PluginIdentity, RprError};
use rpr_hooks::{HookRegistry, HookTarget};
use rpr_plugin::{Module, ModuleFactory, ModuleManifest};
use serde_json::Value;

/// Shared log of `(module, phase)` calls.
pub type CallLog = Arc<Mutex<Vec<(String, ModulePhase)>>>;

fn noop(label: String) -> HookTarget {
    HookTarget::callback(label, |_: &[Value]| None)
}

fn log_call(log: &CallLog, module: &str, phase: ModulePhase) {
    if let Ok(mut calls) = log.lock() {
        calls.push((module.to_string(), phase));
    }
}

/// Factory backed by a closure, for modules that need captured state.
pub struct ScriptedFactory {
    manifest: ModuleManifest,
    make: Box<dyn Fn() -> Box<dyn Module> + Send + Sync>,
}

impl ScriptedFactory {
    pub fn new<F>(name: &str, make: F) -> Box<dyn ModuleFactory>
    where
        F: Fn() -> Box<dyn Module> + Send + Sync + 'static,
    {
        Box::new(Self {
            manifest: ModuleManifest::new(name, "0.0.0", "scripted test module"),
            make: Box::new(make),
        })
    }
}

impl ModuleFactory for ScriptedFactory {
    fn manifest(&self) -> &ModuleManifest {
        &self.manifest
    }

    fn create(&self, _identity: &PluginIdentity) -> Result<Box<dyn Module>, RprError> {
        Ok((self.make)())
    }
}

/// Implements only `define_admin_hooks`, adding one `admin_menu` action.
pub struct AdminOnlyModule {
    name: String,
}

impl AdminOnlyModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Module for AdminOnlyModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn define_admin_hooks(&self, hooks: &mut HookRegistry) -> Result<(), RprError> {
        hooks.add_action("admin_menu", noop(format!("{}::menu", self.name)))
    }
}

/// Fails in one chosen phase and records every phase it is called for.
///
/// In a hook phase it appends one registration before failing.
pub struct FailingModule {
    name: String,
    fail_in: ModulePhase,
    log: CallLog,
}

impl FailingModule {
    pub fn new(name: impl Into<String>, fail_in: ModulePhase, log: CallLog) -> Self {
        Self {
            name: name.into(),
            fail_in,
            log,
        }
    }

    fn step(&self, phase: ModulePhase, hooks: Option<&mut HookRegistry>) -> Result<(), RprError> {
        log_call(&self.log, &self.name, phase);
        if let Some(hooks) = hooks {
            hooks.add_action(
                format!("{}_{phase}", self.name.to_lowercase()),
                noop(format!("{}::{phase}", self.name)),
            )?;
        }
        if phase == self.fail_in {
            return Err(RprError::module_phase(&self.name, phase, "scripted failure"));
        }
        Ok(())
    }
}

impl Module for FailingModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn load_dependencies(&mut self) -> Result<(), RprError> {
        self.step(ModulePhase::LoadDependencies, None)
    }

    fn define_admin_hooks(&self, hooks: &mut HookRegistry) -> Result<(), RprError> {
        self.step(ModulePhase::DefineAdminHooks, Some(hooks))
    }

    fn define_main_hooks(&self, hooks: &mut HookRegistry) -> Result<(), RprError> {
        self.step(ModulePhase::DefineMainHooks, Some(hooks))
    }
}

/// Records every phase call and registers nothing.
pub struct ProbeModule {
    name: String,
    log: CallLog,
}

impl ProbeModule {
    pub fn new(name: impl Into<String>, log: CallLog) -> Self {
        Self {
            name: name.into(),
            log,
        }
    }
}

impl Module for ProbeModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn load_dependencies(&mut self) -> Result<(), RprError> {
        log_call(&self.log, &self.name, ModulePhase::LoadDependencies);
        Ok(())
    }

    fn define_admin_hooks(&self, _hooks: &mut HookRegistry) -> Result<(), RprError> {
        log_call(&self.log, &self.name, ModulePhase::DefineAdminHooks);
        Ok(())
    }

    fn define_main_hooks(&self, _hooks: &mut HookRegistry) -> Result<(), RprError> {
        log_call(&self.log, &self.name, ModulePhase::DefineMainHooks);
        Ok(())
    }
}

/// Snapshot of a call log.
pub fn calls(log: &CallLog) -> Vec<(String, ModulePhase)> {
    log.lock().map(|calls| calls.clone()).unwrap_or_default()
}
