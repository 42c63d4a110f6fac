// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of active modules.
//!
//! `ModuleRegistry` instantiates modules from the activation list through a
//! [`ModuleCatalog`] and applies lifecycle phases to them. Missing modules are
//! skipped. Phase failures are caught, logged and collected into a
//! [`PhaseReport`]; they never stop the remaining modules from running.

use std::collections::HashSet;

use rpr_core::{ModulePhase, PluginIdentity, RprError};
use rpr_hooks::HookRegistry;
use tracing::{debug, error, info, warn};

use crate::catalog::ModuleCatalog;
use crate::module::Module;

/// Status of a loaded module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleStatus {
    /// Module takes part in every remaining phase.
    Active,
    /// `load_dependencies` failed; later phases skip the module.
    Failed(String),
}

impl std::fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModuleStatus::Active => write!(f, "active"),
            ModuleStatus::Failed(reason) => write!(f, "failed ({reason})"),
        }
    }
}

/// A loaded module together with its status.
pub struct ModuleEntry {
    /// The activation-list name the module was loaded under.
    pub name: String,
    pub module: Box<dyn Module>,
    pub status: ModuleStatus,
}

impl std::fmt::Debug for ModuleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleEntry")
            .field("name", &self.name)
            .field("status", &self.status)
            .finish()
    }
}

/// Outcome of applying one phase to every module.
#[derive(Debug)]
pub struct PhaseReport {
    pub phase: ModulePhase,
    /// Modules the phase was called on.
    pub ran: usize,
    /// Modules passed over because an earlier phase failed.
    pub skipped: usize,
    /// Errors raised by individual modules, in activation order.
    pub failures: Vec<RprError>,
}

impl PhaseReport {
    fn new(phase: ModulePhase) -> Self {
        Self {
            phase,
            ran: 0,
            skipped: 0,
            failures: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Active modules in activation-list order, unique by name.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    entries: Vec<ModuleEntry>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiate one module per resolvable name in `names`.
    ///
    /// Unknown names and names already loaded are logged and skipped. A
    /// factory that fails to construct its module is treated like a missing
    /// module.
    pub fn load_all<S: AsRef<str>>(
        catalog: &ModuleCatalog,
        identity: &PluginIdentity,
        names: &[S],
    ) -> Self {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(names.len());

        for name in names.iter().map(AsRef::as_ref) {
            if !seen.insert(name) {
                warn!(module = name, "duplicate module in activation list, skipping");
                continue;
            }
            let Some(factory) = catalog.resolve(name) else {
                let e = RprError::ModuleNotFound { name: name.to_string() };
                warn!(module = name, error = %e, "module not found in catalog, skipping");
                continue;
            };
            match factory.create(identity) {
                Ok(module) => {
                    if module.name() != name {
                        warn!(
                            module = name,
                            reported = module.name(),
                            "module reports a different name than its catalog entry"
                        );
                    }
                    debug!(module = name, "module instantiated");
                    entries.push(ModuleEntry {
                        name: name.to_string(),
                        module,
                        status: ModuleStatus::Active,
                    });
                }
                Err(e) => {
                    warn!(module = name, error = %e, "module factory failed, skipping");
                }
            }
        }

        info!(loaded = entries.len(), requested = names.len(), "modules loaded");
        Self { entries }
    }

    /// Apply `phase` to every active module in order.
    ///
    /// `hooks` is only written by the two hook-defining phases. A failing
    /// `load_dependencies` marks the module failed; registrations a module
    /// appended before failing in a hook phase are left in place.
    pub fn for_each(&mut self, phase: ModulePhase, hooks: &mut HookRegistry) -> PhaseReport {
        let mut report = PhaseReport::new(phase);

        for entry in &mut self.entries {
            if entry.status != ModuleStatus::Active {
                report.skipped += 1;
                continue;
            }
            let name = entry.name.as_str();
            let result = match phase {
                ModulePhase::LoadDependencies => entry.module.load_dependencies(),
                ModulePhase::DefineAdminHooks => entry.module.define_admin_hooks(hooks),
                ModulePhase::DefineMainHooks => entry.module.define_main_hooks(hooks),
            };
            report.ran += 1;

            if let Err(e) = result {
                error!(module = name, %phase, error = %e, "module phase failed, continuing");
                if phase == ModulePhase::LoadDependencies {
                    entry.status = ModuleStatus::Failed(e.to_string());
                }
                report.failures.push(e);
            }
        }

        debug!(
            %phase,
            ran = report.ran,
            skipped = report.skipped,
            failed = report.failures.len(),
            "module phase complete"
        );
        report
    }

    pub fn load_dependencies(&mut self) -> PhaseReport {
        // load_dependencies never touches hooks
        self.for_each(ModulePhase::LoadDependencies, &mut HookRegistry::new())
    }

    pub fn define_admin_hooks(&mut self, hooks: &mut HookRegistry) -> PhaseReport {
        self.for_each(ModulePhase::DefineAdminHooks, hooks)
    }

    pub fn define_main_hooks(&mut self, hooks: &mut HookRegistry) -> PhaseReport {
        self.for_each(ModulePhase::DefineMainHooks, hooks)
    }

    /// Look up a module by name.
    pub fn get(&self, name: &str) -> Option<&dyn Module> {
        self.entry(name).map(|e| e.module.as_ref())
    }

    pub fn status(&self, name: &str) -> Option<&ModuleStatus> {
        self.entry(name).map(|e| &e.status)
    }

    /// Module names in activation order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn entries(&self) -> &[ModuleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, name: &str) -> Option<&ModuleEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}
