// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The top-level orchestrator.
//!
//! `PluginRuntime` owns the hook registry and the module registry. Each boot
//! step is a one-shot transition that must be called in [`BootPhase`] order.
//! Calling one out of order panics in debug builds; release builds log the
//! violation and return [`RprError::OrderingViolation`] without touching any
//! state.

use rpr_config::RprConfig;
use rpr_core::{PluginIdentity, RprError};
use rpr_hooks::{FrozenHooks, HookDispatcher, HookRegistry};
use rpr_plugin::{ModuleCatalog, ModuleRegistry, PhaseReport};
use rpr_surface::{AdminSurface, Locale, PublicSurface, RecipePostType, SurfaceComposer};
use tracing::{debug, error, info, warn};

use crate::phase::BootPhase;

/// Registry state: mutable while composing, shared read-only once running.
enum Hooks {
    Composing(HookRegistry),
    Frozen(FrozenHooks),
}

pub struct PluginRuntime {
    config: RprConfig,
    identity: PluginIdentity,
    catalog: ModuleCatalog,
    phase: BootPhase,
    hooks: Hooks,
    modules: ModuleRegistry,
    reports: Vec<PhaseReport>,
    /// Panic on an out-of-order transition instead of returning an error.
    strict_ordering: bool,
}

impl PluginRuntime {
    /// Create a runtime in the `Constructed` phase.
    ///
    /// `config` must be fully loaded; surfaces read options from it while
    /// composing.
    pub fn new(config: RprConfig, catalog: ModuleCatalog) -> Self {
        let identity = config.identity();
        info!(
            plugin = %identity.name,
            version = %identity.version,
            db_version = %identity.db_version,
            modules = catalog.len(),
            "plugin runtime constructed"
        );
        Self {
            config,
            identity,
            catalog,
            phase: BootPhase::Constructed,
            hooks: Hooks::Composing(HookRegistry::new()),
            modules: ModuleRegistry::new(),
            reports: Vec::new(),
            strict_ordering: cfg!(debug_assertions),
        }
    }

    /// Runtime over the modules compiled into this build.
    pub fn with_builtin_modules(config: RprConfig) -> Self {
        Self::new(config, rpr_plugin::builtin_catalog())
    }

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    pub fn identity(&self) -> &PluginIdentity {
        &self.identity
    }

    pub fn config(&self) -> &RprConfig {
        &self.config
    }

    pub fn modules(&self) -> &ModuleRegistry {
        &self.modules
    }

    /// Module phase outcomes, in the order the phases ran.
    pub fn module_reports(&self) -> &[PhaseReport] {
        &self.reports
    }

    /// Registrations appended so far. `None` once the registry is frozen.
    pub fn pending(&self) -> Option<&HookRegistry> {
        match &self.hooks {
            Hooks::Composing(registry) => Some(registry),
            Hooks::Frozen(_) => None,
        }
    }

    /// The frozen registrations in delivery order. `None` until `run`.
    pub fn hooks(&self) -> Option<&FrozenHooks> {
        match &self.hooks {
            Hooks::Frozen(frozen) => Some(frozen),
            Hooks::Composing(_) => None,
        }
    }

    pub fn register_post_type(&mut self) -> Result<(), RprError> {
        self.require_phase(BootPhase::Constructed)?;
        let post_type = RecipePostType::new(self.identity.clone());
        if let Err(e) = post_type.register(self.registry_mut()?) {
            error!(error = %e, "recipe post type registration failed");
        }
        self.advance()
    }

    pub fn load_modules(&mut self) -> Result<(), RprError> {
        self.require_phase(BootPhase::PostTypeRegistered)?;
        let active = self.config.modules.active.as_slice();
        self.modules = ModuleRegistry::load_all(&self.catalog, &self.identity, active);
        self.advance()
    }

    /// Run `load_dependencies` on every loaded module.
    ///
    /// Failures are logged and recorded; the failing module sits out the
    /// remaining phases while the rest of the boot continues.
    pub fn load_dependencies(&mut self) -> Result<(), RprError> {
        self.require_phase(BootPhase::ModulesLoaded)?;
        let report = self.modules.load_dependencies();
        self.record(report);
        self.advance()
    }

    pub fn set_locale(&mut self) -> Result<(), RprError> {
        self.require_phase(BootPhase::DependenciesLoaded)?;
        let locale = Locale::new(&self.identity);
        if let Err(e) = locale.register(self.registry_mut()?) {
            error!(error = %e, "locale registration failed");
        }
        self.advance()
    }

    /// Compose the admin surface, then let every module add admin hooks.
    pub fn define_admin_hooks(&mut self) -> Result<(), RprError> {
        self.require_phase(BootPhase::LocaleSet)?;
        let admin = AdminSurface::new(self.identity.clone(), &self.config);
        let report = {
            let Hooks::Composing(registry) = &mut self.hooks else {
                return Err(RprError::Internal("hook registry already frozen".into()));
            };
            compose_logged(&admin, registry);
            self.modules.define_admin_hooks(registry)
        };
        self.record(report);
        self.advance()
    }

    /// Compose the public surface, then let every module add public hooks.
    pub fn define_public_hooks(&mut self) -> Result<(), RprError> {
        self.require_phase(BootPhase::AdminHooksComposed)?;
        let public = PublicSurface::new(self.identity.clone());
        let report = {
            let Hooks::Composing(registry) = &mut self.hooks else {
                return Err(RprError::Internal("hook registry already frozen".into()));
            };
            compose_logged(&public, registry);
            self.modules.define_main_hooks(registry)
        };
        self.record(report);
        self.advance()
    }

    /// Run every boot transition in order.
    pub fn boot(&mut self) -> Result<(), RprError> {
        self.register_post_type()?;
        self.load_modules()?;
        self.load_dependencies()?;
        self.set_locale()?;
        self.define_admin_hooks()?;
        self.define_public_hooks()?;
        info!(
            registrations = self.pending().map_or(0, HookRegistry::len),
            modules = self.modules.len(),
            "boot complete"
        );
        Ok(())
    }

    /// Freeze the registry and hand it to the host dispatcher.
    ///
    /// The first call moves the runtime to `Running`. Later calls deliver
    /// the same frozen set again.
    pub fn run(&mut self, dispatcher: &mut dyn HookDispatcher) -> Result<usize, RprError> {
        if !self.phase.is_composing() {
            warn!("registry delivered more than once");
        } else {
            self.require_phase(BootPhase::PublicHooksComposed)?;
            let registry = std::mem::take(self.registry_mut()?);
            self.hooks = Hooks::Frozen(registry.freeze());
            self.advance()?;
        }

        match &self.hooks {
            Hooks::Frozen(frozen) => Ok(frozen.run(dispatcher)),
            Hooks::Composing(_) => Err(RprError::Internal("hook registry not frozen".into())),
        }
    }

    fn require_phase(&self, expected: BootPhase) -> Result<(), RprError> {
        if self.phase == expected {
            return Ok(());
        }
        error!(%expected, actual = %self.phase, "boot transition out of order");
        if self.strict_ordering {
            panic!(
                "boot transition out of order: expected {expected}, runtime is at {}",
                self.phase
            );
        }
        Err(RprError::OrderingViolation {
            expected: expected.to_string(),
            actual: self.phase.to_string(),
        })
    }

    fn advance(&mut self) -> Result<(), RprError> {
        let next = self
            .phase
            .next()
            .ok_or_else(|| RprError::Internal(format!("no phase after {}", self.phase)))?;
        debug!(from = %self.phase, to = %next, "boot phase advanced");
        self.phase = next;
        Ok(())
    }

    fn registry_mut(&mut self) -> Result<&mut HookRegistry, RprError> {
        match &mut self.hooks {
            Hooks::Composing(registry) => Ok(registry),
            Hooks::Frozen(_) => Err(RprError::Internal("hook registry already frozen".into())),
        }
    }

    fn record(&mut self, report: PhaseReport) {
        if !report.is_clean() {
            warn!(
                phase = %report.phase,
                failed = report.failures.len(),
                "module phase finished with failures"
            );
        }
        self.reports.push(report);
    }
}

fn compose_logged(composer: &dyn SurfaceComposer, registry: &mut HookRegistry) {
    if let Err(e) = composer.compose(registry) {
        error!(surface = %composer.surface(), error = %e, "surface composition failed");
    }
}

impl std::fmt::Debug for PluginRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRuntime")
            .field("plugin", &self.identity.name)
            .field("phase", &self.phase)
            .field("modules", &self.modules.names())
            .finish()
    }
}
