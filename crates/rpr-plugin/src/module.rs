// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The lifecycle contract every optional module satisfies.

use rpr_core::RprError;
use rpr_hooks::HookRegistry;

/// An optional, independently loadable feature unit.
///
/// Every phase has a no-op default, so a module only implements the phases
/// it cares about. A module that only touches the admin area implements
/// `define_admin_hooks` and contributes nothing to the public surface.
///
/// Phases run once each, in this order, during boot:
/// `load_dependencies`, `define_admin_hooks`, `define_main_hooks`.
pub trait Module: Send + Sync {
    /// Name the module is activated under.
    fn name(&self) -> &str;

    /// Prepare whatever the module's hooks need.
    fn load_dependencies(&mut self) -> Result<(), RprError> {
        Ok(())
    }

    /// Append admin-only registrations.
    fn define_admin_hooks(&self, _hooks: &mut HookRegistry) -> Result<(), RprError> {
        Ok(())
    }

    /// Append publicly served registrations.
    fn define_main_hooks(&self, _hooks: &mut HookRegistry) -> Result<(), RprError> {
        Ok(())
    }
}
