// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boot orchestration for the RecipePress plugin.
//!
//! [`PluginRuntime`] walks the fixed boot sequence: post type, modules,
//! module dependencies, locale, admin hooks, public hooks. It then freezes
//! the hook registry and hands it to the host's
//! [`HookDispatcher`](rpr_hooks::HookDispatcher).

pub mod phase;
pub mod runtime;

pub use phase::BootPhase;
pub use runtime::PluginRuntime;
