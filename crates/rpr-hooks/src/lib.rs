// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hook loader for the RecipePress orchestration core.
//!
//! Decouples "what should run" from "when the host fires it": surfaces and
//! modules append registrations to a [`HookRegistry`] during boot, the
//! runtime freezes it, and the frozen list is delivered to a
//! [`HookDispatcher`] owned by the host.

pub mod bus;
pub mod registry;
pub mod target;

pub use bus::HookBus;
pub use registry::{FrozenHooks, HookDispatcher, HookRegistry, Registration};
pub use target::{Component, HookCallback, HookTarget};
