// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The contract shared by the admin and public composers.

use rpr_core::{RprError, Surface};
use rpr_hooks::HookRegistry;

/// Builds the registrations of one surface.
///
/// A composer only appends to the registry it is given. It never reads
/// registrations back and never calls another composer, so the admin and
/// public composers may run in either order. Configuration is read when the
/// composer is constructed or inside `compose`, never when an event fires.
pub trait SurfaceComposer {
    /// Which surface the registrations belong to.
    fn surface(&self) -> Surface;

    /// Append this surface's registrations.
    fn compose(&self, hooks: &mut HookRegistry) -> Result<(), RprError>;
}
