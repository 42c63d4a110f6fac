// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the RecipePress orchestration core.
//!
//! This crate provides the error type, the shared enums describing hooks,
//! surfaces and module phases, and the option lookup trait used by the
//! composers. Every other crate in the workspace builds on it.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::RprError;
pub use traits::OptionSource;
pub use types::{
    HookKind, ModulePhase, PluginIdentity, Surface, DEFAULT_ACCEPTED_ARGS, DEFAULT_PRIORITY,
};
