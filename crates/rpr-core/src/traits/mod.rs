// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits consumed by the orchestration core.

pub mod options;

pub use options::{lookup_path, OptionSource};
