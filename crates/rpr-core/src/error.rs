// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the RecipePress orchestration core.

use thiserror::Error;

/// The primary error type shared by the hook registry, module system, surfaces
/// and runtime.
#[derive(Debug, Error)]
pub enum RprError {
    /// Configuration errors (invalid TOML, failed validation, bad option values).
    #[error("configuration error: {0}")]
    Config(String),

    /// A registration was attempted with an empty event name.
    #[error("hook registration rejected: event name must not be empty")]
    EmptyEventName,

    /// A requested module has no factory in the catalog.
    #[error("module not found: {name}")]
    ModuleNotFound { name: String },

    /// A module failed while running one of its lifecycle phases.
    #[error("module `{module}` failed during {phase}: {message}")]
    ModulePhase {
        module: String,
        phase: String,
        message: String,
    },

    /// A boot transition was invoked out of sequence.
    #[error("boot transition out of order: expected {expected}, runtime is at {actual}")]
    OrderingViolation { expected: String, actual: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RprError {
    /// Shorthand for a module phase failure.
    pub fn module_phase(
        module: impl Into<String>,
        phase: impl std::fmt::Display,
        message: impl Into<String>,
    ) -> Self {
        RprError::ModulePhase {
            module: module.into(),
            phase: phase.to_string(),
            message: message.into(),
        }
    }
}
