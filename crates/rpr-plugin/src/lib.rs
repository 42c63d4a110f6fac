// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Module lifecycle, module catalog and the registry of active modules.
//!
//! Optional feature units implement [`Module`]. They are compiled in and
//! listed in a [`ModuleCatalog`]; the activation list from configuration
//! picks which ones a [`ModuleRegistry`] instantiates.

pub mod catalog;
pub mod demo;
pub mod manifest;
pub mod module;
pub mod registry;

pub use catalog::{builtin_catalog, FnFactory, ModuleCatalog, ModuleFactory};
pub use demo::DemoModule;
pub use manifest::ModuleManifest;
pub use module::Module;
pub use registry::{ModuleEntry, ModuleRegistry, ModuleStatus, PhaseReport};
