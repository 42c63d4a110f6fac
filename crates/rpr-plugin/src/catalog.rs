// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Name-to-factory catalog of compiled-in modules.
//!
//! Module lookup is an explicit map populated at startup; activation names
//! are never turned into types at runtime.

use std::collections::BTreeMap;

use rpr_core::{PluginIdentity, RprError};
use tracing::warn;

use crate::demo::DemoModule;
use crate::manifest::ModuleManifest;
use crate::module::Module;

/// Creates module instances for one activation name.
pub trait ModuleFactory: Send + Sync {
    /// Metadata of the module this factory produces.
    fn manifest(&self) -> &ModuleManifest;

    /// Create a new module instance for the running plugin.
    fn create(&self, identity: &PluginIdentity) -> Result<Box<dyn Module>, RprError>;
}

/// Factory backed by a plain constructor function.
pub struct FnFactory {
    manifest: ModuleManifest,
    ctor: fn(&PluginIdentity) -> Box<dyn Module>,
}

impl FnFactory {
    pub fn new(manifest: ModuleManifest, ctor: fn(&PluginIdentity) -> Box<dyn Module>) -> Self {
        Self { manifest, ctor }
    }
}

impl ModuleFactory for FnFactory {
    fn manifest(&self) -> &ModuleManifest {
        &self.manifest
    }

    fn create(&self, identity: &PluginIdentity) -> Result<Box<dyn Module>, RprError> {
        Ok((self.ctor)(identity))
    }
}

/// Map from activation name to factory.
#[derive(Default)]
pub struct ModuleCatalog {
    factories: BTreeMap<String, Box<dyn ModuleFactory>>,
}

impl ModuleCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a factory under its manifest name, replacing any previous one.
    pub fn insert(&mut self, factory: Box<dyn ModuleFactory>) {
        let name = factory.manifest().name.clone();
        if self.factories.insert(name.clone(), factory).is_some() {
            warn!(module = %name, "replaced existing module factory");
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, factory: Box<dyn ModuleFactory>) -> Self {
        self.insert(factory);
        self
    }

    /// Factory for `name`, if the module is compiled in.
    pub fn resolve(&self, name: &str) -> Option<&dyn ModuleFactory> {
        self.factories.get(name).map(Box::as_ref)
    }

    /// Manifests of every known module, sorted by name.
    pub fn manifests(&self) -> Vec<&ModuleManifest> {
        self.factories.values().map(|f| f.manifest()).collect()
    }

    /// Modules whose name or description contains `query` (case-insensitive).
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&ModuleManifest> {
        let query = query.to_lowercase();
        self.manifests()
            .into_iter()
            .filter(|m| {
                m.name.to_lowercase().contains(&query)
                    || m.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for ModuleCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.factories.keys()).finish()
    }
}

/// Catalog of the modules shipped with the plugin.
pub fn builtin_catalog() -> ModuleCatalog {
    ModuleCatalog::new().with(Box::new(FnFactory::new(
        DemoModule::manifest(),
        DemoModule::boxed,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Module for Named {
        fn name(&self) -> &str {
            self.0
        }
    }

    fn print_module(_: &PluginIdentity) -> Box<dyn Module> {
        Box::new(Named("Print"))
    }

    fn named_factory(name: &str, description: &str) -> Box<dyn ModuleFactory> {
        Box::new(FnFactory::new(
            ModuleManifest::new(name, "0.1.0", description),
            print_module,
        ))
    }

    #[test]
    fn builtin_catalog_contains_demo() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 1);
        let factory = catalog.resolve("Demo").expect("demo is built in");
        let module = factory
            .create(&PluginIdentity::new("rpr", "1.0.0", "5"))
            .unwrap();
        assert_eq!(module.name(), "Demo");
    }

    #[test]
    fn resolve_is_exact_and_case_sensitive() {
        let catalog = builtin_catalog();
        assert!(catalog.resolve("demo").is_none());
        assert!(catalog.resolve("Ghost").is_none());
    }

    #[test]
    fn manifests_are_sorted_and_searchable() {
        let catalog = ModuleCatalog::new()
            .with(named_factory("Print", "Printer friendly recipe view"))
            .with(named_factory("Animals", "Shows animals"));

        let names: Vec<&str> = catalog.manifests().into_iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Animals", "Print"]);

        assert_eq!(catalog.search("PRINTER").len(), 1);
        assert_eq!(catalog.search("").len(), 2);
        assert!(catalog.search("nothing-like-this").is_empty());
    }

    #[test]
    fn insert_replaces_same_name() {
        let mut catalog = ModuleCatalog::new();
        catalog.insert(named_factory("Print", "first"));
        catalog.insert(named_factory("Print", "second"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.manifests()[0].description, "second");
    }
}
