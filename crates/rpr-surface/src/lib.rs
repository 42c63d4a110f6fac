// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Surface composers for the RecipePress orchestration core.
//!
//! Each surface appends its registrations into the shared
//! [`rpr_hooks::HookRegistry`]: the admin area, the public site, the recipe
//! post type and the translation loader.

pub mod admin;
pub mod component;
pub mod composer;
pub mod locale;
pub mod post_type;
pub mod public;

pub use admin::AdminSurface;
pub use component::SurfaceComponent;
pub use composer::SurfaceComposer;
pub use locale::Locale;
pub use post_type::{RecipePostType, RECIPE_POST_TYPE};
pub use public::PublicSurface;
