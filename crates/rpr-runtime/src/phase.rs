// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The linear boot sequence.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Where the runtime is in its boot sequence.
///
/// Phases only move forward, one step at a time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BootPhase {
    Constructed,
    PostTypeRegistered,
    ModulesLoaded,
    DependenciesLoaded,
    LocaleSet,
    AdminHooksComposed,
    PublicHooksComposed,
    Running,
}

impl BootPhase {
    /// The phase that follows this one. `Running` is terminal.
    pub fn next(self) -> Option<BootPhase> {
        use BootPhase::*;
        match self {
            Constructed => Some(PostTypeRegistered),
            PostTypeRegistered => Some(ModulesLoaded),
            ModulesLoaded => Some(DependenciesLoaded),
            DependenciesLoaded => Some(LocaleSet),
            LocaleSet => Some(AdminHooksComposed),
            AdminHooksComposed => Some(PublicHooksComposed),
            PublicHooksComposed => Some(Running),
            Running => None,
        }
    }

    /// True until the registry is frozen.
    pub fn is_composing(self) -> bool {
        self != BootPhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn next_walks_declaration_order() {
        let all: Vec<BootPhase> = BootPhase::iter().collect();
        for pair in all.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(BootPhase::Running.next(), None);
    }

    #[test]
    fn display_is_snake_case() {
        assert_eq!(BootPhase::PublicHooksComposed.to_string(), "public_hooks_composed");
        assert!(!BootPhase::Running.is_composing());
        assert!(BootPhase::Constructed.is_composing());
    }
}
