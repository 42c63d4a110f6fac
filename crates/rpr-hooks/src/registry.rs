// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deferred hook registration.
//!
//! `HookRegistry` collects registrations during the composition phase
//! without touching the host. Once composition is over the registry is
//! frozen into `FrozenHooks`, an immutable, cheaply cloneable list in
//! delivery order that is handed to a [`HookDispatcher`].

use std::collections::HashMap;
use std::sync::Arc;

use rpr_core::{HookKind, RprError, DEFAULT_ACCEPTED_ARGS, DEFAULT_PRIORITY};
use tracing::{debug, info, warn};

use crate::target::HookTarget;

/// The host side of the registry: accepts registrations for later firing.
///
/// Invocation semantics, reentrancy and errors raised while a hook runs
/// belong to the implementor.
pub trait HookDispatcher {
    /// Accept one registration. Called in delivery order.
    fn register(&mut self, registration: &Registration);
}

/// One pending hook registration. Immutable once created.
#[derive(Debug, Clone)]
pub struct Registration {
    kind: HookKind,
    event: String,
    target: HookTarget,
    priority: i32,
    accepted_args: usize,
    seq: usize,
}

impl Registration {
    pub fn kind(&self) -> HookKind {
        self.kind
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn target(&self) -> &HookTarget {
        &self.target
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn accepted_args(&self) -> usize {
        self.accepted_args
    }

    /// Position in which the registration was appended.
    pub fn seq(&self) -> usize {
        self.seq
    }
}

/// Append-only collection of pending registrations.
#[derive(Debug, Default)]
pub struct HookRegistry {
    registrations: Vec<Registration>,
}

impl HookRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a registration.
    ///
    /// Duplicates are allowed. The only rejected input is an empty event
    /// name, which is reported to the caller.
    pub fn register(
        &mut self,
        kind: HookKind,
        event: impl Into<String>,
        target: HookTarget,
        priority: i32,
        accepted_args: usize,
    ) -> Result<(), RprError> {
        let event = event.into();
        if event.trim().is_empty() {
            warn!(%kind, %target, "rejected hook registration with empty event name");
            return Err(RprError::EmptyEventName);
        }

        debug!(%kind, %event, %target, priority, accepted_args, "hook registered");
        self.registrations.push(Registration {
            kind,
            event,
            target,
            priority,
            accepted_args,
            seq: self.registrations.len(),
        });
        Ok(())
    }

    /// Register an action with default priority and argument count.
    pub fn add_action(&mut self, event: impl Into<String>, target: HookTarget) -> Result<(), RprError> {
        self.add_action_with(event, target, DEFAULT_PRIORITY, DEFAULT_ACCEPTED_ARGS)
    }

    pub fn add_action_with(
        &mut self,
        event: impl Into<String>,
        target: HookTarget,
        priority: i32,
        accepted_args: usize,
    ) -> Result<(), RprError> {
        self.register(HookKind::Action, event, target, priority, accepted_args)
    }

    /// Register a filter with default priority and argument count.
    pub fn add_filter(&mut self, event: impl Into<String>, target: HookTarget) -> Result<(), RprError> {
        self.add_filter_with(event, target, DEFAULT_PRIORITY, DEFAULT_ACCEPTED_ARGS)
    }

    pub fn add_filter_with(
        &mut self,
        event: impl Into<String>,
        target: HookTarget,
        priority: i32,
        accepted_args: usize,
    ) -> Result<(), RprError> {
        self.register(HookKind::Filter, event, target, priority, accepted_args)
    }

    /// Register a shortcode handler for `tag`.
    pub fn add_shortcode(&mut self, tag: impl Into<String>, target: HookTarget) -> Result<(), RprError> {
        self.register(
            HookKind::Shortcode,
            tag,
            target,
            DEFAULT_PRIORITY,
            DEFAULT_ACCEPTED_ARGS,
        )
    }

    /// Registrations in insertion order.
    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// Number of registrations for `event`.
    pub fn count_for(&self, event: &str) -> usize {
        self.registrations.iter().filter(|r| r.event == event).count()
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// End composition and fix the delivery order.
    pub fn freeze(self) -> FrozenHooks {
        let ordered = delivery_order(self.registrations);
        info!(count = ordered.len(), "hook registry frozen");
        FrozenHooks {
            ordered: ordered.into(),
        }
    }
}

/// Group by event in order of first registration, then sort each group by
/// priority. `sort_by_key` is stable, so equal priorities keep insertion order.
fn delivery_order(mut registrations: Vec<Registration>) -> Vec<Registration> {
    let mut rank: HashMap<String, usize> = HashMap::new();
    for r in &registrations {
        let next = rank.len();
        rank.entry(r.event.clone()).or_insert(next);
    }
    registrations.sort_by_key(|r| (rank[&r.event], r.priority));
    registrations
}

/// Read-only registrations in delivery order, shareable across threads.
#[derive(Debug, Clone)]
pub struct FrozenHooks {
    ordered: Arc<[Registration]>,
}

impl FrozenHooks {
    /// All registrations in the order `run` delivers them.
    pub fn ordered(&self) -> &[Registration] {
        &self.ordered
    }

    /// Registrations grouped per distinct event.
    pub fn by_event(&self) -> impl Iterator<Item = (&str, &[Registration])> {
        self.ordered
            .chunk_by(|a, b| a.event == b.event)
            .map(|group| (group[0].event(), group))
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Hand every registration to `dispatcher` and return how many were sent.
    ///
    /// Delivering twice sends the identical set again. Nothing relies on it;
    /// the host should be fed once per boot.
    pub fn run(&self, dispatcher: &mut dyn HookDispatcher) -> usize {
        for (event, group) in self.by_event() {
            debug!(event, count = group.len(), "delivering hooks");
            for registration in group {
                dispatcher.register(registration);
            }
        }
        info!(count = self.ordered.len(), "hooks delivered to host dispatcher");
        self.ordered.len()
    }
}
