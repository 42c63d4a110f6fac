// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minimal in-memory host dispatcher.
//!
//! Stands in for the real host event engine when the core runs outside of
//! it (the `rpr` binary, integration tests). Registrations fire in
//! priority order, ties in arrival order, and each target receives at most
//! `accepted_args` arguments.

use std::collections::HashMap;

use rpr_core::HookKind;
use serde_json::Value;
use tracing::trace;

use crate::registry::{HookDispatcher, Registration};

#[derive(Debug, Default)]
pub struct HookBus {
    hooks: HashMap<String, Vec<Registration>>,
}

impl HookBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire an action. Returns how many targets ran.
    pub fn do_action(&self, event: &str, args: &[Value]) -> usize {
        let mut ran = 0;
        for r in self.callables(event) {
            trace!(event, target = %r.target(), "running action");
            r.target().invoke(truncate(args, r.accepted_args()));
            ran += 1;
        }
        ran
    }

    /// Pass `value` through every filter on `event`.
    ///
    /// The filtered value is always the first argument, followed by `extra`.
    /// A target returning `None` leaves the value as it was.
    pub fn apply_filters(&self, event: &str, value: Value, extra: &[Value]) -> Value {
        let mut current = value;
        for r in self.callables(event) {
            let mut args = Vec::with_capacity(extra.len() + 1);
            args.push(current.clone());
            args.extend_from_slice(extra);
            trace!(event, target = %r.target(), "applying filter");
            if let Some(next) = r.target().invoke(truncate(&args, r.accepted_args())) {
                current = next;
            }
        }
        current
    }

    /// Expand shortcode `tag`. The most recent handler for a tag wins.
    pub fn do_shortcode(&self, tag: &str, attrs: &[Value]) -> Option<Value> {
        self.hooks
            .get(tag)?
            .iter()
            .filter(|r| r.kind() == HookKind::Shortcode)
            .max_by_key(|r| r.seq())
            .and_then(|r| r.target().invoke(attrs))
    }

    /// Number of registrations held for `event`.
    pub fn registered(&self, event: &str) -> usize {
        self.hooks.get(event).map_or(0, Vec::len)
    }

    /// Registrations held for `event`, in firing order.
    pub fn registrations(&self, event: &str) -> &[Registration] {
        self.hooks.get(event).map(Vec::as_slice).unwrap_or_default()
    }

    fn callables<'a>(&'a self, event: &str) -> impl Iterator<Item = &'a Registration> + 'a {
        self.registrations(event)
            .iter()
            .filter(|r| r.kind() != HookKind::Shortcode)
    }
}

impl HookDispatcher for HookBus {
    fn register(&mut self, registration: &Registration) {
        let list = self.hooks.entry(registration.event().to_string()).or_default();
        let at = list.partition_point(|r| r.priority() <= registration.priority());
        list.insert(at, registration.clone());
    }
}

fn truncate(args: &[Value], accepted: usize) -> &[Value] {
    &args[..args.len().min(accepted)]
}
