// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fake host dispatcher that records what it was handed.

use rpr_core::HookKind;
use rpr_hooks::{HookDispatcher, Registration};
use serde::Serialize;

/// One registration as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delivered {
    pub kind: HookKind,
    pub event: String,
    pub target: String,
    pub priority: i32,
    pub accepted_args: usize,
    pub seq: usize,
}

impl From<&Registration> for Delivered {
    fn from(r: &Registration) -> Self {
        Self {
            kind: r.kind(),
            event: r.event().to_string(),
            target: r.target().to_string(),
            priority: r.priority(),
            accepted_args: r.accepted_args(),
            seq: r.seq(),
        }
    }
}

/// Dispatcher that stores every registration in delivery order.
///
/// Each `run` is kept as its own batch so repeated deliveries can be
/// compared.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    delivered: Vec<Delivered>,
    batches: Vec<usize>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the start of a new delivery.
    pub fn begin_batch(&mut self) {
        self.batches.push(self.delivered.len());
    }

    /// Everything recorded so far, across all batches.
    pub fn delivered(&self) -> &[Delivered] {
        &self.delivered
    }

    /// Recorded registrations split per batch.
    pub fn batches(&self) -> Vec<&[Delivered]> {
        let mut bounds = self.batches.clone();
        if bounds.first() != Some(&0) {
            bounds.insert(0, 0);
        }
        bounds.push(self.delivered.len());
        bounds
            .windows(2)
            .map(|w| &self.delivered[w[0]..w[1]])
            .filter(|batch| !batch.is_empty())
            .collect()
    }

    /// Targets registered for `event`, in delivery order.
    pub fn targets_for(&self, event: &str) -> Vec<&str> {
        self.delivered
            .iter()
            .filter(|d| d.event == event)
            .map(|d| d.target.as_str())
            .collect()
    }

    /// Distinct events in the order they were first delivered.
    pub fn events(&self) -> Vec<&str> {
        let mut events: Vec<&str> = Vec::new();
        for d in &self.delivered {
            if !events.contains(&d.event.as_str()) {
                events.push(&d.event);
            }
        }
        events
    }

    pub fn len(&self) -> usize {
        self.delivered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delivered.is_empty()
    }
}

impl HookDispatcher for RecordingDispatcher {
    fn register(&mut self, registration: &Registration) {
        self.delivered.push(Delivered::from(registration));
    }
}
