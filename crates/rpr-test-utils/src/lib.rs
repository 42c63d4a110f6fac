// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for RecipePress integration tests.
//!
//! # Components
//!
//! - [`RecordingDispatcher`] - fake host that records delivered order
//! - [`AdminOnlyModule`], [`FailingModule`], [`ProbeModule`] - scripted modules
//! - [`TestHarness`] - runtime plus recording dispatcher built from TOML

pub mod dispatcher;
pub mod harness;
pub mod modules;

pub use dispatcher::{Delivered, RecordingDispatcher};
pub use harness::{TestHarness, TestHarnessBuilder};
pub use modules::{calls, AdminOnlyModule, CallLog, FailingModule, ProbeModule, ScriptedFactory};
