// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `rpr boot` command implementation.
//!
//! Runs the full boot sequence against the in-memory host and prints the
//! registrations in the order the host received them.

use std::io::IsTerminal;

use rpr_config::RprConfig;
use rpr_core::{HookKind, RprError};
use rpr_hooks::{HookBus, Registration};
use rpr_runtime::{BootPhase, PluginRuntime};
use serde::Serialize;

/// Structured boot output for `--json` mode.
#[derive(Debug, Serialize)]
pub struct BootReport {
    pub plugin: String,
    pub version: String,
    pub db_version: String,
    pub phase: BootPhase,
    pub modules: Vec<ModuleLine>,
    pub registrations: Vec<RegistrationLine>,
}

#[derive(Debug, Serialize)]
pub struct ModuleLine {
    pub name: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct RegistrationLine {
    pub kind: HookKind,
    pub event: String,
    pub target: String,
    pub priority: i32,
    pub accepted_args: usize,
}

impl From<&Registration> for RegistrationLine {
    fn from(r: &Registration) -> Self {
        Self {
            kind: r.kind(),
            event: r.event().to_string(),
            target: r.target().to_string(),
            priority: r.priority(),
            accepted_args: r.accepted_args(),
        }
    }
}

/// Boot a runtime over the built-in modules and collect what it delivered.
pub fn boot_report(config: RprConfig) -> Result<BootReport, RprError> {
    let mut runtime = PluginRuntime::with_builtin_modules(config);
    runtime.boot()?;
    let mut host = HookBus::new();
    runtime.run(&mut host)?;

    let registrations = runtime
        .hooks()
        .map(|hooks| hooks.ordered().iter().map(RegistrationLine::from).collect())
        .unwrap_or_default();
    let modules = runtime
        .modules()
        .entries()
        .iter()
        .map(|e| ModuleLine {
            name: e.name.clone(),
            status: e.status.to_string(),
        })
        .collect();
    let identity = runtime.identity();

    Ok(BootReport {
        plugin: identity.name.clone(),
        version: identity.version.clone(),
        db_version: identity.db_version.clone(),
        phase: runtime.phase(),
        modules,
        registrations,
    })
}

/// Run the `rpr boot` command.
pub fn run_boot(config: RprConfig, json: bool, plain: bool) -> Result<(), RprError> {
    let report = boot_report(config)?;

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| RprError::Internal(format!("failed to serialize boot report: {e}")))?;
        println!("{out}");
        return Ok(());
    }

    let color = !plain && std::io::stdout().is_terminal();
    print_table(&report, color);
    Ok(())
}

fn print_table(report: &BootReport, color: bool) {
    println!();
    println!(
        "  {} {} (db {})",
        report.plugin, report.version, report.db_version
    );
    println!("  {}", "-".repeat(35));

    for m in &report.modules {
        println!("    module  {:<16} {}", m.name, m.status);
    }
    println!();

    let header = format!(
        "    {:<9} {:<26} {:>4} {:>4}  {}",
        "kind", "event", "prio", "args", "target"
    );
    if color {
        use colored::Colorize;
        println!("{}", header.bold());
    } else {
        println!("{header}");
    }
    for r in &report.registrations {
        println!(
            "    {:<9} {:<26} {:>4} {:>4}  {}",
            r.kind.to_string(),
            r.event,
            r.priority,
            r.accepted_args,
            r.target
        );
    }
    println!();
    println!("  {} registrations delivered", report.registrations.len());
}
