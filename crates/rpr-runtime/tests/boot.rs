// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end boot tests against a recording host dispatcher.

use std::sync::{Arc, Mutex};
use std::thread;

use rpr_core::ModulePhase;
use rpr_plugin::ModuleStatus;
use rpr_runtime::BootPhase;
use rpr_test_utils::{
    calls, AdminOnlyModule, CallLog, FailingModule, ProbeModule, ScriptedFactory, TestHarness,
};
use tracing_test::traced_test;

fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

#[test]
fn default_boot_loads_demo_and_delivers_everything() {
    let mut harness = TestHarness::builder().build().unwrap();
    let delivered = harness.boot_and_run().unwrap();

    assert_eq!(harness.runtime.phase(), BootPhase::Running);
    assert_eq!(harness.runtime.modules().names(), vec!["Demo"]);
    assert_eq!(delivered, harness.dispatcher.len());
    // post type + locale + 23 admin + 10 public + 2 from Demo
    assert_eq!(delivered, 37);
    assert_eq!(
        harness.dispatcher.targets_for("the_content"),
        vec!["public::get_recipe_content", "closure:demo::content_footer"]
    );
}

#[test]
#[traced_test]
fn missing_module_is_skipped_without_error() {
    let mut harness = TestHarness::builder()
        .with_active_modules(&["Demo", "Ghost"])
        .build()
        .unwrap();
    harness.boot_and_run().unwrap();

    assert_eq!(harness.runtime.modules().len(), 1);
    assert_eq!(harness.runtime.modules().names(), vec!["Demo"]);
    assert!(logs_contain("module not found in catalog, skipping"));
}

#[test]
fn modules_keep_activation_order() {
    let log = call_log();
    let (a, b) = (Arc::clone(&log), Arc::clone(&log));
    let mut harness = TestHarness::builder()
        .with_module(ScriptedFactory::new("Zeta", move || {
            Box::new(ProbeModule::new("Zeta", Arc::clone(&a)))
        }))
        .with_module(ScriptedFactory::new("Alpha", move || {
            Box::new(ProbeModule::new("Alpha", Arc::clone(&b)))
        }))
        .with_active_modules(&["Zeta", "Demo", "Alpha"])
        .build()
        .unwrap();
    harness.boot_and_run().unwrap();

    assert_eq!(harness.runtime.modules().names(), vec!["Zeta", "Demo", "Alpha"]);
    let order: Vec<(String, ModulePhase)> = calls(&log);
    assert_eq!(
        order,
        vec![
            ("Zeta".to_string(), ModulePhase::LoadDependencies),
            ("Alpha".to_string(), ModulePhase::LoadDependencies),
            ("Zeta".to_string(), ModulePhase::DefineAdminHooks),
            ("Alpha".to_string(), ModulePhase::DefineAdminHooks),
            ("Zeta".to_string(), ModulePhase::DefineMainHooks),
            ("Alpha".to_string(), ModulePhase::DefineMainHooks),
        ]
    );
}

#[test]
fn nutrition_meta_box_is_conditional() {
    let count = |flag: &str| {
        let toml = format!("[options.rpr_options.metadata]\nuse_nutritional_data = {flag}\n");
        let mut harness = TestHarness::builder().with_config(&toml).build().unwrap();
        harness.boot_and_run().unwrap();
        harness
            .dispatcher
            .targets_for("do_meta_boxes")
            .into_iter()
            .filter(|t| *t == "nutrition::metabox_nutrition")
            .count()
    };
    assert_eq!(count("false"), 0);
    assert_eq!(count("true"), 1);
}

#[test]
fn admin_only_module_adds_nothing_publicly() {
    let mut harness = TestHarness::builder()
        .without_builtin_modules()
        .with_module(ScriptedFactory::new("AdminOnly", || {
            Box::new(AdminOnlyModule::new("AdminOnly"))
        }))
        .with_active_modules(&["AdminOnly"])
        .build()
        .unwrap();

    harness.runtime.register_post_type().unwrap();
    harness.runtime.load_modules().unwrap();
    harness.runtime.load_dependencies().unwrap();
    harness.runtime.set_locale().unwrap();
    harness.runtime.define_admin_hooks().unwrap();
    let after_admin = harness.runtime.pending().unwrap().len();
    harness.runtime.define_public_hooks().unwrap();
    let after_public = harness.runtime.pending().unwrap().len();

    // only the public surface itself contributed
    assert_eq!(after_public - after_admin, 10);
    assert!(harness.runtime.module_reports().iter().all(|r| r.is_clean()));
    assert_eq!(harness.runtime.pending().unwrap().count_for("admin_menu"), 1);
}

#[test]
#[traced_test]
fn failing_hook_phase_does_not_stop_later_modules() {
    let log = call_log();
    let (a, b) = (Arc::clone(&log), Arc::clone(&log));
    let mut harness = TestHarness::builder()
        .with_module(ScriptedFactory::new("Flaky", move || {
            Box::new(FailingModule::new(
                "Flaky",
                ModulePhase::DefineAdminHooks,
                Arc::clone(&a),
            ))
        }))
        .with_module(ScriptedFactory::new("Probe", move || {
            Box::new(ProbeModule::new("Probe", Arc::clone(&b)))
        }))
        .with_active_modules(&["Flaky", "Probe"])
        .build()
        .unwrap();
    harness.boot_and_run().unwrap();

    let seen = calls(&log);
    assert!(seen.contains(&("Probe".to_string(), ModulePhase::DefineAdminHooks)));
    // admin failure does not disable the module
    assert!(seen.contains(&("Flaky".to_string(), ModulePhase::DefineMainHooks)));
    assert_eq!(
        harness.runtime.modules().status("Flaky"),
        Some(&ModuleStatus::Active)
    );
    // registration appended before the failure is kept
    assert_eq!(harness.dispatcher.targets_for("flaky_define_admin_hooks").len(), 1);
    assert!(logs_contain("module phase failed, continuing"));
}

#[test]
fn failed_dependencies_exclude_module_from_hook_phases() {
    let log = call_log();
    let a = Arc::clone(&log);
    let mut harness = TestHarness::builder()
        .with_module(ScriptedFactory::new("Broken", move || {
            Box::new(FailingModule::new(
                "Broken",
                ModulePhase::LoadDependencies,
                Arc::clone(&a),
            ))
        }))
        .with_active_modules(&["Broken", "Demo"])
        .build()
        .unwrap();
    harness.boot_and_run().unwrap();

    assert_eq!(
        calls(&log),
        vec![("Broken".to_string(), ModulePhase::LoadDependencies)]
    );
    assert!(matches!(
        harness.runtime.modules().status("Broken"),
        Some(ModuleStatus::Failed(_))
    ));
    // Demo still boots
    assert_eq!(harness.dispatcher.targets_for("admin_notices").len(), 4);

    let first = &harness.runtime.module_reports()[0];
    assert_eq!(first.phase, ModulePhase::LoadDependencies);
    assert_eq!(first.failures.len(), 1);
    assert!(harness.runtime.module_reports()[1..].iter().all(|r| r.skipped == 1));
}

#[test]
fn delivery_groups_events_and_orders_by_priority() {
    let mut harness = TestHarness::builder().build().unwrap();
    harness.boot_and_run().unwrap();
    let delivered = harness.dispatcher.delivered();

    // each event's registrations are contiguous
    let events = harness.dispatcher.events();
    let mut runs: Vec<&str> = Vec::new();
    for d in delivered {
        if runs.last() != Some(&d.event.as_str()) {
            runs.push(&d.event);
        }
    }
    assert_eq!(runs, events);

    // first event registered is the post type's `init`
    assert_eq!(events[0], "init");
    assert_eq!(
        harness.dispatcher.targets_for("init"),
        vec!["recipe_post_type::register_post_type", "admin::create_options"]
    );

    for event in &events {
        let group: Vec<_> = delivered.iter().filter(|d| d.event == *event).collect();
        for pair in group.windows(2) {
            assert!(
                (pair[0].priority, pair[0].seq) < (pair[1].priority, pair[1].seq),
                "{event} out of order"
            );
        }
    }
}

#[test]
fn running_twice_redelivers_identical_set() {
    let mut harness = TestHarness::booted().unwrap();
    let first = harness.run().unwrap();
    let second = harness.run().unwrap();
    assert_eq!(first, second);

    let batches = harness.dispatcher.batches();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0], batches[1]);
    assert_eq!(harness.runtime.phase(), BootPhase::Running);
}

#[test]
fn frozen_hooks_are_read_from_many_threads() {
    let mut harness = TestHarness::booted().unwrap();
    let total = harness.run().unwrap();
    let frozen = harness.runtime.hooks().cloned().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let hooks = frozen.clone();
            thread::spawn(move || hooks.by_event().map(|(_, g)| g.len()).sum::<usize>())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), total);
    }
}

#[test]
fn invalid_config_is_reported_by_builder() {
    let err = TestHarness::builder()
        .with_active_modules(&["Demo", "Demo"])
        .build()
        .err()
        .expect("duplicate modules are rejected");
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn host_can_fire_delivered_hooks() {
    use rpr_hooks::HookBus;
    use serde_json::json;

    let mut harness = TestHarness::booted().unwrap();
    let mut bus = HookBus::new();
    harness.runtime.run(&mut bus).unwrap();

    let content = bus.apply_filters("the_content", json!("<p>Pancakes</p>"), &[]);
    let content = content.as_str().unwrap();
    assert!(content.starts_with("<p>Pancakes</p>"));
    assert!(content.ends_with("Demo module</p>"));
    assert_eq!(
        bus.do_shortcode("rpr-recipe", &[json!({"id": 7})]),
        Some(json!({"id": 7}))
    );
}
