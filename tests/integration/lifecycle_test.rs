//! Integration tests for plugin activation and hook calls.

mod helpers;

use serde_json::json;

use dynasty_plugin::prelude::*;
use dynasty_plugin::PluginError;

fn full_host() -> helpers::TestHost {
    let mut host = helpers::TestHost::new()
        .with_manifest("econ", "economy")
        .with_manifest("dipl", "diplomacy")
        .with_manifest("example", "example");
    host.discover();
    host
}

#[test]
fn test_each_hook_reaches_only_its_plugin() {
    let mut host = full_host();
    host.manager.activate("econ").expect("activate econ");
    host.manager.activate("dipl").expect("activate dipl");

    let payload = hook_payload!({ "resource" => json!("gold"), "amount" => json!(10) });
    let results = host.manager.call_hook(well_known::ON_RESOURCE_CHANGE, &payload);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].plugin_id, "econ");
    assert_eq!(results[0].output, json!({ "resource": "gold", "change": 10 }));

    let payload = hook_payload!({
        "action" => json!("trade_pact"),
        "source_nation" => json!("Aurelia"),
        "target_nation" => json!("Borealis"),
    });
    let results = host.manager.call_hook(well_known::ON_DIPLOMATIC_ACTION, &payload);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].plugin_id, "dipl");
    assert_eq!(
        results[0].output,
        json!({ "action": "trade_pact", "source": "Aurelia", "target": "Borealis" })
    );
}

#[test]
fn test_turn_start_with_nothing_active_returns_nothing() {
    let host = full_host();
    let payload = HookPayload::new().with_int("turn_number", 1);
    assert!(host.manager.call_hook(well_known::ON_TURN_START, &payload).is_empty());
}

#[test]
fn test_reactivation_does_not_duplicate_responses() {
    let mut host = full_host();
    host.manager.activate("example").expect("first activation");
    host.manager.deactivate("example").expect("deactivation");
    host.manager.activate("example").expect("second activation");

    let payload = HookPayload::new().with_int("turn_number", 7);
    let results = host.manager.call_hook(well_known::ON_TURN_START, &payload);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].output, json!("Processed by ExamplePlugin"));
}

#[test]
fn test_deactivated_plugin_stops_answering() {
    let mut host = full_host();
    host.manager.activate("dipl").expect("activate");
    host.manager.deactivate("dipl").expect("deactivate");

    let payload = hook_payload!({
        "action" => json!("alliance"),
        "source_nation" => json!("Aurelia"),
        "target_nation" => json!("Borealis"),
    });
    assert!(host.manager.call_hook(well_known::ON_DIPLOMATIC_ACTION, &payload).is_empty());
    assert!(!host.manager.hook_registry().has_handlers(well_known::ON_DIPLOMATIC_ACTION));
}

#[test]
fn test_bad_arguments_fail_only_that_binding() {
    let mut host = full_host();
    host.manager.activate("econ").expect("activate");

    let payload = hook_payload!({ "resource" => json!("gold") });
    let outcome = host.manager.dispatch(well_known::ON_RESOURCE_CHANGE, &payload);
    assert!(outcome.results.is_empty());
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].plugin_id, "econ");
}

#[test]
fn test_lifecycle_misuse_is_reported() {
    let mut host = full_host();
    assert_eq!(
        host.manager.activate("missing"),
        Err(PluginError::NotFound { name: "missing".into() })
    );
    assert_eq!(
        host.manager.deactivate("econ"),
        Err(PluginError::NotActive { name: "econ".into() })
    );
    host.manager.activate("econ").expect("activate");
    assert_eq!(
        host.manager.activate("econ"),
        Err(PluginError::AlreadyActive { name: "econ".into() })
    );
}

#[test]
fn test_plugin_info_lists_metadata() {
    let mut host = full_host();
    host.manager.activate("econ").expect("activate");

    let info = host.manager.get_plugin_info();
    assert_eq!(info.len(), 3);

    let econ = &info["econ"];
    assert_eq!(econ.name, "EconomyPlugin");
    assert_eq!(econ.version, "2.1.0");
    assert_eq!(econ.author, "Jane Smith");
    assert!(econ.active);
    assert!(!info["dipl"].active);
}
