//! Integration tests for plugin discovery.

mod helpers;

use dynasty_plugin::PluginError;

#[test]
fn test_broken_manifest_does_not_stop_discovery() {
    let mut host = helpers::TestHost::new()
        .with_manifest("good", "example")
        .with_file("broken.toml", "[DynastyPlugin\nkind = ");

    let report = host.discover();

    assert_eq!(report.loaded, vec!["good".to_string()]);
    assert_eq!(report.failed.len(), 1);
    assert!(helpers::mentions(&report.failed, "broken"));
    assert_eq!(host.manager.registered_plugins(), vec!["good".to_string()]);
}

#[test]
fn test_manifest_without_entry_point_is_skipped() {
    let mut host = helpers::TestHost::new()
        .with_manifest("good", "economy")
        .with_file("notes.toml", "title = \"not a plugin\"\n");

    let report = host.discover();

    assert_eq!(report.loaded, vec!["good".to_string()]);
    assert_eq!(
        report.skipped,
        vec![PluginError::MissingEntryPoint {
            name: "notes".into(),
            path: host.path("notes.toml"),
        }]
    );
    assert!(!host.manager.is_registered("notes"));
}

#[test]
fn test_reserved_and_foreign_files_are_ignored() {
    let mut host = helpers::TestHost::new()
        .with_manifest("__init__", "example")
        .with_manifest("real", "example")
        .with_file("readme.md", "[DynastyPlugin]\nkind = \"example\"\n");

    let report = host.discover();

    assert_eq!(report.examined(), 1);
    assert_eq!(host.manager.registered_plugins(), vec!["real".to_string()]);
}

#[test]
fn test_unknown_kind_fails_to_load() {
    let mut host = helpers::TestHost::new().with_manifest("mystery", "astrology");

    let report = host.discover();

    assert!(report.loaded.is_empty());
    assert!(helpers::mentions(&report.failed, "astrology"));
    assert!(host.manager.registered_plugins().is_empty());
}

#[test]
fn test_discovery_loads_in_sorted_order_without_activating() {
    let mut host = helpers::TestHost::new()
        .with_manifest("zeta", "diplomacy")
        .with_manifest("alpha", "economy")
        .with_manifest("mid", "example");

    let report = host.discover();

    assert_eq!(report.loaded, vec!["alpha", "mid", "zeta"]);
    assert!(host.manager.active_plugins().is_empty());
}

#[test]
fn test_missing_directory_is_an_error() {
    let host = helpers::TestHost::new();
    let config = dynasty_core::config::PluginConfig {
        directory: host.path("nowhere").to_string_lossy().into_owned(),
        ..Default::default()
    };
    let mut manager =
        dynasty_plugin::PluginManager::new(&config, dynasty_plugins::builtin_catalog());

    assert!(matches!(manager.discover(), Err(PluginError::Directory { .. })));
}
