//! Shared test helpers for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use dynasty_core::config::PluginConfig;
use dynasty_plugin::{DiscoveryReport, PluginManager};
use dynasty_plugins::builtin_catalog;

/// A plugin directory with a manager pointed at it
pub struct TestHost {
    /// Keeps the plugin directory alive for the test
    pub dir: TempDir,
    /// Manager over `dir`
    pub manager: PluginManager,
}

impl TestHost {
    /// Create an empty plugin directory
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create plugin directory");
        let config = PluginConfig {
            directory: dir.path().to_string_lossy().into_owned(),
            ..PluginConfig::default()
        };
        let manager = PluginManager::new(&config, builtin_catalog());
        Self { dir, manager }
    }

    /// Write a manifest declaring `kind` as `<name>.toml`
    pub fn with_manifest(self, name: &str, kind: &str) -> Self {
        self.with_file(&format!("{name}.toml"), &format!("[DynastyPlugin]\nkind = \"{kind}\"\n"))
    }

    /// Write an arbitrary file into the plugin directory
    pub fn with_file(self, file_name: &str, contents: &str) -> Self {
        fs::write(self.dir.path().join(file_name), contents).expect("Failed to write plugin file");
        self
    }

    /// Path of a file inside the plugin directory
    #[allow(dead_code)]
    pub fn path(&self, file_name: &str) -> PathBuf {
        self.dir.path().join(file_name)
    }

    /// Run discovery, failing the test on a directory error
    pub fn discover(&mut self) -> DiscoveryReport {
        self.manager.discover().expect("Discovery failed")
    }
}

/// True if the error message of any report entry mentions `needle`
#[allow(dead_code)]
pub fn mentions(errors: &[dynasty_plugin::PluginError], needle: &str) -> bool {
    errors.iter().any(|e| e.to_string().contains(needle))
}
