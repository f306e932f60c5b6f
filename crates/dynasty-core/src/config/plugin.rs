//! Plugin system configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Plugin system configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Directory scanned for plugin manifests.
    #[serde(default = "default_plugin_directory")]
    pub directory: String,
    /// File extension of plugin manifests, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Plugins to activate right after discovery, in order.
    #[serde(default)]
    pub auto_activate: Vec<String>,
}

impl PluginConfig {
    /// Returns the plugin directory as a path.
    pub fn directory_path(&self) -> PathBuf {
        PathBuf::from(&self.directory)
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            directory: default_plugin_directory(),
            extension: default_extension(),
            auto_activate: Vec::new(),
        }
    }
}

fn default_plugin_directory() -> String {
    "plugins".to_string()
}

fn default_extension() -> String {
    "toml".to_string()
}
