//! Plugin manifest parsing.
//!
//! A manifest is a small TOML file in the plugin directory. Its
//! `[DynastyPlugin]` table is the plugin's entry point and names the
//! compiled-in plugin kind to instantiate:
//!
//! ```toml
//! [DynastyPlugin]
//! kind = "economy"
//! ```

use serde::{Deserialize, Serialize};

/// Parsed plugin manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginManifest {
    /// Entry point table; absent when the file declares no plugin.
    #[serde(rename = "DynastyPlugin", default)]
    pub entry: Option<EntryPoint>,
}

/// The `[DynastyPlugin]` entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryPoint {
    /// Catalog kind to instantiate.
    #[serde(default)]
    pub kind: Option<String>,
}

impl PluginManifest {
    /// Parses a manifest from TOML text.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Returns the declared kind, if the entry point names one.
    pub fn kind(&self) -> Option<&str> {
        self.entry
            .as_ref()
            .and_then(|entry| entry.kind.as_deref())
            .map(str::trim)
            .filter(|kind| !kind.is_empty())
    }
}
