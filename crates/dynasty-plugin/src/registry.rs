//! Plugin registry storing loaded plugin instances by discovery name.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::hooks::registry::HookHandler;

/// Descriptive metadata a plugin reports about itself.
///
/// This is the base adapter for plugin metadata: every field has a
/// placeholder default, and plugins override only what they care about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginMetadata {
    /// Display name (defaults to the plugin's type name).
    pub name: String,
    /// Version string.
    pub version: String,
    /// Author or maintainer.
    pub author: String,
    /// Description.
    pub description: String,
}

impl PluginMetadata {
    /// Creates metadata with the given display name and placeholder values.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: "1.0.0".to_string(),
            author: "Unknown".to_string(),
            description: "No description provided".to_string(),
        }
    }

    /// Creates placeholder metadata named after `T`'s short type name.
    pub fn for_type<T: ?Sized>() -> Self {
        Self::named(short_type_name::<T>())
    }

    /// Sets the version.
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Sets the author.
    pub fn with_author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

/// Last path segment of a type name, without generic arguments.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Introspection record for a registered plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Discovery name (registry key).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Version string.
    pub version: String,
    /// Author or maintainer.
    pub author: String,
    /// Description.
    pub description: String,
    /// Whether the plugin is currently active.
    pub active: bool,
}

impl PluginInfo {
    /// Builds an info record from a plugin's metadata.
    pub fn from_metadata(id: &str, metadata: PluginMetadata, active: bool) -> Self {
        Self {
            id: id.to_string(),
            name: metadata.name,
            version: metadata.version,
            author: metadata.author,
            description: metadata.description,
            active,
        }
    }
}

/// A hook declared by a plugin: hook name plus the handler to bind.
pub type HookDeclaration = (String, Rc<dyn HookHandler>);

/// Trait that all Dynasty plugins implement.
///
/// Every method has a default: a plugin that overrides nothing is a valid,
/// hook-less plugin named after its type.
pub trait DynastyPlugin: fmt::Debug {
    /// Returns plugin metadata.
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata::for_type::<Self>()
    }

    /// Called once per activation. An error aborts the activation.
    fn on_activate(&self) -> Result<(), String> {
        Ok(())
    }

    /// Called once per deactivation. An error is reported, but the plugin is
    /// deactivated regardless.
    fn on_deactivate(&self) -> Result<(), String> {
        Ok(())
    }

    /// Declares this plugin's hooks in binding order.
    ///
    /// Called once per activation; the returned list is the snapshot bound
    /// into the dispatch table. Names must start with `hook_`.
    fn hooks(&self) -> Vec<HookDeclaration> {
        Vec::new()
    }
}

/// Registry of all loaded plugins, active or not.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    /// Discovery name → plugin instance.
    plugins: HashMap<String, Rc<dyn DynastyPlugin>>,
}

impl PluginRegistry {
    /// Creates a new empty plugin registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a plugin under `name`, returning the instance it replaced.
    pub fn insert(
        &mut self,
        name: &str,
        plugin: Rc<dyn DynastyPlugin>,
    ) -> Option<Rc<dyn DynastyPlugin>> {
        let metadata = plugin.metadata();
        debug!(
            plugin_id = %name,
            name = %metadata.name,
            version = %metadata.version,
            "Registering plugin"
        );
        self.plugins.insert(name.to_string(), plugin)
    }

    /// Gets a plugin by name.
    pub fn get(&self, name: &str) -> Option<Rc<dyn DynastyPlugin>> {
        self.plugins.get(name).cloned()
    }

    /// Checks whether a plugin is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.plugins.keys().cloned().collect();
        names.sort();
        names
    }

    /// Iterates over all registered plugins.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rc<dyn DynastyPlugin>)> {
        self.plugins.iter().map(|(name, plugin)| (name.as_str(), plugin))
    }
}
