//! Dispatch table mapping hook names to plugin bindings.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use super::definitions::{HookName, HookPayload};

/// Trait for hook handler implementations.
pub trait HookHandler: fmt::Debug {
    /// Handles a hook invocation, returning the plugin's response.
    fn handle(&self, payload: &HookPayload) -> Result<serde_json::Value, String>;
}

/// Entry in the hook registry.
#[derive(Debug, Clone)]
pub(crate) struct HookEntry {
    /// The handler.
    pub(crate) handler: Rc<dyn HookHandler>,
    /// Discovery name of the plugin that registered this handler.
    pub(crate) plugin_id: String,
}

/// Registry of hook bindings organized by hook name.
///
/// Bindings for a hook are kept in registration order. A hook name only
/// exists in the table while at least one binding is registered under it.
#[derive(Debug, Default)]
pub struct HookRegistry {
    /// Hook name → bindings in registration order.
    handlers: HashMap<HookName, Vec<HookEntry>>,
}

impl HookRegistry {
    /// Creates a new empty hook registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a binding for `plugin_id` under `hook`.
    pub fn register(&mut self, hook: HookName, plugin_id: &str, handler: Rc<dyn HookHandler>) {
        debug!(hook = %hook, plugin_id = %plugin_id, "Hook handler registered");

        self.handlers.entry(hook).or_default().push(HookEntry {
            handler,
            plugin_id: plugin_id.to_string(),
        });
    }

    /// Removes every binding owned by `plugin_id`, dropping hook names left
    /// without bindings. Returns the number of bindings removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> usize {
        let mut removed = 0;

        for entries in self.handlers.values_mut() {
            let before = entries.len();
            entries.retain(|e| e.plugin_id != plugin_id);
            removed += before - entries.len();
        }

        self.handlers.retain(|_, entries| !entries.is_empty());

        debug!(plugin_id = %plugin_id, removed, "Hooks unregistered for plugin");
        removed
    }

    /// Returns the bindings for a hook in registration order.
    pub(crate) fn entries(&self, hook: &str) -> Vec<HookEntry> {
        HookName::parse(hook)
            .and_then(|name| self.handlers.get(&name))
            .cloned()
            .unwrap_or_default()
    }

    /// Returns the plugin IDs bound to a hook, in registration order.
    pub fn bound_plugins(&self, hook: &str) -> Vec<String> {
        self.entries(hook).into_iter().map(|e| e.plugin_id).collect()
    }

    /// Returns whether any handlers are registered for a hook.
    pub fn has_handlers(&self, hook: &str) -> bool {
        self.handler_count(hook) > 0
    }

    /// Returns the number of handlers registered for a hook.
    pub fn handler_count(&self, hook: &str) -> usize {
        HookName::parse(hook)
            .and_then(|name| self.handlers.get(&name))
            .map(|entries| entries.len())
            .unwrap_or(0)
    }

    /// Returns all hook names with at least one binding, sorted.
    pub fn registered_hooks(&self) -> Vec<HookName> {
        let mut hooks: Vec<HookName> = self.handlers.keys().cloned().collect();
        hooks.sort();
        hooks
    }

    /// Returns the total number of bindings across all hooks.
    pub fn binding_count(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ClosureHandler;

    fn handler(tag: &'static str) -> Rc<dyn HookHandler> {
        Rc::new(ClosureHandler::new(move |_| Ok(serde_json::json!(tag))))
    }

    fn hook(name: &str) -> HookName {
        HookName::parse(name).expect("valid hook name")
    }

    #[test]
    fn test_register_keeps_order() {
        let mut registry = HookRegistry::new();
        registry.register(hook("hook_a"), "first", handler("1"));
        registry.register(hook("hook_a"), "second", handler("2"));
        registry.register(hook("hook_b"), "first", handler("3"));

        assert_eq!(registry.bound_plugins("hook_a"), vec!["first", "second"]);
        assert_eq!(registry.handler_count("hook_b"), 1);
        assert_eq!(registry.binding_count(), 3);
    }

    #[test]
    fn test_unregister_drops_empty_hooks() {
        let mut registry = HookRegistry::new();
        registry.register(hook("hook_a"), "first", handler("1"));
        registry.register(hook("hook_a"), "second", handler("2"));
        registry.register(hook("hook_b"), "first", handler("3"));

        assert_eq!(registry.unregister_plugin("first"), 2);
        assert_eq!(registry.registered_hooks(), vec![hook("hook_a")]);
        assert_eq!(registry.bound_plugins("hook_a"), vec!["second"]);
        assert!(!registry.has_handlers("hook_b"));
    }

    #[test]
    fn test_unknown_or_invalid_names_have_no_handlers() {
        let registry = HookRegistry::new();
        assert_eq!(registry.handler_count("hook_missing"), 0);
        assert_eq!(registry.handler_count("not_a_hook"), 0);
        assert!(registry.bound_plugins("hook_missing").is_empty());
    }
}
