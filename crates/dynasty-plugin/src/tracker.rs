//! Tracks which registered plugins are currently active.

use std::rc::Rc;

use crate::registry::DynastyPlugin;

/// Active plugins in activation order.
#[derive(Debug, Default)]
pub struct ActivationTracker {
    /// (discovery name, instance) pairs, oldest activation first.
    active: Vec<(String, Rc<dyn DynastyPlugin>)>,
}

impl ActivationTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a plugin active. Returns `false` if the name was already active.
    pub fn insert(&mut self, name: &str, plugin: Rc<dyn DynastyPlugin>) -> bool {
        if self.contains(name) {
            return false;
        }
        self.active.push((name.to_string(), plugin));
        true
    }

    /// Removes a plugin, returning the instance that was active.
    pub fn remove(&mut self, name: &str) -> Option<Rc<dyn DynastyPlugin>> {
        let index = self.active.iter().position(|(n, _)| n == name)?;
        Some(self.active.remove(index).1)
    }

    /// Gets the active instance for a name.
    pub fn get(&self, name: &str) -> Option<Rc<dyn DynastyPlugin>> {
        self.active
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, plugin)| Rc::clone(plugin))
    }

    /// Checks whether a name is active.
    pub fn contains(&self, name: &str) -> bool {
        self.active.iter().any(|(n, _)| n == name)
    }

    /// Returns the active names in activation order.
    pub fn names(&self) -> Vec<String> {
        self.active.iter().map(|(n, _)| n.clone()).collect()
    }

    /// Returns the number of active plugins.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns whether no plugin is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
