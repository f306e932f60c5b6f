//! Plugin manager: discovery, lifecycle and hook calls.
//!
//! The manager owns the plugin registry, the activation tracker and the hook
//! dispatch table. It is single-threaded: every mutation goes through
//! `&mut self`, and plugins are shared through `Rc`, so the manager cannot
//! cross a thread boundary.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::rc::Rc;

use tracing::{error, info, warn};

use dynasty_core::config::PluginConfig;

use crate::catalog::PluginCatalog;
use crate::error::{PluginError, PluginResult};
use crate::hooks::definitions::{HookName, HookPayload, HookResult};
use crate::hooks::dispatcher::{DispatchResult, HookDispatcher};
use crate::hooks::registry::HookRegistry;
use crate::loader::{DiscoveryReport, PluginLoader};
use crate::registry::{DynastyPlugin, PluginInfo, PluginRegistry};
use crate::safety;
use crate::tracker::ActivationTracker;

/// Manages the lifecycle of plugins: load, activate, deactivate.
#[derive(Debug)]
pub struct PluginManager {
    /// Manifest loader.
    loader: PluginLoader,
    /// Compiled-in plugin constructors.
    catalog: PluginCatalog,
    /// Loaded plugins.
    plugin_registry: PluginRegistry,
    /// Active plugins.
    active: ActivationTracker,
    /// Hook dispatch table.
    hook_registry: HookRegistry,
}

impl PluginManager {
    /// Creates a manager that discovers manifests as configured.
    pub fn new(config: &PluginConfig, catalog: PluginCatalog) -> Self {
        Self::with_loader(PluginLoader::from_config(config), catalog)
    }

    /// Creates a manager around an explicit loader.
    pub fn with_loader(loader: PluginLoader, catalog: PluginCatalog) -> Self {
        Self {
            loader,
            catalog,
            plugin_registry: PluginRegistry::new(),
            active: ActivationTracker::new(),
            hook_registry: HookRegistry::new(),
        }
    }

    /// Discovers and loads every manifest in the plugin directory.
    ///
    /// Individual manifests that fail to load are logged and skipped;
    /// discovery always continues. Only an unreadable directory is returned
    /// as an error. No plugin is activated.
    pub fn discover(&mut self) -> PluginResult<DiscoveryReport> {
        info!(directory = %self.loader.directory().display(), "Discovering plugins");

        let manifests = self.loader.scan().map_err(|e| {
            error!(error = %e, "Plugin discovery failed");
            e
        })?;

        let mut report = DiscoveryReport::default();
        for manifest in manifests {
            match self.load_plugin(&manifest.name, &manifest.path) {
                Ok(()) => report.loaded.push(manifest.name),
                Err(e @ PluginError::MissingEntryPoint { .. }) => report.skipped.push(e),
                Err(e) => report.failed.push(e),
            }
        }

        info!(
            loaded = report.loaded.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "Plugin discovery complete"
        );

        Ok(report)
    }

    /// Loads a single manifest under an explicit plugin name.
    ///
    /// A successful load overwrites any plugin registered under the same
    /// name. If that name is active, the running instance stays active (and
    /// keeps its hooks) until it is deactivated.
    pub fn load_plugin(&mut self, name: &str, path: &Path) -> PluginResult<()> {
        match self.loader.load(name, path, &self.catalog) {
            Ok(plugin) => {
                if self.active.contains(name) {
                    warn!(
                        plugin_id = %name,
                        "Reloaded plugin is active; the running instance stays active until deactivated"
                    );
                }
                self.plugin_registry.insert(name, plugin);
                info!(plugin_id = %name, path = %path.display(), "Successfully loaded plugin");
                Ok(())
            }
            Err(e @ PluginError::MissingEntryPoint { .. }) => {
                warn!(plugin_id = %name, path = %path.display(), "{e}");
                Err(e)
            }
            Err(e) => {
                error!(plugin_id = %name, path = %path.display(), error = %e, "Failed to load plugin");
                Err(e)
            }
        }
    }

    /// Registers an already-constructed plugin without a manifest.
    pub fn register(&mut self, name: &str, plugin: Rc<dyn DynastyPlugin>) {
        if self.active.contains(name) {
            warn!(
                plugin_id = %name,
                "Replaced plugin is active; the running instance stays active until deactivated"
            );
        }
        self.plugin_registry.insert(name, plugin);
    }

    /// Activates a loaded plugin and binds its declared hooks.
    ///
    /// If `on_activate` fails (or panics) the plugin stays loaded but
    /// inactive, and none of its hooks are bound.
    pub fn activate(&mut self, name: &str) -> PluginResult<()> {
        let Some(plugin) = self.plugin_registry.get(name) else {
            warn!(plugin_id = %name, "Plugin not found");
            return Err(PluginError::NotFound {
                name: name.to_string(),
            });
        };

        if self.active.contains(name) {
            warn!(plugin_id = %name, "Plugin is already active");
            return Err(PluginError::AlreadyActive {
                name: name.to_string(),
            });
        }

        if let Err(reason) = safety::isolate(|| plugin.on_activate()) {
            error!(plugin_id = %name, error = %reason, "Failed to activate plugin");
            return Err(PluginError::ActivationFailed {
                name: name.to_string(),
                reason,
            });
        }

        let hooks = safety::isolate(|| Ok(plugin.hooks())).unwrap_or_else(|reason| {
            error!(plugin_id = %name, error = %reason, "Failed to collect plugin hooks");
            Vec::new()
        });

        self.active.insert(name, Rc::clone(&plugin));

        let mut bound = HashSet::new();
        for (hook, handler) in hooks {
            let Some(hook_name) = HookName::parse(hook.as_str()) else {
                warn!(plugin_id = %name, hook = %hook, "Ignoring hook without 'hook_' prefix");
                continue;
            };
            if !bound.insert(hook_name.clone()) {
                warn!(plugin_id = %name, hook = %hook_name, "Ignoring duplicate hook declaration");
                continue;
            }
            self.hook_registry.register(hook_name, name, handler);
        }

        info!(plugin_id = %name, hooks = bound.len(), "Activated plugin");
        Ok(())
    }

    /// Deactivates an active plugin and strips its hook bindings.
    ///
    /// The plugin is removed even if `on_deactivate` fails; the failure is
    /// then returned as [`PluginError::DeactivationFailed`].
    pub fn deactivate(&mut self, name: &str) -> PluginResult<()> {
        let Some(plugin) = self.active.get(name) else {
            warn!(plugin_id = %name, "Plugin is not active");
            return Err(PluginError::NotActive {
                name: name.to_string(),
            });
        };

        let callback = safety::isolate(|| plugin.on_deactivate());
        if let Err(reason) = &callback {
            error!(plugin_id = %name, error = %reason, "Failed to deactivate plugin cleanly");
        }

        self.active.remove(name);
        let removed = self.hook_registry.unregister_plugin(name);

        info!(plugin_id = %name, hooks = removed, "Deactivated plugin");

        callback.map_err(|reason| PluginError::DeactivationFailed {
            name: name.to_string(),
            reason,
        })
    }

    /// Activates each named plugin in order, returning those that became
    /// active. Failures are logged and do not stop the remaining names.
    pub fn activate_all<S: AsRef<str>>(&mut self, names: &[S]) -> Vec<String> {
        names
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| self.activate(name).is_ok())
            .map(str::to_string)
            .collect()
    }

    /// Deactivates every active plugin, most recently activated first.
    pub fn deactivate_all(&mut self) {
        for name in self.active.names().into_iter().rev() {
            if let Err(e) = self.deactivate(&name) {
                error!(plugin_id = %name, error = %e, "Error deactivating plugin");
            }
        }
        info!("All plugins deactivated");
    }

    /// Calls every binding of a hook and returns the successful responses.
    pub fn call_hook(&self, hook: &str, payload: &HookPayload) -> Vec<HookResult> {
        self.dispatch(hook, payload).results
    }

    /// Calls every binding of a hook, also reporting the failed bindings.
    pub fn dispatch(&self, hook: &str, payload: &HookPayload) -> DispatchResult {
        HookDispatcher::new(&self.hook_registry).dispatch(hook, payload)
    }

    /// Returns information about every registered plugin, keyed by name.
    pub fn get_plugin_info(&self) -> BTreeMap<String, PluginInfo> {
        self.plugin_registry
            .iter()
            .map(|(name, plugin)| {
                let info = PluginInfo::from_metadata(name, plugin.metadata(), self.is_active(name));
                (name.to_string(), info)
            })
            .collect()
    }

    /// Returns whether a plugin is active.
    pub fn is_active(&self, name: &str) -> bool {
        self.active.contains(name)
    }

    /// Returns whether a plugin is registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.plugin_registry.contains(name)
    }

    /// Returns the active plugin names in activation order.
    pub fn active_plugins(&self) -> Vec<String> {
        self.active.names()
    }

    /// Returns the registered plugin names, sorted.
    pub fn registered_plugins(&self) -> Vec<String> {
        self.plugin_registry.names()
    }

    /// Returns the hook dispatch table.
    pub fn hook_registry(&self) -> &HookRegistry {
        &self.hook_registry
    }
}
