//! Economy plugin: tracks resource changes reported by the game.

use std::rc::Rc;

use tracing::info;

use dynasty_plugin::prelude::*;

use crate::hooks::{Ledger, ResourceChangeHook};

/// Adds advanced economic features to Dynasty.
///
/// Keeps a running total per resource for as long as the plugin is active.
/// The ledger starts empty on every activation.
#[derive(Debug, Default)]
pub struct EconomyPlugin {
    /// Resource totals shared with the resource-change handler.
    ledger: Ledger,
}

impl EconomyPlugin {
    /// Returns the running total for a resource.
    pub fn balance(&self, resource: &str) -> i64 {
        self.ledger.borrow().get(resource).copied().unwrap_or(0)
    }
}

impl DynastyPlugin for EconomyPlugin {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata::for_type::<Self>()
            .with_version("2.1.0")
            .with_author("Jane Smith")
            .with_description("Adds advanced economic features to Dynasty")
    }

    fn on_activate(&self) -> Result<(), String> {
        self.ledger.borrow_mut().clear();
        info!("EconomyPlugin is enhancing the game's economy");
        Ok(())
    }

    fn on_deactivate(&self) -> Result<(), String> {
        info!(
            resources = self.ledger.borrow().len(),
            "EconomyPlugin removed; economy returns to basic mode"
        );
        Ok(())
    }

    fn hooks(&self) -> Vec<HookDeclaration> {
        let handler: Rc<dyn HookHandler> =
            Rc::new(ResourceChangeHook::new("EconomyPlugin", Rc::clone(&self.ledger)));
        vec![(well_known::ON_RESOURCE_CHANGE.to_string(), handler)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metadata() {
        let metadata = EconomyPlugin::default().metadata();
        assert_eq!(metadata.name, "EconomyPlugin");
        assert_eq!(metadata.version, "2.1.0");
        assert_eq!(metadata.author, "Jane Smith");
    }

    #[test]
    fn test_hook_updates_balance_and_activation_resets() {
        let plugin = EconomyPlugin::default();
        let hooks = plugin.hooks();
        assert_eq!(hooks.len(), 1);
        assert_eq!(hooks[0].0, well_known::ON_RESOURCE_CHANGE);

        let payload = HookPayload::new().with_string("resource", "grain").with_int("amount", 40);
        assert_eq!(
            hooks[0].1.handle(&payload),
            Ok(json!({ "resource": "grain", "change": 40 }))
        );
        assert_eq!(plugin.balance("grain"), 40);

        plugin.on_activate().expect("activate");
        assert_eq!(plugin.balance("grain"), 0);
    }
}
