//! Diplomacy plugin reacting to diplomatic actions between nations.

use std::rc::Rc;

use tracing::info;

use dynasty_plugin::prelude::*;

use crate::hooks::DiplomaticActionHook;

/// Enhances diplomatic interactions between nations.
#[derive(Debug, Default)]
pub struct DiplomacyPlugin;

impl DynastyPlugin for DiplomacyPlugin {
    fn metadata(&self) -> PluginMetadata {
        plugin_metadata!(
            name: "DiplomacyPlugin",
            version: "1.5.2",
            author: "Diplomatic Dave",
            description: "Enhances diplomatic interactions between nations",
        )
    }

    fn on_activate(&self) -> Result<(), String> {
        info!("DiplomacyPlugin is improving international relations");
        Ok(())
    }

    fn on_deactivate(&self) -> Result<(), String> {
        info!("DiplomacyPlugin deactivated; diplomacy system reverts to default");
        Ok(())
    }

    fn hooks(&self) -> Vec<HookDeclaration> {
        let handler: Rc<dyn HookHandler> = Rc::new(DiplomaticActionHook::new("DiplomacyPlugin"));
        vec![(well_known::ON_DIPLOMATIC_ACTION.to_string(), handler)]
    }
}
