//! A minimal plugin that answers the turn-start hook.

use std::rc::Rc;

use tracing::info;

use dynasty_plugin::prelude::*;

use crate::hooks::TurnStartHook;

/// Example plugin demonstrating the plugin contract.
#[derive(Debug, Default)]
pub struct ExamplePlugin;

impl DynastyPlugin for ExamplePlugin {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata::for_type::<Self>()
            .with_version("1.0.1")
            .with_author("John Doe")
            .with_description("An example plugin for Dynasty")
    }

    fn on_activate(&self) -> Result<(), String> {
        info!(plugin = %self.metadata().name, "Plugin has been activated");
        Ok(())
    }

    fn on_deactivate(&self) -> Result<(), String> {
        info!(plugin = %self.metadata().name, "Plugin has been deactivated");
        Ok(())
    }

    fn hooks(&self) -> Vec<HookDeclaration> {
        let handler: Rc<dyn HookHandler> = Rc::new(TurnStartHook::new(&self.metadata().name));
        vec![(well_known::ON_TURN_START.to_string(), handler)]
    }
}
