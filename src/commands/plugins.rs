//! Plugin listing command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use dynasty_core::config::AppConfig;
use dynasty_core::AppResult;
use dynasty_plugin::{PluginInfo, PluginManager};

use crate::output::{self, OutputFormat};

/// Arguments for the plugins command
#[derive(Debug, Args)]
pub struct PluginsArgs {
    /// Only list active plugins
    #[arg(long)]
    pub active: bool,
}

/// Table row for a registered plugin
#[derive(Debug, Serialize, Tabled)]
pub struct PluginRow {
    /// Discovery name
    id: String,
    /// Display name
    name: String,
    /// Version
    version: String,
    /// Author
    author: String,
    /// Description
    description: String,
    /// Active flag
    active: bool,
}

impl From<PluginInfo> for PluginRow {
    fn from(info: PluginInfo) -> Self {
        Self {
            id: info.id,
            name: info.name,
            version: info.version,
            author: info.author,
            description: info.description,
            active: info.active,
        }
    }
}

/// Execute the plugins command
pub fn execute(args: &PluginsArgs, config: &AppConfig, format: OutputFormat) -> AppResult<()> {
    let manager = super::build_manager(config)?;
    print_plugins(&manager, args.active, format);
    Ok(())
}

/// Prints the registered plugins of a manager.
pub fn print_plugins(manager: &PluginManager, active_only: bool, format: OutputFormat) {
    let rows: Vec<PluginRow> = manager
        .get_plugin_info()
        .into_values()
        .filter(|info| !active_only || info.active)
        .map(PluginRow::from)
        .collect();
    output::print_rows(&rows, format, "No plugins found.");
}
