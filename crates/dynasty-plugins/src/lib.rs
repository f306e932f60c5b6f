//! Built-in plugins shipped with Dynasty.
//!
//! Each plugin is compiled in and addressed by a manifest kind through
//! [`builtin_catalog`].

pub mod diplomacy;
pub mod economy;
pub mod example;
pub mod hooks;

pub use diplomacy::DiplomacyPlugin;
pub use economy::EconomyPlugin;
pub use example::ExamplePlugin;

use dynasty_plugin::PluginCatalog;

/// Manifest kind of [`ExamplePlugin`].
pub const EXAMPLE_KIND: &str = "example";
/// Manifest kind of [`EconomyPlugin`].
pub const ECONOMY_KIND: &str = "economy";
/// Manifest kind of [`DiplomacyPlugin`].
pub const DIPLOMACY_KIND: &str = "diplomacy";

/// Returns a catalog containing every built-in plugin.
pub fn builtin_catalog() -> PluginCatalog {
    PluginCatalog::new()
        .with_default::<ExamplePlugin>(EXAMPLE_KIND)
        .with_default::<EconomyPlugin>(ECONOMY_KIND)
        .with_default::<DiplomacyPlugin>(DIPLOMACY_KIND)
}
