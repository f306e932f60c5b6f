//! Prelude for convenient imports in plugin crates.

pub use crate::catalog::PluginCatalog;
pub use crate::hooks::definitions::{HookName, HookPayload, HookResult, well_known};
pub use crate::hooks::registry::HookHandler;
pub use crate::registry::{DynastyPlugin, HookDeclaration, PluginInfo, PluginMetadata};
pub use crate::traits::ClosureHandler;

pub use crate::{hook_payload, plugin_metadata};
