//! # dynasty-plugin
//!
//! Plugin framework for Dynasty. Provides:
//!
//! - Manifest discovery resolved through a compiled-in plugin catalog
//! - Plugin lifecycle management (load, activate, deactivate)
//! - A hook dispatch table keyed by `hook_*` names, in registration order
//! - Failure isolation: a failing plugin or hook never aborts the host

pub mod catalog;
pub mod error;
pub mod hooks;
pub mod loader;
pub mod macros;
pub mod manager;
pub mod manifest;
pub mod prelude;
pub mod registry;
pub mod safety;
pub mod traits;
pub mod tracker;

pub use catalog::PluginCatalog;
pub use error::{PluginError, PluginResult};
pub use hooks::definitions::{HookFailure, HookName, HookPayload, HookResult};
pub use hooks::dispatcher::{DispatchResult, HookDispatcher};
pub use hooks::registry::{HookHandler, HookRegistry};
pub use loader::{DiscoveryReport, PluginLoader};
pub use manager::PluginManager;
pub use registry::{DynastyPlugin, PluginInfo, PluginMetadata, PluginRegistry};
