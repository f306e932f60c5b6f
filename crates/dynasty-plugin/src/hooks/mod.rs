//! Hook system.

pub mod definitions;
pub mod dispatcher;
pub mod registry;

pub use definitions::{HOOK_PREFIX, HookFailure, HookName, HookPayload, HookResult, well_known};
pub use dispatcher::{DispatchResult, HookDispatcher};
pub use registry::{HookHandler, HookRegistry};
