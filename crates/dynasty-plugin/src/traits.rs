//! Convenience handler types for plugin development.

use std::fmt;
use std::rc::Rc;

use crate::hooks::definitions::HookPayload;
use crate::hooks::registry::HookHandler;

type HandlerFn = dyn Fn(&HookPayload) -> Result<serde_json::Value, String>;

/// A closure-based hook handler for quick handler creation.
pub struct ClosureHandler {
    /// Handler function.
    handler: Box<HandlerFn>,
}

impl fmt::Debug for ClosureHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosureHandler")
            .field("handler", &"<closure>")
            .finish()
    }
}

impl ClosureHandler {
    /// Creates a new closure-based handler.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&HookPayload) -> Result<serde_json::Value, String> + 'static,
    {
        Self {
            handler: Box::new(handler),
        }
    }

    /// Wraps a closure into an `Rc<dyn HookHandler>` ready for a hook list.
    pub fn wrap<F>(handler: F) -> Rc<dyn HookHandler>
    where
        F: Fn(&HookPayload) -> Result<serde_json::Value, String> + 'static,
    {
        Rc::new(Self::new(handler))
    }
}

impl HookHandler for ClosureHandler {
    fn handle(&self, payload: &HookPayload) -> Result<serde_json::Value, String> {
        (self.handler)(payload)
    }
}
