//! Hook dispatcher. Calls every binding of a hook and aggregates results.
//!
//! - Bindings are called in registration order.
//! - A failing binding (error or panic) is logged and skipped; later
//!   bindings still run.
//! - Only successful invocations appear in the results.

use tracing::{debug, error};

use super::definitions::{HookFailure, HookName, HookPayload, HookResult};
use super::registry::HookRegistry;
use crate::safety;

/// Aggregated result of dispatching a hook to all bindings.
#[derive(Debug, Clone, Default)]
pub struct DispatchResult {
    /// Responses of the bindings that succeeded, in call order.
    pub results: Vec<HookResult>,
    /// Bindings that failed, in call order.
    pub failures: Vec<HookFailure>,
}

impl DispatchResult {
    /// Returns the number of bindings that were invoked.
    pub fn invoked(&self) -> usize {
        self.results.len() + self.failures.len()
    }
}

/// Dispatches hooks to the bindings of a [`HookRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct HookDispatcher<'a> {
    /// Hook registry.
    registry: &'a HookRegistry,
}

impl<'a> HookDispatcher<'a> {
    /// Creates a dispatcher over a registry.
    pub fn new(registry: &'a HookRegistry) -> Self {
        Self { registry }
    }

    /// Dispatches a hook to all registered bindings.
    ///
    /// A name with no bindings (including names without the `hook_` prefix)
    /// yields an empty result.
    pub fn dispatch(&self, hook: &str, payload: &HookPayload) -> DispatchResult {
        let entries = self.registry.entries(hook);
        let mut outcome = DispatchResult::default();

        let Some(hook_name) = HookName::parse(hook).filter(|_| !entries.is_empty()) else {
            return outcome;
        };

        debug!(hook = %hook_name, handler_count = entries.len(), "Dispatching hook");

        for entry in &entries {
            match safety::isolate(|| entry.handler.handle(payload)) {
                Ok(output) => outcome.results.push(HookResult {
                    plugin_id: entry.plugin_id.clone(),
                    hook: hook_name.clone(),
                    output,
                }),
                Err(reason) => {
                    error!(
                        hook = %hook_name,
                        plugin_id = %entry.plugin_id,
                        error = %reason,
                        "Error calling hook"
                    );
                    outcome.failures.push(HookFailure {
                        plugin_id: entry.plugin_id.clone(),
                        hook: hook_name.clone(),
                        reason,
                    });
                }
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ClosureHandler;
    use serde_json::json;

    fn hook(name: &str) -> HookName {
        HookName::parse(name).expect("valid hook name")
    }

    #[test]
    fn test_empty_hook_returns_nothing() {
        let registry = HookRegistry::new();
        let dispatcher = HookDispatcher::new(&registry);
        let outcome = dispatcher.dispatch("hook_on_turn_start", &HookPayload::new());
        assert!(outcome.results.is_empty());
        assert!(outcome.failures.is_empty());
        assert_eq!(dispatcher.dispatch("not_prefixed", &HookPayload::new()).invoked(), 0);
    }

    #[test]
    fn test_failures_do_not_stop_dispatch() {
        let mut registry = HookRegistry::new();
        registry.register(
            hook("hook_x"),
            "failing",
            ClosureHandler::wrap(|_| Err("no treasury".to_string())),
        );
        registry.register(
            hook("hook_x"),
            "panicking",
            ClosureHandler::wrap(|_| panic!("rebellion")),
        );
        registry.register(
            hook("hook_x"),
            "working",
            ClosureHandler::wrap(|payload| Ok(json!(payload.get_i64("turn")))),
        );

        let payload = HookPayload::new().with_int("turn", 4);
        let outcome = HookDispatcher::new(&registry).dispatch("hook_x", &payload);

        assert_eq!(outcome.invoked(), 3);
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].plugin_id, "working");
        assert_eq!(outcome.results[0].output, json!(4));

        let failed: Vec<&str> = outcome.failures.iter().map(|f| f.plugin_id.as_str()).collect();
        assert_eq!(failed, vec!["failing", "panicking"]);
        assert_eq!(outcome.failures[0].reason, "no treasury");
        assert!(outcome.failures[1].reason.contains("rebellion"));
    }

    #[test]
    fn test_results_follow_registration_order() {
        let mut registry = HookRegistry::new();
        for id in ["c", "a", "b"] {
            registry.register(
                hook("hook_order"),
                id,
                ClosureHandler::wrap(move |_| Ok(json!(id))),
            );
        }

        let outputs: Vec<_> = HookDispatcher::new(&registry)
            .dispatch("hook_order", &HookPayload::new())
            .results
            .into_iter()
            .map(|r| r.output)
            .collect();
        assert_eq!(outputs, vec![json!("c"), json!("a"), json!("b")]);
    }
}
