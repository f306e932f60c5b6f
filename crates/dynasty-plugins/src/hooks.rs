//! Hook handlers used by the built-in plugins.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::{Value, json};
use tracing::info;

use dynasty_plugin::prelude::*;

/// Handler for `hook_on_turn_start`: acknowledges the new turn.
#[derive(Debug)]
pub struct TurnStartHook {
    /// Display name of the owning plugin.
    plugin_name: String,
}

impl TurnStartHook {
    /// Creates a handler answering on behalf of `plugin_name`.
    pub fn new(plugin_name: &str) -> Self {
        Self {
            plugin_name: plugin_name.to_string(),
        }
    }
}

impl HookHandler for TurnStartHook {
    fn handle(&self, payload: &HookPayload) -> Result<Value, String> {
        let turn = payload
            .get_i64("turn_number")
            .or_else(|| payload.arg(0).and_then(Value::as_i64))
            .ok_or_else(|| "missing integer argument 'turn_number'".to_string())?;

        info!(plugin = %self.plugin_name, turn, "Turn is starting");
        Ok(json!(format!("Processed by {}", self.plugin_name)))
    }
}

/// Running resource totals kept by the economy plugin.
pub type Ledger = Rc<RefCell<BTreeMap<String, i64>>>;

/// Handler for `hook_on_resource_change`: records the change in the ledger
/// and echoes it back.
#[derive(Debug)]
pub struct ResourceChangeHook {
    /// Display name of the owning plugin.
    plugin_name: String,
    /// Shared ledger.
    ledger: Ledger,
}

impl ResourceChangeHook {
    /// Creates a handler writing into `ledger`.
    pub fn new(plugin_name: &str, ledger: Ledger) -> Self {
        Self {
            plugin_name: plugin_name.to_string(),
            ledger,
        }
    }
}

impl HookHandler for ResourceChangeHook {
    fn handle(&self, payload: &HookPayload) -> Result<Value, String> {
        let resource = payload.require_string("resource")?;
        let amount = payload.require_i64("amount")?;

        let mut ledger = self.ledger.borrow_mut();
        let total = ledger.entry(resource.to_string()).or_insert(0);
        *total = total
            .checked_add(amount)
            .ok_or_else(|| format!("{resource} total overflowed"))?;

        info!(plugin = %self.plugin_name, resource, amount, total = *total, "Resource changed");
        Ok(json!({ "resource": resource, "change": amount }))
    }
}

/// Handler for `hook_on_diplomatic_action`: echoes the action between two
/// nations.
#[derive(Debug)]
pub struct DiplomaticActionHook {
    /// Display name of the owning plugin.
    plugin_name: String,
}

impl DiplomaticActionHook {
    /// Creates a handler answering on behalf of `plugin_name`.
    pub fn new(plugin_name: &str) -> Self {
        Self {
            plugin_name: plugin_name.to_string(),
        }
    }
}

impl HookHandler for DiplomaticActionHook {
    fn handle(&self, payload: &HookPayload) -> Result<Value, String> {
        let action = payload.require_string("action")?;
        let source = payload.require_string("source_nation")?;
        let target = payload.require_string("target_nation")?;

        info!(plugin = %self.plugin_name, action, source, target, "Diplomatic action");
        Ok(json!({ "action": action, "source": source, "target": target }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_start_accepts_named_or_positional() {
        let hook = TurnStartHook::new("ExamplePlugin");
        let named = HookPayload::new().with_int("turn_number", 1);
        let positional = HookPayload::new().with_arg(json!(2));

        assert_eq!(hook.handle(&named), Ok(json!("Processed by ExamplePlugin")));
        assert_eq!(hook.handle(&positional), Ok(json!("Processed by ExamplePlugin")));
        assert!(hook.handle(&HookPayload::new()).is_err());
    }

    #[test]
    fn test_resource_change_updates_ledger() {
        let ledger = Ledger::default();
        let hook = ResourceChangeHook::new("EconomyPlugin", ledger.clone());

        let payload = HookPayload::new().with_string("resource", "gold").with_int("amount", 10);
        assert_eq!(hook.handle(&payload), Ok(json!({ "resource": "gold", "change": 10 })));

        let payload = HookPayload::new().with_string("resource", "gold").with_int("amount", -3);
        assert!(hook.handle(&payload).is_ok());
        assert_eq!(ledger.borrow().get("gold"), Some(&7));
    }

    #[test]
    fn test_resource_change_rejects_bad_arguments() {
        let ledger = Ledger::default();
        let hook = ResourceChangeHook::new("EconomyPlugin", ledger.clone());
        let payload = HookPayload::new().with_string("resource", "gold").with_string("amount", "ten");
        assert!(hook.handle(&payload).is_err());
        assert!(ledger.borrow().is_empty());
    }

    #[test]
    fn test_diplomatic_action_echo() {
        let hook = DiplomaticActionHook::new("DiplomacyPlugin");
        let payload = HookPayload::new()
            .with_string("action", "alliance")
            .with_string("source_nation", "Aurelia")
            .with_string("target_nation", "Borealis");
        assert_eq!(
            hook.handle(&payload),
            Ok(json!({ "action": "alliance", "source": "Aurelia", "target": "Borealis" }))
        );
    }
}
