//! Hook names, payloads and results.
//!
//! Hook names are open-ended: any identifier carrying the reserved
//! [`HOOK_PREFIX`] is a valid hook. The dispatch table never declares hook
//! names up front; the constants in [`well_known`] only name the hooks the
//! game itself fires.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reserved prefix every hook name must start with.
pub const HOOK_PREFIX: &str = "hook_";

/// Hooks fired by the Dynasty game loop.
pub mod well_known {
    /// Fired at the start of every turn. Args: `turn_number`.
    pub const ON_TURN_START: &str = "hook_on_turn_start";
    /// Fired when a nation's resource stock changes. Args: `resource`, `amount`.
    pub const ON_RESOURCE_CHANGE: &str = "hook_on_resource_change";
    /// Fired on diplomatic actions between nations. Args: `action`,
    /// `source_nation`, `target_nation`.
    pub const ON_DIPLOMATIC_ACTION: &str = "hook_on_diplomatic_action";
}

/// A validated hook name (always starts with [`HOOK_PREFIX`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HookName(String);

impl HookName {
    /// Parses a hook name, returning `None` when the reserved prefix is
    /// missing.
    pub fn parse(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.starts_with(HOOK_PREFIX) {
            Some(Self(name))
        } else {
            None
        }
    }

    /// Returns the string name of this hook.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HookName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.clone())
            .ok_or_else(|| format!("'{value}' is not a hook name (missing '{HOOK_PREFIX}' prefix)"))
    }
}

impl From<HookName> for String {
    fn from(value: HookName) -> Self {
        value.0
    }
}

/// Arguments passed to hook handlers.
///
/// `args` carries positional arguments in call order, `data` carries named
/// arguments. Hook signatures are agreed per hook name between the host and
/// the plugins; the dispatcher never inspects the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookPayload {
    /// Positional arguments.
    #[serde(default)]
    pub args: Vec<serde_json::Value>,
    /// Named arguments.
    #[serde(default)]
    pub data: HashMap<String, serde_json::Value>,
    /// Timestamp of the call.
    pub timestamp: DateTime<Utc>,
}

impl HookPayload {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            data: HashMap::new(),
            timestamp: Utc::now(),
        }
    }

    /// Appends a positional argument.
    pub fn with_arg(mut self, value: serde_json::Value) -> Self {
        self.args.push(value);
        self
    }

    /// Inserts a named argument.
    pub fn with_data(mut self, key: &str, value: serde_json::Value) -> Self {
        self.data.insert(key.to_string(), value);
        self
    }

    /// Inserts a string argument.
    pub fn with_string(self, key: &str, value: &str) -> Self {
        self.with_data(key, serde_json::json!(value))
    }

    /// Inserts an integer argument.
    pub fn with_int(self, key: &str, value: i64) -> Self {
        self.with_data(key, serde_json::json!(value))
    }

    /// Inserts a boolean argument.
    pub fn with_bool(self, key: &str, value: bool) -> Self {
        self.with_data(key, serde_json::json!(value))
    }

    /// Gets a positional argument.
    pub fn arg(&self, index: usize) -> Option<&serde_json::Value> {
        self.args.get(index)
    }

    /// Gets a named argument.
    pub fn get_data(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Gets a string argument.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(|v| v.as_str())
    }

    /// Gets an i64 argument.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.data.get(key).and_then(|v| v.as_i64())
    }

    /// Gets a bool argument.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.data.get(key).and_then(|v| v.as_bool())
    }

    /// Gets a required string argument, failing the way a hook signature
    /// mismatch should.
    pub fn require_string(&self, key: &str) -> Result<&str, String> {
        self.get_string(key)
            .ok_or_else(|| format!("missing string argument '{key}'"))
    }

    /// Gets a required i64 argument.
    pub fn require_i64(&self, key: &str) -> Result<i64, String> {
        self.get_i64(key)
            .ok_or_else(|| format!("missing integer argument '{key}'"))
    }
}

impl Default for HookPayload {
    fn default() -> Self {
        Self::new()
    }
}

/// A successful response from one hook binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookResult {
    /// Discovery name of the plugin that produced this result.
    pub plugin_id: String,
    /// Hook that was called.
    pub hook: HookName,
    /// Value returned by the handler.
    pub output: serde_json::Value,
}

/// A binding that failed during dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookFailure {
    /// Discovery name of the plugin whose handler failed.
    pub plugin_id: String,
    /// Hook that was called.
    pub hook: HookName,
    /// Failure text reported by the handler.
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hook_name_requires_prefix() {
        assert!(HookName::parse("hook_on_turn_start").is_some());
        assert!(HookName::parse("on_turn_start").is_none());
        assert_eq!(HookName::parse("hook_").map(|h| h.to_string()), Some("hook_".to_string()));
        assert!(HookName::parse("Hook_on_turn_start").is_none());
    }

    #[test]
    fn test_hook_name_deserialize_rejects_missing_prefix() {
        let ok: Result<HookName, _> = serde_json::from_value(json!("hook_x"));
        assert_eq!(ok.expect("valid").as_str(), "hook_x");

        let bad: Result<HookName, _> = serde_json::from_value(json!("x"));
        assert!(bad.is_err());
    }

    #[test]
    fn test_payload_getters() {
        let payload = HookPayload::new()
            .with_arg(json!(7))
            .with_string("resource", "gold")
            .with_int("amount", 10)
            .with_bool("urgent", true);

        assert_eq!(payload.arg(0), Some(&json!(7)));
        assert_eq!(payload.arg(1), None);
        assert_eq!(payload.get_string("resource"), Some("gold"));
        assert_eq!(payload.get_i64("amount"), Some(10));
        assert_eq!(payload.get_bool("urgent"), Some(true));
        assert_eq!(payload.get_string("amount"), None);
    }

    #[test]
    fn test_require_reports_missing_key() {
        let payload = HookPayload::new().with_string("resource", "gold");
        assert_eq!(payload.require_string("resource"), Ok("gold"));
        let err = payload.require_i64("amount").unwrap_err();
        assert!(err.contains("amount"));
    }
}
