//! Isolation wrappers for calls into plugin code.
//!
//! Plugin callbacks report failure through `Err(String)`, but a plugin can
//! also panic. Both are folded into the same `Err` so one misbehaving plugin
//! never unwinds through the host.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Runs a plugin callback, converting a panic into an error message.
pub fn isolate<T>(call: impl FnOnce() -> Result<T, String>) -> Result<T, String> {
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(result) => result,
        Err(payload) => Err(format!("panicked: {}", panic_message(payload.as_ref()))),
    }
}

/// Extracts the message carried by a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_through_results() {
        assert_eq!(isolate(|| Ok::<_, String>(3)), Ok(3));
        assert_eq!(isolate(|| Err::<(), _>("boom".to_string())), Err("boom".to_string()));
    }

    #[test]
    fn test_converts_panic() {
        let result: Result<(), String> = isolate(|| panic!("treasury exploded"));
        assert_eq!(result, Err("panicked: treasury exploded".to_string()));

        let amount = 5;
        let result: Result<(), String> = isolate(|| panic!("bad amount {amount}"));
        assert_eq!(result, Err("panicked: bad amount 5".to_string()));
    }
}
