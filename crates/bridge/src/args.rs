//! JSON argument extraction helpers.

use serde_json::Value;
use sysbar_core::{BarError, Result};

/// Extract a required string argument. Absent, `null`, or non-string values
/// reject the call.
pub fn require_str<'a>(args: &'a Value, key: &'static str) -> Result<&'a str> {
    opt_str(args, key).ok_or(BarError::MissingArgument(key))
}

/// Extract an optional string argument (absent or `null` becomes `None`).
pub fn opt_str<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(Value::as_str)
}

/// Extract a required boolean argument.
pub fn require_bool(args: &Value, key: &'static str) -> Result<bool> {
    args.get(key)
        .and_then(Value::as_bool)
        .ok_or(BarError::MissingArgument(key))
}

/// Extract a boolean argument, defaulting when absent.
pub fn bool_or(args: &Value, key: &str, default: bool) -> bool {
    args.get(key).and_then(Value::as_bool).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn require_str_rejects_absent_and_null() {
        assert!(matches!(
            require_str(&json!({}), "style"),
            Err(BarError::MissingArgument("style"))
        ));
        assert!(matches!(
            require_str(&json!({ "style": null }), "style"),
            Err(BarError::MissingArgument("style"))
        ));
        assert_eq!(require_str(&json!({ "style": "DARK" }), "style").unwrap(), "DARK");
    }

    #[test]
    fn opt_str_treats_null_as_absent() {
        assert_eq!(opt_str(&json!({ "color": null }), "color"), None);
        assert_eq!(opt_str(&json!({ "color": "#FFF" }), "color"), Some("#FFF"));
    }

    #[test]
    fn bool_or_defaults_when_absent() {
        assert!(bool_or(&json!({}), "animated", true));
        assert!(!bool_or(&json!({ "animated": false }), "animated", true));
    }
}
