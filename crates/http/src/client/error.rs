//! Client error types.

use serde_json::Value;
use thiserror::Error;

/// Fallback when the server reports a failure without a usable message.
const GENERIC_FAILURE: &str = "request failed";

#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request construction error.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not a JSON envelope.
    #[error("failed to read response from server")]
    InvalidBody,

    /// The server reported a failure; `message` is already user-facing.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

/// Pick the most specific failure message out of an error envelope.
///
/// Priority: a `message` string nested in the errors object, then the
/// first non-empty string (or first non-empty string inside an array)
/// among the error values, then the envelope's top-level message, then a
/// generic fallback.
pub fn extract_api_message(message: &str, errors: Option<&Value>) -> String {
    match errors {
        Some(Value::Object(fields)) => {
            if let Some(Value::String(nested)) = fields.get("message") {
                if !nested.is_empty() {
                    return nested.clone();
                }
            }
            if let Some(found) = scan_values(fields.values()) {
                return found;
            }
        }
        Some(Value::Array(items)) => {
            if let Some(found) = scan_values(items.iter()) {
                return found;
            }
        }
        _ => {}
    }
    if !message.is_empty() {
        return message.to_owned();
    }
    GENERIC_FAILURE.to_owned()
}

fn scan_values<'a>(values: impl Iterator<Item = &'a Value>) -> Option<String> {
    for value in values {
        match value {
            Value::String(text) if !text.is_empty() => return Some(text.clone()),
            Value::Array(items) => {
                if let Some(Value::String(first)) = items.first() {
                    if !first.is_empty() {
                        return Some(first.clone());
                    }
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_message_wins() {
        let errors = json!({
            "message": "email already taken",
            "email": ["must be unique"]
        });
        assert_eq!(
            extract_api_message("top level", Some(&errors)),
            "email already taken"
        );
    }

    #[test]
    fn first_non_empty_value_is_used() {
        let errors = json!({ "title": "title is required" });
        assert_eq!(
            extract_api_message("top level", Some(&errors)),
            "title is required"
        );
    }

    #[test]
    fn first_entry_of_array_values_is_used() {
        let errors = json!({ "content": ["content is required", "too short"] });
        assert_eq!(
            extract_api_message("", Some(&errors)),
            "content is required"
        );
    }

    #[test]
    fn empty_values_are_skipped() {
        let errors = json!({ "a": "", "b": [], "c": "real problem" });
        assert_eq!(extract_api_message("", Some(&errors)), "real problem");
    }

    #[test]
    fn array_errors_are_scanned() {
        let errors = json!(["something broke"]);
        assert_eq!(extract_api_message("", Some(&errors)), "something broke");
    }

    #[test]
    fn falls_back_to_top_level_message() {
        let errors = json!({ "a": 1 });
        assert_eq!(extract_api_message("bad request", Some(&errors)), "bad request");
        assert_eq!(extract_api_message("bad request", None), "bad request");
    }

    #[test]
    fn falls_back_to_generic_message() {
        assert_eq!(extract_api_message("", None), "request failed");
    }
}
