//! Error-message extraction from backend response bodies
//!
//! The backend reports failures through a `detail` field that is either
//! a plain string or a list of field-level validation errors
//! (`{loc: [...], msg: "..."}`). Both shapes collapse to one readable
//! string here so no caller ever sees raw JSON.

use serde_json::Value;

/// Fallback when a body carries no recognizable message
const GENERIC_ERROR: &str = "An error occurred";

/// Extract a readable message from a failed response body
pub fn format_error(body: &Value) -> String {
    match body.get("detail").or_else(|| body.get("message")) {
        Some(inner) => extract(inner),
        None => extract(body),
    }
}

fn extract(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(entries) => {
            let messages: Vec<String> = entries.iter().map(field_error).collect();
            if messages.is_empty() {
                "Validation error".to_string()
            } else {
                messages.join(", ")
            }
        }
        Value::Object(obj) => {
            for key in ["detail", "message", "msg"] {
                if let Some(inner) = obj.get(key) {
                    return extract(inner);
                }
            }
            GENERIC_ERROR.to_string()
        }
        _ => GENERIC_ERROR.to_string(),
    }
}

/// Render one entry of a validation-error list
fn field_error(entry: &Value) -> String {
    if let Value::String(s) = entry {
        return s.clone();
    }
    match entry.get("msg").and_then(Value::as_str) {
        Some(msg) => {
            let loc = entry
                .get("loc")
                .and_then(Value::as_array)
                .map(|parts| {
                    parts
                        .iter()
                        .map(|p| match p {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .collect::<Vec<_>>()
                        .join(".")
                })
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "Field".to_string());
            format!("{loc}: {msg}")
        }
        None => entry.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_string() {
        let body = json!({"detail": "This username is reserved."});
        assert_eq!(format_error(&body), "This username is reserved.");
    }

    #[test]
    fn test_message_fallback() {
        let body = json!({"message": "Session expired"});
        assert_eq!(format_error(&body), "Session expired");
    }

    #[test]
    fn test_field_error_list() {
        let body = json!({"detail": [
            {"loc": ["body", "email"], "msg": "field required"},
            {"loc": ["body", "password"], "msg": "too short"}
        ]});
        assert_eq!(
            format_error(&body),
            "body.email: field required, body.password: too short"
        );
    }

    #[test]
    fn test_field_error_without_loc() {
        let body = json!({"detail": [{"msg": "invalid value"}]});
        assert_eq!(format_error(&body), "Field: invalid value");
    }

    #[test]
    fn test_list_of_strings() {
        let body = json!({"detail": ["first problem", "second problem"]});
        assert_eq!(format_error(&body), "first problem, second problem");
    }

    #[test]
    fn test_empty_list() {
        let body = json!({"detail": []});
        assert_eq!(format_error(&body), "Validation error");
    }

    #[test]
    fn test_nested_detail() {
        let body = json!({"detail": {"msg": "inner message"}});
        assert_eq!(format_error(&body), "inner message");
    }

    #[test]
    fn test_unrecognized_body() {
        assert_eq!(format_error(&json!({"weird": true})), GENERIC_ERROR);
        assert_eq!(format_error(&json!(42)), GENERIC_ERROR);
    }

    #[test]
    fn test_numeric_loc_segments() {
        let body = json!({"detail": [{"loc": ["body", "items", 0], "msg": "bad"}]});
        assert_eq!(format_error(&body), "body.items.0: bad");
    }
}
