//! Query string encoding.

use serde_json::{Map, Value};
use url::form_urlencoded;

/// Serialize query parameters as `application/x-www-form-urlencoded`.
///
/// Keys keep their insertion order. An array value repeats its key once per
/// element. An empty map yields an empty string, in which case the caller
/// should leave out the `?`.
///
/// ```
/// use crest_core::encode_query;
/// use serde_json::json;
///
/// let params = json!({ "name": ["Jack", "Daniels"] });
/// let params = params.as_object().expect("object");
/// assert_eq!(encode_query(params), "name=Jack&name=Daniels");
/// ```
#[must_use]
pub fn encode_query(params: &Map<String, Value>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (key, value) in params {
        match value {
            Value::Array(items) => {
                for item in items {
                    serializer.append_pair(key, &query_value(item));
                }
            }
            other => {
                serializer.append_pair(key, &query_value(other));
            }
        }
    }

    serializer.finish()
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested @ (Value::Array(_) | Value::Object(_)) => nested.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn encode(value: &Value) -> String {
        encode_query(value.as_object().expect("object"))
    }

    #[test]
    fn empty_params() {
        assert_eq!(encode(&json!({})), "");
    }

    #[test]
    fn simple_pairs_keep_order() {
        assert_eq!(
            encode(&json!({ "name": "Jack", "age": 42, "admin": false })),
            "name=Jack&age=42&admin=false"
        );
    }

    #[test]
    fn arrays_repeat_the_key() {
        assert_eq!(
            encode(&json!({ "name": ["Jack", "Daniels"] })),
            "name=Jack&name=Daniels"
        );
        assert_eq!(encode(&json!({ "id": [] })), "");
    }

    #[test]
    fn keys_and_values_are_encoded() {
        assert_eq!(
            encode(&json!({ "name[$ne]": "Jack" })),
            "name%5B%24ne%5D=Jack"
        );
        assert_eq!(encode(&json!({ "q": "a b&c" })), "q=a+b%26c");
    }

    #[test]
    fn null_and_nested_values() {
        assert_eq!(encode(&json!({ "deleted": null })), "deleted=");
        assert_eq!(
            encode(&json!({ "range": { "min": 1 } })),
            "range=%7B%22min%22%3A1%7D"
        );
        assert_eq!(
            encode(&json!({ "pairs": [[1, 2], "x"] })),
            "pairs=%5B1%2C2%5D&pairs=x"
        );
    }
}
