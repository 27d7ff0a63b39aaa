//! Request bodies and JSON helpers.

use bytes::Bytes;
use http::HeaderValue;
use serde_json::{Map, Value};

use crate::Result;

/// MIME type of JSON bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Where a request body came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BodyKind {
    /// No structure supplied a body.
    #[default]
    Empty,
    /// Taken from the [`JSON_BODY_KEY`](crate::JSON_BODY_KEY) of the options map.
    Json,
    /// Taken from the [`RAW_BODY_KEY`](crate::RAW_BODY_KEY) of the options map.
    Raw,
    /// The second structure argument, used verbatim.
    Positional,
}

impl BodyKind {
    /// Content type the body should be sent with, if the client decides it.
    ///
    /// Raw bodies leave the choice to the transport.
    #[must_use]
    pub fn content_type(&self) -> Option<HeaderValue> {
        match self {
            Self::Json | Self::Positional => Some(HeaderValue::from_static(JSON_CONTENT_TYPE)),
            Self::Empty | Self::Raw => None,
        }
    }
}

/// The body of a resolved request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBody {
    /// Body value; an empty object when nothing supplied one.
    pub value: Value,
    /// Origin of the body.
    pub kind: BodyKind,
}

impl Default for RequestBody {
    fn default() -> Self {
        Self::empty()
    }
}

impl RequestBody {
    /// The empty-object body.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            value: Value::Object(Map::new()),
            kind: BodyKind::Empty,
        }
    }

    /// A body of the given kind.
    #[must_use]
    pub const fn new(value: Value, kind: BodyKind) -> Self {
        Self { value, kind }
    }

    /// Returns `true` if no structure supplied a body.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.kind, BodyKind::Empty)
    }

    /// Encode the body for the wire.
    ///
    /// Empty bodies encode to `None`. Raw strings are sent as-is; every other
    /// value is serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_bytes(&self) -> Result<Option<Bytes>> {
        match (&self.kind, &self.value) {
            (BodyKind::Empty, _) => Ok(None),
            (BodyKind::Raw, Value::String(text)) => Ok(Some(Bytes::from(text.clone()))),
            (_, value) => to_json(value).map(Some),
        }
    }
}

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use crest_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct User { name: String }
///
/// let user = User { name: "Alice".to_string() };
/// let bytes = to_json(&user).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"name":"Alice"}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// # Errors
///
/// Returns an error if JSON deserialization fails, with the error message
/// including the path to the problematic field (e.g., "user.address.city").
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn content_types() {
        let json = Some(HeaderValue::from_static("application/json"));
        assert_eq!(BodyKind::Json.content_type(), json);
        assert_eq!(BodyKind::Positional.content_type(), json);
        assert_eq!(BodyKind::Raw.content_type(), None);
        assert_eq!(BodyKind::Empty.content_type(), None);
    }

    #[test]
    fn empty_body_defaults_to_empty_object() {
        let body = RequestBody::default();
        assert!(body.is_empty());
        assert_eq!(body.value, json!({}));
        assert_eq!(body.to_bytes().expect("encode"), None);
    }

    #[test]
    fn json_body_bytes() {
        let body = RequestBody::new(json!({ "name": "Jack" }), BodyKind::Json);
        let bytes = body.to_bytes().expect("encode").expect("some body");
        assert_eq!(bytes.as_ref(), br#"{"name":"Jack"}"#);
    }

    #[test]
    fn raw_string_body_is_sent_verbatim() {
        let body = RequestBody::new(json!("hello"), BodyKind::Raw);
        let bytes = body.to_bytes().expect("encode").expect("some body");
        assert_eq!(bytes.as_ref(), b"hello");

        let body = RequestBody::new(json!([1, 2]), BodyKind::Raw);
        let bytes = body.to_bytes().expect("encode").expect("some body");
        assert_eq!(bytes.as_ref(), b"[1,2]");
    }

    #[test]
    fn from_json_missing_field_error_with_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Address {
            #[allow(dead_code)]
            city: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct User {
            #[allow(dead_code)]
            address: Address,
        }

        let result: Result<User> = from_json(br#"{"address":{}}"#);
        let msg = result.expect_err("should fail").to_string();
        assert!(msg.contains("address"), "Expected path 'address' in error: {msg}");
        assert!(msg.contains("city"), "Expected field 'city' in error: {msg}");
    }
}
