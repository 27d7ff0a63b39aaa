//! Splitting structure arguments into query parameters and a body.

use serde_json::{Map, Value};

use crate::{Arg, BodyKind, RequestBody};

/// Options-map key whose value is sent as a JSON body.
pub const JSON_BODY_KEY: &str = "$json";

/// Options-map key whose value is sent as a raw body.
pub const RAW_BODY_KEY: &str = "$body";

/// Query parameters and body taken from the structure arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extracted {
    /// Remaining keys of the options map.
    pub query: Map<String, Value>,
    /// Request body.
    pub body: RequestBody,
}

/// Decide what becomes the body and what becomes the query.
///
/// The first structure is the options map. A [`JSON_BODY_KEY`] or, failing
/// that, a [`RAW_BODY_KEY`] entry is removed from it and becomes the body.
/// Otherwise a second structure, if any, is the body verbatim. Whatever is
/// left in the options map becomes the query.
///
/// Structures past the second are ignored.
#[must_use]
pub fn extract(structures: impl IntoIterator<Item = Arg>) -> Extracted {
    let mut structures = structures.into_iter();

    let Some(opts) = structures.next() else {
        return Extracted::default();
    };

    let mut query = match opts {
        Arg::Map(map) => map,
        _ => Map::new(),
    };

    let body = if let Some(value) = query.shift_remove(JSON_BODY_KEY) {
        RequestBody::new(value, BodyKind::Json)
    } else if let Some(value) = query.shift_remove(RAW_BODY_KEY) {
        RequestBody::new(value, BodyKind::Raw)
    } else if let Some(second) = structures.next() {
        RequestBody::new(into_value(second), BodyKind::Positional)
    } else {
        RequestBody::empty()
    };

    Extracted { query, body }
}

fn into_value(arg: Arg) -> Value {
    match arg {
        Arg::Map(map) => Value::Object(map),
        Arg::List(list) => Value::Array(list),
        scalar => scalar
            .to_path_value()
            .map_or(Value::Null, Value::String),
    }
}
