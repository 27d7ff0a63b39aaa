//! Call arguments and their classification.
//!
//! Every argument carries a runtime type tag. Scalars (strings, numbers,
//! dates, patterns, booleans, null and absent values) fill path slots;
//! structures (maps and lists) feed the query string and the body.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde_json::{Map, Number, Value};

/// A single call argument.
#[derive(Debug, Clone)]
pub enum Arg {
    /// Text.
    String(String),
    /// Integer or finite float.
    Number(Number),
    /// Point in time.
    Date(DateTime<Utc>),
    /// Regular expression.
    Pattern(Regex),
    /// Boolean.
    Bool(bool),
    /// Explicit null.
    Null,
    /// Missing value, e.g. an `Option::None`.
    Absent,
    /// Record of named fields.
    Map(Map<String, Value>),
    /// Ordered collection.
    List(Vec<Value>),
}

impl Arg {
    /// Returns `true` if this argument may fill a path slot.
    ///
    /// The answer depends only on the variant, never on the content:
    /// an empty string is scalar, an empty map is not.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::Map(_) | Self::List(_))
    }

    /// Convert any serializable value into an argument.
    ///
    /// Structs become [`Arg::Map`], sequences [`Arg::List`], and so on.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn structure<T: serde::Serialize>(value: &T) -> crate::Result<Self> {
        Ok(serde_json::to_value(value)?.into())
    }

    /// Render a scalar the way it appears inside a path segment.
    ///
    /// Returns `None` for [`Arg::Absent`] and for structures.
    #[must_use]
    pub fn to_path_value(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Number(n) => Some(n.to_string()),
            Self::Date(date) => Some(date.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::Pattern(re) => Some(format!("/{}/", re.as_str())),
            Self::Bool(b) => Some(b.to_string()),
            Self::Null => Some("null".to_string()),
            Self::Absent | Self::Map(_) | Self::List(_) => None,
        }
    }
}

impl PartialEq for Arg {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Null, Self::Null) | (Self::Absent, Self::Absent) => true,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "<absent>"),
            Self::Map(map) => write!(f, "{}", Value::Object(map.clone())),
            Self::List(list) => write!(f, "{}", Value::Array(list.clone())),
            scalar => write!(f, "{}", scalar.to_path_value().unwrap_or_default()),
        }
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(list) => Self::List(list),
            Value::Object(map) => Self::Map(map),
        }
    }
}

impl From<Map<String, Value>> for Arg {
    fn from(map: Map<String, Value>) -> Self {
        Self::Map(map)
    }
}

impl From<Vec<Value>> for Arg {
    fn from(list: Vec<Value>) -> Self {
        Self::List(list)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<DateTime<Utc>> for Arg {
    fn from(date: DateTime<Utc>) -> Self {
        Self::Date(date)
    }
}

impl From<Regex> for Arg {
    fn from(re: Regex) -> Self {
        Self::Pattern(re)
    }
}

/// `()` stands for "no value here": it consumes a slot without rendering.
impl From<()> for Arg {
    fn from((): ()) -> Self {
        Self::Absent
    }
}

impl<T: Into<Self>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(n: $ty) -> Self {
                    Self::Number(Number::from(n))
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Arg {
    /// Non-finite floats have no JSON form and become [`Arg::Null`].
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Self::Null, Self::Number)
    }
}

impl From<f32> for Arg {
    fn from(n: f32) -> Self {
        Self::from(f64::from(n))
    }
}

/// Build a `Vec<Arg>` from heterogeneous values.
///
/// ```
/// use crest_core::{Arg, args};
/// use serde_json::json;
///
/// let args = args![133, "jack", json!({ "page": 2 })];
/// assert_eq!(args.len(), 3);
/// assert!(!args[2].is_scalar());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($arg)),+]
    };
}

/// Arguments split into path values and structures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedArgs {
    /// Scalars, in call order.
    pub path: Vec<Arg>,
    /// Maps and lists, in call order.
    pub structures: Vec<Arg>,
}

/// Partition arguments into scalars and structures.
///
/// The partition is stable and total: relative order is kept inside each
/// bucket and every argument lands in exactly one of them.
#[must_use]
pub fn classify(args: impl IntoIterator<Item = Arg>) -> ClassifiedArgs {
    let (path, structures) = args.into_iter().partition(Arg::is_scalar);
    ClassifiedArgs { path, structures }
}
