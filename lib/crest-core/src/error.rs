//! Errors raised around the synthesis engine.
//!
//! Turning a name into a URL never fails. Everything else can: parsing the
//! base URL, validating headers, configuration calls with bad arguments, and
//! the network itself.

use bytes::Bytes;
use derive_more::{Display, Error, From};
use http::StatusCode;

/// Error type shared by `crest-core` and `crest`.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// A response was rejected because of its status code.
    #[display("HTTP error {status}: {message}")]
    #[from(skip)]
    Http {
        /// Status code of the rejected response.
        status: u16,
        /// Canonical reason phrase.
        message: String,
        /// Body of the rejected response.
        #[error(not(source))]
        body: Bytes,
    },

    /// The connection could not be made or broke off.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// The TLS handshake failed.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// No response within the transport's timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// The request could not be put on the wire (bad header, bad URI, ...).
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// The symbolic name does not start with a known HTTP verb.
    #[display("`{_0}` is not a request method")]
    #[from(skip)]
    NotARequest(#[error(not(source))] String),

    /// No configuration handler is registered under this name.
    #[display("unknown configuration method `{_0}`")]
    #[from(skip)]
    UnknownConfiguration(#[error(not(source))] String),

    /// A configuration handler received arguments it cannot use.
    #[display("invalid argument for `{method}`: {message}")]
    #[from(skip)]
    InvalidArgument {
        /// Configuration method name.
        method: String,
        /// What was wrong with the arguments.
        message: String,
    },

    /// A body could not be encoded as JSON.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// A response body did not match the expected shape.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// Path to the offending field, e.g. `owner.login`.
        path: String,
        /// Decoder message.
        message: String,
    },

    /// The base URL or a resolved URL is not a valid absolute URL.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Reject a response with the given status, keeping its body.
    #[must_use]
    pub fn from_response(status: StatusCode, body: Bytes) -> Self {
        Self::Http {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string(),
            body,
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create an invalid argument error for a configuration method.
    #[must_use]
    pub fn invalid_argument(method: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            method: method.into(),
            message: message.into(),
        }
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` for [`Error::Timeout`].
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` for [`Error::Connection`].
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Status code of a rejected response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Body of a rejected response.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        match self {
            Self::Http { body, .. } => Some(body),
            _ => None,
        }
    }
}
