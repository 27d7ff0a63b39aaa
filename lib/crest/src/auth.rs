//! Authorization header providers.

use std::fmt;

use base64::Engine;
use http::HeaderValue;

use crate::{Error, Result};

/// Authorization scheme applied to every outgoing request.
#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    /// `Authorization: Bearer <token>`.
    Bearer(String),
    /// `Authorization: Basic <hash>`, where the hash is the base64 of
    /// `user:password`.
    Basic(String),
}

impl Auth {
    /// Bearer token authentication.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }

    /// Basic authentication from a username and password.
    pub fn basic(username: impl AsRef<str>, password: impl AsRef<str>) -> Self {
        let credentials = format!("{}:{}", username.as_ref(), password.as_ref());
        Self::Basic(base64::engine::general_purpose::STANDARD.encode(credentials))
    }

    /// Basic authentication from an already encoded hash.
    pub fn basic_hash(hash: impl Into<String>) -> Self {
        Self::Basic(hash.into())
    }

    /// The `Authorization` header value, flagged as sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the credentials contain characters
    /// that cannot appear in a header.
    pub fn header_value(&self) -> Result<HeaderValue> {
        let value = match self {
            Self::Bearer(token) => format!("Bearer {token}"),
            Self::Basic(hash) => format!("Basic {hash}"),
        };
        let mut value = HeaderValue::try_from(value).map_err(|_| {
            Error::invalid_request("credentials contain characters not allowed in a header")
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

// Credentials stay out of logs.
impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(_) => f.write_str("Auth::Bearer(..)"),
            Self::Basic(_) => f.write_str("Auth::Basic(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header() {
        let value = Auth::bearer("my-token").header_value().expect("valid");
        assert_eq!(value, "Bearer my-token");
        assert!(value.is_sensitive());
    }

    #[test]
    fn basic_encodes_credentials() {
        // "user:pass" -> "dXNlcjpwYXNz"
        let value = Auth::basic("user", "pass").header_value().expect("valid");
        assert_eq!(value, "Basic dXNlcjpwYXNz");
        assert_eq!(Auth::basic("user", "pass"), Auth::basic_hash("dXNlcjpwYXNz"));
    }

    #[test]
    fn control_characters_are_rejected() {
        let err = Auth::bearer("line\nbreak")
            .header_value()
            .expect_err("newline in a header");
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[test]
    fn debug_hides_credentials() {
        let debug = format!("{:?}", Auth::bearer("secret"));
        assert!(!debug.contains("secret"));
    }
}
