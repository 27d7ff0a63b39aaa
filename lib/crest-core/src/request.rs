//! The wire form of a resolved request.

use bytes::Bytes;
use http::{HeaderMap, header::CONTENT_TYPE};

use crate::{Method, ResolvedRequest, Result};

/// What a [`Transport`](crate::Transport) sends: verb, absolute URL, headers
/// and encoded body.
///
/// Headers live in an [`http::HeaderMap`], so names compare
/// case-insensitively: `content-type` and `Content-Type` are one header.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: url::Url,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl Request {
    /// Put a resolved request on the wire with the given headers.
    ///
    /// `resolved.url` must be absolute. JSON and positional bodies always go
    /// out with `Content-Type: application/json`, replacing any content type
    /// in `headers`. An empty body sends no bytes.
    ///
    /// ```
    /// use crest_core::{Keywords, Request, args, build_request};
    /// use http::HeaderMap;
    /// use serde_json::json;
    ///
    /// let resolved = build_request(
    ///     "postUsers",
    ///     args![json!({ "$json": { "name": "Jack" } })],
    ///     &Keywords::new(),
    /// )
    /// .expect("has a verb");
    /// # let mut resolved = resolved;
    /// # resolved.url = format!("https://api.example.com/{}", resolved.url);
    ///
    /// let request = Request::from_resolved(&resolved, HeaderMap::new()).expect("valid");
    /// assert_eq!(request.header("content-type"), Some("application/json"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not absolute or the body cannot be encoded.
    pub fn from_resolved(resolved: &ResolvedRequest, mut headers: HeaderMap) -> Result<Self> {
        let url = url::Url::parse(&resolved.url)?;
        let body = resolved.body.to_bytes()?;

        if body.is_some()
            && let Some(content_type) = resolved.body.kind.content_type()
        {
            headers.insert(CONTENT_TYPE, content_type);
        }

        Ok(Self {
            method: resolved.method,
            url,
            headers,
            body,
        })
    }

    /// HTTP verb.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Absolute URL.
    #[must_use]
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// All headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Mutable headers, for middleware.
    #[must_use]
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// A header value by case-insensitive name, if it is valid text.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Encoded body; `None` when there is nothing to send.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Consume into (method, url, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Method, url::Url, HeaderMap, Option<Bytes>) {
        (self.method, self.url, self.headers, self.body)
    }
}
