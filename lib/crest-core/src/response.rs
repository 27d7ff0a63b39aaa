//! What a transport hands back, and what interceptors rewrite.

use bytes::Bytes;
use http::{HeaderMap, StatusCode};

use crate::{Error, Result};

/// A fully buffered HTTP response.
///
/// Non-2xx statuses are ordinary responses; [`Response::error_for_status`]
/// turns them into errors on demand.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    /// Assemble a response, usually inside a transport.
    #[must_use]
    pub const fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// All headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Mutable headers, for interceptors.
    #[must_use]
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// A header value by case-insensitive name, if it is valid text.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Buffered body.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consume into the body.
    #[must_use]
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Status is 2xx.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Rewrite the body, keeping status and headers.
    #[must_use]
    pub fn map_body(self, f: impl FnOnce(Bytes) -> Bytes) -> Self {
        Self {
            body: f(self.body),
            ..self
        }
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::JsonDeserialization`] with the path of the first
    /// mismatch.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        crate::from_json(&self.body)
    }

    /// The body as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid UTF-8.
    pub fn text(&self) -> std::result::Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.body)
    }

    /// Keep 2xx responses, reject the rest as [`Error::Http`].
    ///
    /// # Errors
    ///
    /// Returns the rejected status and body when the status is not 2xx.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::from_response(self.status, self.body))
        }
    }
}

#[cfg(test)]
mod tests {
    use http::{HeaderValue, header::CONTENT_TYPE};

    use super::*;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Repo {
        name: String,
        stars: u32,
    }

    #[test]
    fn headers_are_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let response = Response::new(StatusCode::OK, headers, Bytes::new());

        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("X-Missing"), None);
    }

    #[test]
    fn decodes_json_and_text() {
        let response = Response::new(
            StatusCode::OK,
            HeaderMap::new(),
            Bytes::from(r#"{"name":"crest","stars":3}"#),
        );

        assert_eq!(response.text(), Ok(r#"{"name":"crest","stars":3}"#));
        let repo: Repo = response.json().expect("repo");
        assert_eq!(
            repo,
            Repo {
                name: "crest".to_string(),
                stars: 3
            }
        );
    }

    #[test]
    fn json_mismatch_reports_the_path() {
        let response = Response::new(
            StatusCode::OK,
            HeaderMap::new(),
            Bytes::from(r#"{"name":"crest","stars":"many"}"#),
        );

        let err = response.json::<Repo>().expect_err("stars is not a number");
        assert!(matches!(err, Error::JsonDeserialization { ref path, .. } if path == "stars"));
    }

    #[test]
    fn error_for_status_keeps_the_body() {
        let ok = Response::new(StatusCode::NO_CONTENT, HeaderMap::new(), Bytes::new());
        assert!(ok.error_for_status().is_ok());

        let missing = Response::new(StatusCode::NOT_FOUND, HeaderMap::new(), Bytes::from("nope"));
        let err = missing.error_for_status().expect_err("404 is an error");
        assert_eq!(err.to_string(), "HTTP error 404: Not Found");
        assert_eq!(err.body(), Some(&Bytes::from("nope")));
    }

    #[test]
    fn map_body_keeps_status_and_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-page", HeaderValue::from_static("2"));
        let response = Response::new(StatusCode::ACCEPTED, headers, Bytes::from("abc"));

        let mapped = response.map_body(|body| body.slice(1..));

        assert_eq!(mapped.status(), StatusCode::ACCEPTED);
        assert_eq!(mapped.header("X-Page"), Some("2"));
        assert_eq!(mapped.body(), &Bytes::from("bc"));
    }
}
