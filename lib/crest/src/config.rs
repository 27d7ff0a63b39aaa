//! Transport settings for [`HyperClient`](crate::HyperClient).

use std::time::Duration;

use http::HeaderValue;

/// `User-Agent` sent when a request does not carry one.
pub const DEFAULT_USER_AGENT: &str = concat!("crest/", env!("CARGO_PKG_VERSION"));

/// Timeouts and identity of the hyper transport.
///
/// Set through [`HyperClientBuilder`](crate::HyperClientBuilder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Budget for a whole exchange: connecting, sending and reading the body.
    pub timeout: Duration,
    /// Budget for opening the TCP connection.
    pub connect_timeout: Duration,
    /// Added unless the request sets its own.
    pub user_agent: HeaderValue,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: HeaderValue::from_static(DEFAULT_USER_AGENT),
        }
    }
}
