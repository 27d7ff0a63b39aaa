//! The transport seam.
//!
//! The synthesis engine only decides *what* to send. A [`Transport`] sends
//! it. `crest` ships a hyper-based transport; tests and callers with special
//! needs plug in their own.

use std::future::Future;
use std::sync::Arc;

use crate::{Request, Response, Result};

/// Executes HTTP requests.
///
/// Implementations own connection handling. Errors (network failures,
/// timeouts) are returned to the caller as-is; non-2xx responses are plain
/// [`Response`]s.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use crest_core::{HeaderMap, Request, Response, Result, StatusCode, Transport};
///
/// #[derive(Clone)]
/// struct Echo;
///
/// impl Transport for Echo {
///     async fn execute(&self, request: Request) -> Result<Response> {
///         Ok(Response::new(
///             StatusCode::OK,
///             HeaderMap::new(),
///             Bytes::from(request.url().to_string()),
///         ))
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response>> + Send {
        (**self).execute(request)
    }
}

impl<T: Transport> Transport for &T {
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response>> + Send {
        (**self).execute(request)
    }
}
