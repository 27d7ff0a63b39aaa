//! Authorization middleware.
//!
//! Adds the `Authorization` header of an [`Auth`] to every request that does
//! not already carry one, in any letter case.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use http::{HeaderValue, header::AUTHORIZATION};
use tower::{Layer, Service};

use crate::{Auth, Error, Request, Response, Result};

/// Layer that adds an `Authorization` header to requests.
///
/// # Example
///
/// ```ignore
/// use crest::{Auth, HyperClient, middleware::AuthLayer};
///
/// let transport = HyperClient::builder()
///     .layer(AuthLayer::new(&Auth::bearer("my-secret-token")))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct AuthLayer {
    header_value: std::result::Result<HeaderValue, String>,
}

impl AuthLayer {
    /// Create a new auth layer.
    ///
    /// Credentials that are not a valid header value make every request fail
    /// with [`Error::InvalidRequest`].
    #[must_use]
    pub fn new(auth: &Auth) -> Self {
        Self {
            header_value: auth.header_value().map_err(|err| err.to_string()),
        }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthService {
            inner,
            header_value: self.header_value.clone(),
        }
    }
}

/// Service that adds an `Authorization` header to requests.
#[derive(Debug, Clone)]
pub struct AuthService<S> {
    inner: S,
    header_value: std::result::Result<HeaderValue, String>,
}

impl<S> Service<Request> for AuthService<S>
where
    S: Service<Request, Response = Response, Error = Error> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<()>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request) -> Self::Future {
        let value = match &self.header_value {
            Ok(value) => value.clone(),
            Err(message) => {
                let err = Error::invalid_request(message.clone());
                return Box::pin(async move { Err(err) });
            }
        };
        request.headers_mut().entry(AUTHORIZATION).or_insert(value);

        // Call the instance that was polled ready.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        Box::pin(async move { inner.call(request).await })
    }
}
