//! Default transport: hyper-util over rustls, wrapped in tower layers.

use std::sync::{Arc, Mutex, PoisonError};
use std::task::{Context, Poll};
use std::time::Duration;

use bytes::Bytes;
use http::{HeaderValue, header::USER_AGENT};
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tower::util::BoxCloneService;
use tower::{Layer, ServiceExt};
use tower_service::Service;

use crate::{Error, Request, Response, Result, Transport, config::ClientConfig, connector};

#[cfg(feature = "middleware-auth")]
use crate::{Auth, middleware::AuthLayer};
#[cfg(feature = "middleware-logging")]
use crate::middleware::LoggingLayer;
#[cfg(feature = "middleware-concurrency")]
use tower::limit::ConcurrencyLimitLayer;

/// A layered transport with its concrete type erased.
pub type BoxedService = BoxCloneService<Request, Response, Error>;

type Wrap = Box<dyn FnOnce(BoxedService) -> BoxedService + Send>;

/// The innermost service: one hyper exchange per request.
#[derive(Clone)]
struct Exchange {
    client: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    config: Arc<ClientConfig>,
}

impl Exchange {
    fn new(config: Arc<ClientConfig>) -> Self {
        let client = Client::builder(TokioExecutor::new())
            .build(connector::https_connector(config.connect_timeout));
        Self { client, config }
    }

    async fn send(self, request: Request) -> Result<Response> {
        let request = into_hyper(request, &self.config.user_agent)?;
        tokio::time::timeout(self.config.timeout, self.round_trip(request))
            .await
            .map_err(|_| Error::Timeout)?
    }

    async fn round_trip(&self, request: http::Request<Full<Bytes>>) -> Result<Response> {
        let response = self.client.request(request).await.map_err(classify)?;
        let (parts, body) = response.into_parts();
        let body = body
            .collect()
            .await
            .map_err(|err| Error::connection(err.to_string()))?
            .to_bytes();
        Ok(Response::new(parts.status, parts.headers, body))
    }
}

impl Service<Request> for Exchange {
    type Response = Response;
    type Error = Error;
    type Future = std::pin::Pin<Box<dyn Future<Output = Result<Response>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        Box::pin(self.clone().send(request))
    }
}

fn into_hyper(request: Request, user_agent: &HeaderValue) -> Result<http::Request<Full<Bytes>>> {
    let (method, url, mut headers, body) = request.into_parts();
    let uri = url
        .as_str()
        .parse::<http::Uri>()
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    headers
        .entry(USER_AGENT)
        .or_insert_with(|| user_agent.clone());

    let mut hyper_request = http::Request::new(body.map_or_else(Full::default, Full::new));
    *hyper_request.method_mut() = method.into();
    *hyper_request.uri_mut() = uri;
    *hyper_request.headers_mut() = headers;
    Ok(hyper_request)
}

#[allow(clippy::needless_pass_by_value)]
fn classify(err: hyper_util::client::legacy::Error) -> Error {
    if is_tls_failure(&err) {
        Error::tls(err.to_string())
    } else {
        Error::connection(err.to_string())
    }
}

fn is_tls_failure(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(err) = current {
        if err.is::<rustls::Error>() {
            return true;
        }
        if let Some(io) = err.downcast_ref::<std::io::Error>()
            && io.get_ref().is_some_and(|inner| inner.is::<rustls::Error>())
        {
            return true;
        }
        current = err.source();
    }
    false
}

/// HTTP transport over hyper-util with rustls and tower middleware.
///
/// Cloning is cheap: clones share the connection pool and the layer stack.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
///
/// use crest::{Crest, HyperClient};
///
/// let transport = HyperClient::builder()
///     .timeout(Duration::from_secs(5))
///     .with_logging()
///     .build();
///
/// let api = Crest::builder("https://api.example.com")
///     .transport(transport)
///     .build()?;
/// ```
#[derive(Clone)]
pub struct HyperClient {
    // BoxCloneService is not Sync; each call clones it out of the lock.
    service: Arc<Mutex<BoxedService>>,
    config: Arc<ClientConfig>,
}

impl std::fmt::Debug for HyperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperClient {
    /// A transport with default timeouts and no middleware.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start configuring a transport.
    #[must_use]
    pub fn builder() -> HyperClientBuilder {
        HyperClientBuilder::default()
    }

    /// Timeouts and user agent in effect.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn service(&self) -> BoxedService {
        self.service
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for HyperClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HyperClient {
    async fn execute(&self, request: Request) -> Result<Response> {
        self.service().oneshot(request).await
    }
}

/// Builder for [`HyperClient`].
///
/// Layers wrap the transport in the order they are added: the first one added
/// sees each request first.
#[derive(Default)]
pub struct HyperClientBuilder {
    config: ClientConfig,
    layers: Vec<Wrap>,
}

impl std::fmt::Debug for HyperClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClientBuilder")
            .field("config", &self.config)
            .field("layers", &self.layers.len())
            .finish()
    }
}

impl HyperClientBuilder {
    /// Budget for a whole exchange, body included.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Budget for opening the connection.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// `User-Agent` for requests that do not set one.
    #[must_use]
    pub fn user_agent(mut self, user_agent: HeaderValue) -> Self {
        self.config.user_agent = user_agent;
        self
    }

    /// Wrap the transport in a tower layer.
    #[must_use]
    pub fn layer<L>(mut self, layer: L) -> Self
    where
        L: Layer<BoxedService> + Send + 'static,
        L::Service: Service<Request, Response = Response, Error = Error> + Clone + Send + 'static,
        <L::Service as Service<Request>>::Future: Send + 'static,
    {
        self.layers
            .push(Box::new(move |inner| BoxCloneService::new(layer.layer(inner))));
        self
    }

    /// Log each exchange at info level.
    #[cfg(feature = "middleware-logging")]
    #[must_use]
    pub fn with_logging(self) -> Self {
        self.layer(LoggingLayer::new())
    }

    /// Log each exchange at debug level, with redacted headers.
    #[cfg(feature = "middleware-logging")]
    #[must_use]
    pub fn with_debug_logging(self) -> Self {
        self.layer(LoggingLayer::debug())
    }

    /// Authorize requests that carry no `Authorization` header.
    #[cfg(feature = "middleware-auth")]
    #[must_use]
    pub fn with_auth(self, auth: &Auth) -> Self {
        self.layer(AuthLayer::new(auth))
    }

    /// Cap the number of exchanges in flight.
    #[cfg(feature = "middleware-concurrency")]
    #[must_use]
    pub fn with_concurrency_limit(self, max: usize) -> Self {
        self.layer(ConcurrencyLimitLayer::new(max))
    }

    /// Assemble the transport.
    #[must_use]
    pub fn build(self) -> HyperClient {
        let config = Arc::new(self.config);
        let exchange: BoxedService = BoxCloneService::new(Exchange::new(Arc::clone(&config)));
        let service = self
            .layers
            .into_iter()
            .rev()
            .fold(exchange, |inner, wrap| wrap(inner));

        HyperClient {
            service: Arc::new(Mutex::new(service)),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use http::HeaderMap;

    use super::*;
    use crate::{Method, RequestBody, ResolvedRequest};

    fn request(headers: HeaderMap) -> Request {
        let resolved = ResolvedRequest {
            method: Method::Delete,
            url: "https://api.example.com/users/1?hard=true".to_string(),
            body: RequestBody::empty(),
        };
        Request::from_resolved(&resolved, headers).expect("request")
    }

    #[test]
    fn builder_sets_config() {
        let client = HyperClient::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(2))
            .user_agent(HeaderValue::from_static("reports/2.1"))
            .build();

        assert_eq!(client.config().timeout, Duration::from_secs(60));
        assert_eq!(client.config().connect_timeout, Duration::from_secs(2));
        assert_eq!(client.config().user_agent, "reports/2.1");
        assert!(format!("{client:?}").contains("reports/2.1"));
    }

    #[test]
    fn hyper_request_carries_method_uri_and_default_user_agent() {
        let agent = HeaderValue::from_static("crest/test");
        let hyper_request = into_hyper(request(HeaderMap::new()), &agent).expect("request");

        assert_eq!(hyper_request.method(), http::Method::DELETE);
        assert_eq!(hyper_request.uri(), "https://api.example.com/users/1?hard=true");
        assert_eq!(hyper_request.headers().get(USER_AGENT), Some(&agent));
    }

    #[test]
    fn hyper_request_keeps_caller_user_agent() {
        let mut headers = HeaderMap::new();
        headers.insert("user-agent", HeaderValue::from_static("custom"));

        let agent = HeaderValue::from_static("crest/test");
        let hyper_request = into_hyper(request(headers), &agent).expect("request");

        let agents: Vec<_> = hyper_request.headers().get_all(USER_AGENT).iter().collect();
        assert_eq!(agents, [&HeaderValue::from_static("custom")]);
    }

    #[test]
    fn plain_io_errors_are_not_tls() {
        let err = std::io::Error::other("connection reset");
        assert!(!is_tls_failure(&err));

        let err = std::io::Error::other(rustls::Error::DecryptError);
        assert!(is_tls_failure(&err));
    }
}
