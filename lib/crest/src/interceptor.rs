//! Response interceptors.

use http::{HeaderName, HeaderValue};

use crate::{ResolvedRequest, Response};

/// A pure transform applied to every response after the transport returns.
///
/// Interceptors run in registration order, each receiving the previous one's
/// output together with the request that produced it.
///
/// Closures `Fn(Response, &ResolvedRequest) -> Response`
/// implement this trait.
pub trait Interceptor: Send + Sync {
    /// Transform a response.
    fn intercept(&self, response: Response, request: &ResolvedRequest) -> Response;
}

impl<F> Interceptor for F
where
    F: Fn(Response, &ResolvedRequest) -> Response + Send + Sync,
{
    fn intercept(&self, response: Response, request: &ResolvedRequest) -> Response {
        self(response, request)
    }
}

const METHOD_TAG: HeaderName = HeaderName::from_static("x-crest-method");
const URL_TAG: HeaderName = HeaderName::from_static("x-crest-url");

/// Interceptor that tags each response with the verb and URL that produced it.
///
/// Adds `X-Crest-Method` and `X-Crest-Url` headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagRequest;

impl Interceptor for TagRequest {
    fn intercept(&self, mut response: Response, request: &ResolvedRequest) -> Response {
        let tags = [
            (METHOD_TAG, request.method.to_string()),
            (URL_TAG, request.url.clone()),
        ];
        // Resolved URLs are percent-encoded; only a hand-built request can fail here.
        for (name, value) in tags {
            if let Ok(value) = HeaderValue::try_from(value) {
                response.headers_mut().insert(name, value);
            }
        }
        response
    }
}
