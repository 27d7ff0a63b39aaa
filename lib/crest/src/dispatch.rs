//! The dispatch surface: symbolic names in, HTTP responses out.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::{
    Arg, Auth, Error, HyperClient, Interceptor, Keywords, Request, ResolvedRequest, Response,
    Result, Transport, build_request,
    configure::{Settings, find_handler, parse_header},
    split_method,
};

/// Join a base URL and a relative path with exactly one `/` between them.
fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    let base = base.trim_end_matches('/');
    if path.starts_with('?') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Result of [`Crest::dispatch`].
#[derive(Debug)]
pub enum Dispatched<T> {
    /// The name carried a verb: the request was sent.
    Response(Response),
    /// The name was a configuration call: here is the reconfigured client.
    Configured(Crest<T>),
}

/// REST client driven by symbolic method names.
///
/// `getUsersDetails(12)` becomes `GET {base}/users/12/details`. Names
/// without a verb (`setBearer`, `setHeader`, ...) reconfigure the client.
///
/// # Example
///
/// ```ignore
/// use crest::{Crest, args};
/// use serde_json::json;
///
/// let api = Crest::builder("https://api.example.com")
///     .keyword("Accounts", "users")
///     .build()?
///     .configure("setBearer", args!["my-token"])?;
///
/// // GET https://api.example.com/users/133?name=Jack
/// let response = api.call("getAccounts", args![133, json!({ "name": "Jack" })]).await?;
/// ```
pub struct Crest<T = HyperClient> {
    base_url: Arc<str>,
    keywords: Keywords,
    settings: Settings,
    interceptors: Vec<Arc<dyn Interceptor>>,
    transport: Arc<T>,
}

impl<T> Clone for Crest<T> {
    fn clone(&self) -> Self {
        Self {
            base_url: Arc::clone(&self.base_url),
            keywords: self.keywords.clone(),
            settings: self.settings.clone(),
            interceptors: self.interceptors.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T> fmt::Debug for Crest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Crest")
            .field("base_url", &self.base_url)
            .field("keywords", &self.keywords)
            .field("settings", &self.settings)
            .field("interceptors_count", &self.interceptors.len())
            .finish_non_exhaustive()
    }
}

impl Crest<HyperClient> {
    /// Start building a client for the given base URL, sending through a
    /// default [`HyperClient`] unless [`CrestBuilder::transport`] swaps it.
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> CrestBuilder<HyperClient> {
        CrestBuilder::new(base_url, HyperClient::new())
    }
}

impl<T> Crest<T> {
    /// Base URL every path is joined to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Keyword overrides used for path synthesis.
    #[must_use]
    pub const fn keywords(&self) -> &Keywords {
        &self.keywords
    }

    /// Current request settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The transport requests are sent through.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve a symbolic name to an absolute request without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotARequest`] if the name does not start with a verb.
    pub fn resolve(
        &self,
        name: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<ResolvedRequest> {
        let args: Vec<Arg> = args.into_iter().collect();
        let structures = args.iter().filter(|arg| !arg.is_scalar()).count();
        if structures > 2 {
            debug!(method = name, structures, "ignoring structure arguments past the second");
        }

        let mut resolved = build_request(name, args, &self.keywords)
            .ok_or_else(|| Error::NotARequest(name.to_string()))?;
        resolved.url = join_url(&self.base_url, &resolved.url);

        trace!(method = name, verb = %resolved.method, url = %resolved.url, "resolved request");
        Ok(resolved)
    }

    /// Apply a configuration call and return the reconfigured client.
    ///
    /// The original client is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownConfiguration`] for names with no handler and
    /// [`Error::InvalidArgument`] when the handler rejects the arguments.
    pub fn configure(&self, name: &str, args: impl IntoIterator<Item = Arg>) -> Result<Self> {
        let handler =
            find_handler(name).ok_or_else(|| Error::UnknownConfiguration(name.to_string()))?;
        let args: Vec<Arg> = args.into_iter().collect();

        let mut configured = self.clone();
        handler(&mut configured.settings, &args)
            .map_err(|message| Error::invalid_argument(name, message))?;

        debug!(method = name, "client reconfigured");
        Ok(configured)
    }
}

impl<T: Transport> Crest<T> {
    /// Send the request described by a symbolic name.
    ///
    /// Non-2xx responses are returned as responses; transport errors are
    /// returned unchanged. Interceptors run on every response, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotARequest`] if the name has no verb, or any error
    /// from building the request or from the transport.
    pub async fn call(
        &self,
        name: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Response> {
        let resolved = self.resolve(name, args)?;
        let request = Request::from_resolved(&resolved, self.settings.request_headers()?)?;

        debug!(verb = %resolved.method, url = %resolved.url, "sending request");
        let response = self.transport.execute(request).await?;

        Ok(self
            .interceptors
            .iter()
            .fold(response, |response, interceptor| {
                interceptor.intercept(response, &resolved)
            }))
    }

    /// Send a request and decode a successful JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] for non-2xx responses, a deserialization error
    /// for unexpected bodies, or any error from [`Crest::call`].
    pub async fn call_json<R: serde::de::DeserializeOwned>(
        &self,
        name: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<R> {
        self.call(name, args).await?.error_for_status()?.json()
    }

    /// Single entry point: send names with a verb, configure the rest.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Crest::call`] or [`Crest::configure`].
    pub async fn dispatch(
        &self,
        name: &str,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Dispatched<T>> {
        if split_method(name).is_some() {
            self.call(name, args).await.map(Dispatched::Response)
        } else {
            self.configure(name, args).map(Dispatched::Configured)
        }
    }
}

/// Builder for [`Crest`].
///
/// Headers and credentials are checked by [`CrestBuilder::build`].
pub struct CrestBuilder<T> {
    base_url: String,
    keywords: BTreeMap<String, String>,
    headers: Vec<(String, String)>,
    auth: Option<Auth>,
    interceptors: Vec<Arc<dyn Interceptor>>,
    transport: T,
}

impl<T> fmt::Debug for CrestBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrestBuilder")
            .field("base_url", &self.base_url)
            .field("keywords", &self.keywords)
            .field("headers", &self.headers)
            .field("auth", &self.auth)
            .field("interceptors_count", &self.interceptors.len())
            .finish_non_exhaustive()
    }
}

impl<T> CrestBuilder<T> {
    /// A builder for the given base URL and transport.
    #[must_use]
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            keywords: BTreeMap::new(),
            headers: Vec::new(),
            auth: None,
            interceptors: Vec::new(),
            transport,
        }
    }

    /// Map a name fragment to a custom path, e.g. `("Accounts", "users")`.
    #[must_use]
    pub fn keyword(mut self, fragment: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.keywords.insert(fragment.into(), replacement.into());
        self
    }

    /// Add several keyword overrides.
    #[must_use]
    pub fn keywords<K, V>(mut self, keywords: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.keywords
            .extend(keywords.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Add a header sent with every request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Authorize every request.
    #[must_use]
    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Append a response interceptor.
    #[must_use]
    pub fn interceptor(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// Append a closure as a response interceptor.
    #[must_use]
    pub fn intercept<F>(self, f: F) -> Self
    where
        F: Fn(Response, &ResolvedRequest) -> Response + Send + Sync + 'static,
    {
        self.interceptor(f)
    }

    /// Send through another transport.
    #[must_use]
    pub fn transport<U>(self, transport: U) -> CrestBuilder<U> {
        CrestBuilder {
            base_url: self.base_url,
            keywords: self.keywords,
            headers: self.headers,
            auth: self.auth,
            interceptors: self.interceptors,
            transport,
        }
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the base URL cannot be parsed, and
    /// [`Error::InvalidRequest`] for a header or credentials that cannot be
    /// sent.
    pub fn build(self) -> Result<Crest<T>> {
        url::Url::parse(&self.base_url)?;

        let mut settings = Settings::default();
        for (name, value) in &self.headers {
            let (name, value) = parse_header(name, value).map_err(Error::invalid_request)?;
            settings.headers.insert(name, value);
        }
        if let Some(auth) = self.auth {
            auth.header_value()?;
            settings.auth = Some(auth);
        }

        Ok(Crest {
            base_url: Arc::from(self.base_url),
            keywords: Keywords::from(self.keywords),
            settings,
            interceptors: self.interceptors,
            transport: Arc::new(self.transport),
        })
    }
}
