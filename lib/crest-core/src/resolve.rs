//! Request assembly: symbolic name plus arguments to method, URL and body.

use crate::{
    Arg, Keywords, Method, RequestBody, build_template, classify, encode_query, extract,
    interpolate, split_method,
};

/// Everything the transport needs to know about a synthesised request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    /// HTTP verb.
    pub method: Method,
    /// Path plus optional query string (absolute once joined to a base URL).
    pub url: String,
    /// Request body.
    pub body: RequestBody,
}

/// Resolve the URL and body for the part of a name after its verb.
///
/// The URL is relative: no base and no leading `/`. A `?` is added only when
/// there is at least one query parameter.
///
/// ```
/// use crest_core::{Keywords, args, resolve};
/// use serde_json::json;
///
/// let keywords = Keywords::from([("Accounts", "users")]);
/// let (url, body) = resolve("Accounts", args![133, json!({ "name": "Jack" })], &keywords);
/// assert_eq!(url, "users/133?name=Jack");
/// assert!(body.is_empty());
/// ```
#[must_use]
pub fn resolve(
    remainder: &str,
    args: impl IntoIterator<Item = Arg>,
    keywords: &Keywords,
) -> (String, RequestBody) {
    let template = build_template(remainder, keywords);
    let classified = classify(args);
    let mut url = interpolate(&template, classified.path);

    let extracted = extract(classified.structures);
    let query = encode_query(&extracted.query);
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }

    (url, extracted.body)
}

/// Resolve a full symbolic name such as `getUsersDetails`.
///
/// Returns `None` when the name does not start with a verb.
#[must_use]
pub fn build_request(
    name: &str,
    args: impl IntoIterator<Item = Arg>,
    keywords: &Keywords,
) -> Option<ResolvedRequest> {
    let (method, remainder) = split_method(name)?;
    let (url, body) = resolve(remainder, args, keywords);
    Some(ResolvedRequest { method, url, body })
}
