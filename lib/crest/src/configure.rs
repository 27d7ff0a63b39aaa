//! Configuration calls: names that carry no HTTP verb.
//!
//! `setBearer("token")` and friends do not produce requests; they change the
//! headers every later request carries. Handlers are looked up by name in
//! [`CONFIG_HANDLERS`].
//!
//! Header names are case-insensitive throughout: `setHeader("x-trace", ..)`
//! and `removeHeader("X-Trace")` address the same header.

use http::{HeaderMap, HeaderName, HeaderValue, header::AUTHORIZATION};

use crate::{Arg, Auth, Result};

/// Per-client request settings changed by configuration calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Headers added to every request.
    pub headers: HeaderMap,
    /// Authorization scheme, if any.
    pub auth: Option<Auth>,
}

impl Settings {
    /// Headers for an outgoing request: defaults, then auth on top.
    ///
    /// The auth header replaces any default `Authorization` header, whatever
    /// its case.
    ///
    /// # Errors
    ///
    /// Returns an error if the auth credentials are not a valid header value.
    pub fn request_headers(&self) -> Result<HeaderMap> {
        let mut headers = self.headers.clone();
        if let Some(auth) = &self.auth {
            headers.insert(AUTHORIZATION, auth.header_value()?);
        }
        Ok(headers)
    }
}

/// A configuration handler. The error string explains what was wrong with
/// the arguments.
pub type ConfigHandler = fn(&mut Settings, &[Arg]) -> std::result::Result<(), String>;

/// Configuration methods understood by [`Crest::configure`](crate::Crest::configure).
pub const CONFIG_HANDLERS: &[(&str, ConfigHandler)] = &[
    ("setBearer", set_bearer),
    ("setBasic", set_basic),
    ("clearAuth", clear_auth),
    ("setHeader", set_header),
    ("removeHeader", remove_header),
];

/// Look up a configuration handler by name.
#[must_use]
pub fn find_handler(name: &str) -> Option<ConfigHandler> {
    CONFIG_HANDLERS
        .iter()
        .find(|(handler_name, _)| *handler_name == name)
        .map(|(_, handler)| *handler)
}

pub(crate) fn parse_header_name(name: &str) -> std::result::Result<HeaderName, String> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|_| format!("`{name}` is not a header name"))
}

pub(crate) fn parse_header(
    name: &str,
    value: &str,
) -> std::result::Result<(HeaderName, HeaderValue), String> {
    let name = parse_header_name(name)?;
    let value =
        HeaderValue::from_str(value).map_err(|_| format!("invalid value for header `{name}`"))?;
    Ok((name, value))
}

fn string_at(args: &[Arg], index: usize, what: &str) -> std::result::Result<String, String> {
    match args.get(index) {
        Some(Arg::String(s)) => Ok(s.clone()),
        Some(other) => Err(format!("expected {what} as a string, got `{other}`")),
        None => Err(format!("missing {what}")),
    }
}

fn expect_arity(args: &[Arg], allowed: &[usize]) -> std::result::Result<(), String> {
    if allowed.contains(&args.len()) {
        Ok(())
    } else {
        Err(format!("unexpected argument count {}", args.len()))
    }
}

fn set_auth(settings: &mut Settings, auth: Auth) -> std::result::Result<(), String> {
    auth.header_value().map_err(|err| err.to_string())?;
    settings.auth = Some(auth);
    Ok(())
}

fn set_bearer(settings: &mut Settings, args: &[Arg]) -> std::result::Result<(), String> {
    expect_arity(args, &[1])?;
    set_auth(settings, Auth::bearer(string_at(args, 0, "token")?))
}

fn set_basic(settings: &mut Settings, args: &[Arg]) -> std::result::Result<(), String> {
    expect_arity(args, &[1, 2])?;
    let auth = if args.len() == 2 {
        Auth::basic(
            string_at(args, 0, "username")?,
            string_at(args, 1, "password")?,
        )
    } else {
        Auth::basic_hash(string_at(args, 0, "hash")?)
    };
    set_auth(settings, auth)
}

fn clear_auth(settings: &mut Settings, args: &[Arg]) -> std::result::Result<(), String> {
    expect_arity(args, &[0])?;
    settings.auth = None;
    Ok(())
}

fn set_header(settings: &mut Settings, args: &[Arg]) -> std::result::Result<(), String> {
    expect_arity(args, &[2])?;
    let name = string_at(args, 0, "header name")?;
    let value = args
        .get(1)
        .and_then(Arg::to_path_value)
        .ok_or_else(|| "expected a scalar header value".to_string())?;
    let (name, value) = parse_header(&name, &value)?;
    settings.headers.insert(name, value);
    Ok(())
}

fn remove_header(settings: &mut Settings, args: &[Arg]) -> std::result::Result<(), String> {
    expect_arity(args, &[1])?;
    let name = parse_header_name(&string_at(args, 0, "header name")?)?;
    settings.headers.remove(name);
    Ok(())
}
