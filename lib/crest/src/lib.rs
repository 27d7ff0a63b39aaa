//! REST client generator for Rust.
//!
//! Call any REST endpoint by *name*: `getUsersDetails(12)` becomes
//! `GET {base}/users/12/details`. No API definition, no code generation.
//! Requests go through a hyper transport with tower middleware.
//!
//! # Example
//!
//! ```ignore
//! use crest::prelude::*;
//! use serde_json::json;
//!
//! let api = Crest::builder("https://api.example.com")
//!     .keyword("Accounts", "users")
//!     .build()?
//!     .configure("setBearer", args!["my-token"])?;
//!
//! // GET https://api.example.com/users/133?name=Jack
//! let response = api.call("getAccounts", args![133, json!({ "name": "Jack" })]).await?;
//!
//! // POST https://api.example.com/users  with a JSON body
//! let response = api
//!     .call("postAccounts", args![json!({ "$json": { "name": "Jack" } })])
//!     .await?;
//! ```
//!
//! See the [tutorial][_tutorial] for a complete guide.

pub mod _tutorial;
mod auth;
mod client;
mod config;
mod configure;
mod connector;
mod dispatch;
mod interceptor;
pub mod middleware;
pub mod prelude;

pub use auth::Auth;
pub use client::{BoxedService, HyperClient, HyperClientBuilder};
pub use config::{ClientConfig, DEFAULT_USER_AGENT};
pub use configure::{CONFIG_HANDLERS, ConfigHandler, Settings, find_handler};
pub use dispatch::{Crest, CrestBuilder, Dispatched};
pub use interceptor::{Interceptor, TagRequest};

// Re-export tower for middleware composition
pub use tower;

// Re-export the synthesis engine
pub use crest_core::{
    Arg, BodyKind, Error, JSON_BODY_KEY, JSON_CONTENT_TYPE, Keywords, Method, PathTemplate,
    RAW_BODY_KEY, Request, RequestBody, ResolvedRequest, Response, Result, Transport, VERBS,
    args, build_request, build_template, from_json, resolve, split_method, to_json,
};

pub use crest_core::{HeaderMap, HeaderName, HeaderValue, StatusCode, header};

pub use url;
