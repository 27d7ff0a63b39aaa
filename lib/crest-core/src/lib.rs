//! Name-to-URL synthesis engine for the crest REST client generator.
//!
//! A symbolic name such as `getCompaniesCustomers` plus call arguments
//! resolves to an HTTP verb, a URL and a body:
//!
//! - [`split_method`] - verb prefix and remainder
//! - [`build_template`] - camelCase remainder to a [`PathTemplate`], with [`Keywords`] overrides
//! - [`classify`] - scalar path arguments vs structure arguments ([`Arg::is_scalar`])
//! - [`interpolate`] - slot filling with overflow segments
//! - [`extract`] - body vs query parameters
//! - [`encode_query`] - query string with repeated keys for arrays
//! - [`resolve`] and [`build_request`] - the whole pipeline
//!
//! Every step is pure and infallible. The [`Transport`] trait, [`Request`],
//! [`Response`] and [`Error`] describe the seam to the network.
//!
//! # Example
//!
//! ```
//! use crest_core::{Keywords, Method, args, build_request};
//! use serde_json::json;
//!
//! let keywords = Keywords::from([("CustomersStats", "customers-stats")]);
//! let request = build_request(
//!     "getCompaniesCustomersStats",
//!     args![134, 15, json!({ "period": "week" })],
//!     &keywords,
//! )
//! .expect("has a verb");
//!
//! assert_eq!(request.method, Method::Get);
//! assert_eq!(request.url, "companies/134/customers-stats/15?period=week");
//! ```

mod arg;
mod body;
mod error;
mod extract;
mod interpolate;
mod keywords;
mod method;
mod path_template;
pub mod prelude;
mod query;
mod request;
mod resolve;
mod response;
mod transport;

pub use arg::{Arg, ClassifiedArgs, classify};
pub use body::{BodyKind, JSON_CONTENT_TYPE, RequestBody, from_json, to_json};
pub use error::{Error, Result};
pub use extract::{Extracted, JSON_BODY_KEY, RAW_BODY_KEY, extract};
pub use interpolate::{encode_path_segment, interpolate};
pub use keywords::{Keywords, override_order};
pub use method::{Method, VERBS, split_method};
pub use path_template::{PathTemplate, SLOT, Segment, build_template};
pub use query::encode_query;
pub use request::Request;
pub use resolve::{ResolvedRequest, build_request, resolve};
pub use response::Response;
pub use transport::Transport;

pub use http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header};
