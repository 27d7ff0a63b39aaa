//! # Chapter 2: Responses & Errors
//!
//! ## Responses
//!
//! [`Crest::call`](crate::Crest::call) returns the raw
//! [`Response`](crate::Response) whatever the status code. Decode it
//! yourself, or use [`Crest::call_json`](crate::Crest::call_json):
//!
//! ```ignore
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! let user: User = api.call_json("getUsers", args![42]).await?;
//! ```
//!
//! `call_json` turns non-2xx responses into [`Error::Http`](crate::Error::Http)
//! with [`Response::error_for_status`](crate::Response::error_for_status).
//!
//! ## Error Types
//!
//! | Error | When |
//! |-------|------|
//! | `Http` | non-2xx status (only via `error_for_status`) |
//! | `Connection` | network failure |
//! | `Tls` | TLS handshake failure |
//! | `Timeout` | request took longer than the configured timeout |
//! | `NotARequest` | the name has no verb prefix |
//! | `UnknownConfiguration` | the name is neither a verb nor a known configuration |
//! | `InvalidArgument` | a configuration call got the wrong arguments |
//! | `JsonDeserialization` | the body did not match the target type |
//!
//! ```ignore
//! match api.call_json::<User>("getUsers", args![42]).await {
//!     Ok(user) => println!("{user:?}"),
//!     Err(e) if e.status() == Some(404) => println!("no such user"),
//!     Err(e) if e.is_timeout() => println!("too slow"),
//!     Err(e) => return Err(e),
//! }
//! ```
//!
//! The rejected body stays available through
//! [`Error::body`](crate::Error::body):
//!
//! ```ignore
//! if let Some(body) = err.body() {
//!     let details: serde_json::Value = crest::from_json(body)?;
//! }
//! ```
//!
//! Header lookups ignore case: `response.header("etag")` finds `ETag`.
//!
//! ## Next Steps
//!
//! - [Chapter 3: Configuration & Middleware][super::chapter_3]
