//! # Chapter 3: Configuration & Middleware
//!
//! ## Configuration Calls
//!
//! Names without a verb reconfigure the client. The original is unchanged;
//! a new client is returned:
//!
//! ```ignore
//! let api = api.configure("setBearer", args!["my-token"])?;
//! let api = api.configure("setHeader", args!["X-Tenant", "acme"])?;
//! ```
//!
//! | Name | Arguments |
//! |------|-----------|
//! | `setBearer` | token |
//! | `setBasic` | base64 hash, or username and password |
//! | `clearAuth` | - |
//! | `setHeader` | name, value |
//! | `removeHeader` | name |
//!
//! [`Crest::dispatch`](crate::Crest::dispatch) takes any name and does the
//! right thing, returning a [`Dispatched`](crate::Dispatched).
//!
//! ## Interceptors
//!
//! Interceptors transform every response, in registration order:
//!
//! ```ignore
//! use crest::{Crest, Response, ResolvedRequest, TagRequest};
//!
//! let api = Crest::builder("https://api.example.com")
//!     .interceptor(TagRequest)
//!     .intercept(|response: Response, request: &ResolvedRequest| {
//!         tracing::info!(url = %request.url, status = %response.status(), "done");
//!         response
//!     })
//!     .build()?;
//! ```
//!
//! ## Tower Middleware
//!
//! The default transport, [`HyperClient`](crate::HyperClient), accepts tower
//! layers. The first layer added is the outermost:
//!
//! ```ignore
//! use std::time::Duration;
//! use crest::{Crest, HyperClient};
//!
//! let transport = HyperClient::builder()
//!     .timeout(Duration::from_secs(10))
//!     .with_logging()                 // middleware-logging
//!     .with_concurrency_limit(8)      // middleware-concurrency
//!     .build();
//!
//! let api = Crest::builder("https://api.example.com")
//!     .transport(transport)
//!     .build()?;
//! ```
//!
//! ## Custom Transports
//!
//! Anything implementing [`Transport`](crate::Transport) can send requests,
//! which is handy for tests. It needs no `Default`:
//!
//! ```ignore
//! let api = Crest::builder("https://api.example.com")
//!     .transport(RecordingTransport::new(log))
//!     .build()?;
//! ```
