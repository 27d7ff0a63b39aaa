//! Tower middleware layers for the crest transport.
//!
//! Layers wrap [`HyperClient`](crate::HyperClient) through
//! [`HyperClientBuilder::layer`](crate::HyperClientBuilder::layer). The first
//! layer added is the outermost one.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `middleware-logging` | `.with_logging()` helper |
//! | `middleware-auth` | `.with_auth()` helper |
//! | `middleware-concurrency` | `.with_concurrency_limit()` helper |
//! | `middleware-full` | All of the above |
//!
//! The layers themselves are always available.
//!
//! # Example
//!
//! ```ignore
//! use crest::{Auth, HyperClient};
//! use crest::middleware::{AuthLayer, LoggingLayer};
//!
//! let client = HyperClient::builder()
//!     .layer(LoggingLayer::new())
//!     .layer(AuthLayer::new(&Auth::bearer("my-token")))
//!     .build();
//! ```

mod auth;
mod logging;

pub use auth::{AuthLayer, AuthService};
pub use logging::{LogLevel, Logging, LoggingLayer};

// Re-export tower types for convenience
pub use tower::limit::ConcurrencyLimitLayer;
pub use tower::{Layer, ServiceBuilder};
