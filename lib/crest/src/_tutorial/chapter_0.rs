//! # Chapter 0: Getting Started
//!
//! Your first crest calls in 5 minutes.
//!
//! ## What You'll Learn
//!
//! - Build a [`Crest`](crate::Crest) client for a base URL
//! - Send requests by *name* with [`Crest::call`](crate::Crest::call)
//! - Pass arguments with [`args!`](crate::args)
//!
//! ## Prerequisites
//!
//! Add to `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! crest = "0.1"
//! serde_json = "1"
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ## Your First Call
//!
//! ```ignore
//! use crest::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> crest::Result<()> {
//!     let api = Crest::builder("https://api.example.com").build()?;
//!
//!     // GET https://api.example.com/users/42
//!     let response = api.call("getUsers", args![42]).await?;
//!     println!("{}: {}", response.status(), String::from_utf8_lossy(response.body()));
//!     Ok(())
//! }
//! ```
//!
//! There is no API definition to write: the name *is* the definition.
//!
//! ## How a Name Becomes a Request
//!
//! ```text
//! getUsersDetails(12)
//! ^^^                    verb    -> GET
//!    ^^^^^^^^^^^^        path    -> users/${}/details
//!                 ^^     slot    -> users/12/details
//! ```
//!
//! - The verb prefix is one of `get`, `post`, `put`, `patch`, `delete`
//! - Each uppercase hump starts a new path segment
//! - Scalar arguments fill the slots between segments, in order
//!
//! ## Next Steps
//!
//! - [Chapter 1: Names & Arguments][super::chapter_1] - Keywords, query strings, bodies
