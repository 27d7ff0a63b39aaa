//! # Chapter 1: Names & Arguments
//!
//! ## Path Slots
//!
//! Scalars (strings, numbers, booleans, dates, patterns) are percent-encoded
//! and fill the slots left to right. Extra scalars are appended as trailing
//! segments:
//!
//! ```ignore
//! api.call("getUsers", args![12]).await?;                // users/12
//! api.call("getUsersDetails", args![12]).await?;         // users/12/details
//! api.call("getUsersDetails", args![12, "2024"]).await?; // users/12/details/2024
//! api.call("getUsersDetails", args![]).await?;           // users/details
//! ```
//!
//! `None` is [`Arg::Absent`](crate::Arg::Absent): it consumes a slot and
//! adds nothing.
//!
//! ## Keywords
//!
//! camelCase cannot express every path. Keywords map a name fragment to a
//! custom path; the replacement is used as-is (lowercased):
//!
//! ```ignore
//! let api = Crest::builder("https://api.github.com")
//!     .keyword("Repos", "repos/${}/${}")
//!     .keyword("CustomersStats", "customers-stats")
//!     .build()?;
//!
//! // GET https://api.github.com/repos/rust-lang/rust/contributors
//! api.call("getReposContributors", args!["rust-lang", "rust"]).await?;
//! ```
//!
//! Longer fragments are applied before shorter ones, so `CustomersStats`
//! wins over `Customers`.
//!
//! ## Query Parameters
//!
//! The first map argument becomes the query string. Arrays repeat the key:
//!
//! ```ignore
//! use serde_json::json;
//!
//! // GET .../users/133?name=Jack&tag=a&tag=b
//! api.call("getUsers", args![133, json!({ "name": "Jack", "tag": ["a", "b"] })]).await?;
//! ```
//!
//! ## Bodies
//!
//! Two reserved keys in that map carry the body instead of query params:
//!
//! | Key | Body |
//! |-----|------|
//! | `$json` | JSON encoded, `Content-Type: application/json` |
//! | `$body` | sent as-is (strings as UTF-8 text) |
//!
//! ```ignore
//! // POST .../users?notify=true  with body {"name":"Jack"}
//! api.call("postUsers", args![json!({ "notify": true, "$json": { "name": "Jack" } })]).await?;
//! ```
//!
//! A second map argument is a JSON body on its own:
//!
//! ```ignore
//! // PUT .../users/1  with body {"name":"Jill"}
//! api.call("putUsers", args![1, json!({}), json!({ "name": "Jill" })]).await?;
//! ```
//!
//! Use [`Arg::structure`](crate::Arg::structure) to pass any `Serialize` type.
//!
//! ## Next Steps
//!
//! - [Chapter 2: Responses & Errors][super::chapter_2]
