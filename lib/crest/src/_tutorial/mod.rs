//! # Tutorial: Talking to REST APIs with crest
//!
//! Learn how method names turn into HTTP requests.
//!
//! ## Chapters
//!
//! 1. [Getting Started][chapter_0] - Your first calls
//! 2. [Names & Arguments][chapter_1] - Paths, keywords, query strings, bodies
//! 3. [Responses & Errors][chapter_2] - Status codes, JSON, failures
//! 4. [Configuration & Middleware][chapter_3] - Auth, headers, interceptors, tower layers
//!
//! Ready? Start with [Chapter 0: Getting Started][chapter_0].

pub mod chapter_0;
pub mod chapter_1;
pub mod chapter_2;
pub mod chapter_3;
