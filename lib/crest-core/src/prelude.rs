//! Prelude module for convenient imports.
//!
//! ```ignore
//! use crest_core::prelude::*;
//! ```

pub use crate::{
    Arg, BodyKind, Error, Keywords, Method, PathTemplate, Request, RequestBody, ResolvedRequest,
    Response, Result, Transport, args, build_request, resolve, split_method,
};
