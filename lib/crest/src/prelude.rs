//! Prelude module for convenient imports.
//!
//! ```ignore
//! use crest::prelude::*;
//! ```

pub use crate::{
    Arg, Auth, Crest, Dispatched, Error, HyperClient, Interceptor, Keywords, Method,
    ResolvedRequest, Response, Result, StatusCode, Transport, args,
};
pub use serde::{Deserialize, Serialize};
