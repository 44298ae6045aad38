//! Prelude module for convenient imports.
//!
//! ```ignore
//! use unsend_core::prelude::*;
//! ```

pub use crate::{
    ContentType, Error, HttpClient, Method, Presence, Request, RequestBuilder, Response, Result,
    Validate, ValidationError, from_json, to_json,
};
