//! Core types and traits for the Unsend API client.
//!
//! This crate provides the transport-agnostic building blocks used by `unsend`:
//! - [`Method`] - HTTP methods used by the API
//! - [`Request`] and [`RequestBuilder`] - HTTP request types
//! - [`Response`] - buffered HTTP response with status classification
//! - [`Error`] and [`Result`] - Error handling
//! - [`HttpClient`] - Transport trait for HTTP execution
//! - [`Validate`], [`Presence`] and [`ValidationError`] - client-side
//!   required-field checks
//! - [`StatusCode`] - HTTP status codes (re-exported from `http` crate)
//! - [`header`] - HTTP header names (re-exported from `http` crate)

mod body;
mod client;
mod error;
mod method;
pub mod prelude;
mod request;
mod response;
mod validate;

pub use body::{ContentType, from_json, to_json};
pub use client::HttpClient;
pub use error::{Error, Result};
pub use method::Method;
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use validate::{Presence, Validate, ValidationError};

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
