//! Async Rust client for the Unsend transactional email API.
//!
//! Manage contacts, list sending domains, and send or schedule emails with
//! typed requests. Every request is checked for its required fields before
//! anything is sent.
//!
//! # Example
//!
//! ```ignore
//! use unsend::prelude::*;
//!
//! let client = Unsend::from_env()?;
//!
//! let mut email = SendEmailRequest::new("Acme <hello@acme.dev>", ["jane@example.com"]);
//! email.subject = "Welcome".to_string();
//! email.html = "<p>Hello Jane</p>".to_string();
//!
//! let sent = client.emails().send(&email).await?;
//! println!("queued {}", sent.email_id);
//! ```
//!
//! # Errors
//!
//! Every operation returns [`Result`]. Missing required fields surface as
//! [`Error::Validation`] without any network call; a non-2xx answer surfaces
//! as [`Error::Http`] with the raw response body.

extern crate self as unsend;

mod api_client;
mod client;
mod config;
mod connector;
pub mod middleware;
pub mod prelude;
pub mod resources;

pub use api_client::Unsend;
pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{
    ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, ENV_API_KEY, ENV_BASE_URL, UnsendConfig,
    VERSION,
};

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use unsend_core::{
    ContentType, Error, HttpClient, Method, Presence, Request, RequestBuilder, Response, Result,
    Validate, ValidationError, from_json, to_json,
};

// Re-export http types for status codes and headers
pub use unsend_core::{StatusCode, header};

pub use url;

// Re-export the derive macro (shares its name with the trait)
pub use unsend_macro::Validate;
