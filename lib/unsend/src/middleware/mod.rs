//! Tower middleware layers for the Unsend HTTP transport.
//!
//! Layers wrap the [`crate::HyperClient`] service through
//! [`crate::HyperClientBuilder::layer`]. The first layer added is the
//! outermost one and sees the request first.
//!
//! - [`UnsendHeadersLayer`] - Adds the authentication and client-identification
//!   headers every Unsend call carries
//! - [`LoggingLayer`] - Logs requests/responses using `tracing`
//!
//! # Example
//!
//! ```ignore
//! use unsend::{HyperClient, UnsendConfig};
//! use unsend::middleware::{LoggingLayer, UnsendHeadersLayer};
//!
//! let config = UnsendConfig::from_env()?;
//! let client = HyperClient::builder()
//!     .layer(LoggingLayer::debug())
//!     .layer(UnsendHeadersLayer::new(&config))
//!     .build();
//! ```

mod client_headers;
mod logging;

pub use client_headers::{UnsendHeaders, UnsendHeadersLayer};
pub use logging::{LogLevel, Logging, LoggingLayer};

pub use tower::{Layer, ServiceBuilder};
