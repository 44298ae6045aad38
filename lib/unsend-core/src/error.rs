//! Error types for the Unsend client.
//!
//! Every operation returns [`Result`]. Errors fall into five groups:
//!
//! | Group | Variants | Raised |
//! |-------|----------|--------|
//! | validation | [`Error::Validation`] | before any network call |
//! | request construction | [`Error::InvalidUrl`], [`Error::JsonSerialization`], [`Error::InvalidRequest`], [`Error::Config`] | before any network call |
//! | HTTP status | [`Error::Http`] | after a non-2xx response |
//! | decode | [`Error::JsonDeserialization`] | after a 2xx response |
//! | transport | [`Error::Connection`], [`Error::Tls`], [`Error::Timeout`] | by the transport |

use derive_more::{Display, Error, From};

use crate::ValidationError;

/// Main error type for Unsend operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// One or more required request fields are missing.
    #[display("{_0}")]
    #[from]
    Validation(#[error(not(source))] ValidationError),

    /// The base URL or a joined request URL could not be parsed.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// The request body could not be serialized to JSON.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// The request could not be assembled by the transport.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// The client configuration is unusable (e.g. an empty API key).
    #[display("invalid configuration: {_0}")]
    #[from(skip)]
    Config(#[error(not(source))] String),

    /// The server answered with a status outside `200..=299`.
    ///
    /// The body is kept verbatim, without any parsing.
    #[display("received non-2xx response: {status} - {body}")]
    #[from(skip)]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        #[error(not(source))]
        body: String,
    },

    /// A 2xx response body did not match the expected shape.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "emailEvents[0].status").
        path: String,
        /// Error message.
        message: String,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an HTTP status error from a status code and the raw body text.
    #[must_use]
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if the request was rejected before being sent because
    /// required fields were missing.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` if the request could not be built (bad URL, bad body,
    /// bad configuration).
    #[must_use]
    pub const fn is_request_construction(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl(_) | Self::JsonSerialization(_) | Self::InvalidRequest(_) | Self::Config(_)
        )
    }

    /// Returns `true` if a 2xx response body could not be decoded.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::JsonDeserialization { .. })
    }

    /// Returns `true` if the transport failed to complete the exchange.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Tls(_) | Self::Timeout)
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns the HTTP status code if this is an HTTP status error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }

    /// Returns `true` if this is a 404 Not Found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns the raw response body if this is an HTTP status error.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Http { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns the validation details if this is a validation error.
    #[must_use]
    pub const fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }

    /// Try to decode the HTTP error body as JSON.
    ///
    /// Returns `None` if this is not an HTTP status error.
    ///
    /// # Example
    ///
    /// ```ignore
    /// #[derive(Debug, Deserialize)]
    /// struct ApiError {
    ///     error: String,
    /// }
    ///
    /// if let Err(err) = client.emails().get(&request).await {
    ///     if let Some(Ok(api_error)) = err.decode_body::<ApiError>() {
    ///         eprintln!("API said: {}", api_error.error);
    ///     }
    /// }
    /// ```
    pub fn decode_body<T: serde::de::DeserializeOwned>(&self) -> Option<Result<T>> {
        self.body().map(|body| crate::from_json(body.as_bytes()))
    }
}
