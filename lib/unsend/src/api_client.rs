//! The Unsend API client.
//!
//! [`Unsend`] pairs an [`UnsendConfig`] with an [`HttpClient`] transport and
//! runs every operation through the same pipeline:
//! validate, build the request, execute it once, classify the status and
//! decode the body.

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::resources::{Contacts, Domains, Emails};
use crate::{
    HttpClient, HyperClient, HyperClientBuilder, Method, Request, Result, UnsendConfig, Validate,
};

/// Client for the Unsend transactional email API.
///
/// Cloning is cheap when the transport is: the default [`HyperClient`] shares
/// its connection pool and middleware stack between clones.
///
/// # Example
///
/// ```ignore
/// use unsend::{Unsend, UnsendConfig};
/// use unsend::resources::GetEmailRequest;
///
/// let client = Unsend::new(UnsendConfig::new("us_secret")?);
/// let email = client.emails().get(&GetEmailRequest::new("em_123")).await?;
/// println!("{} -> {:?}", email.subject, email.to);
/// ```
#[derive(Debug, Clone)]
pub struct Unsend<C = HyperClient> {
    config: UnsendConfig,
    client: C,
}

impl Unsend<HyperClient> {
    /// Create a client on the default transport, with logging and the Unsend
    /// headers installed.
    #[must_use]
    pub fn new(config: UnsendConfig) -> Self {
        Self::with_http_client(config, HyperClient::builder().with_logging())
    }

    /// Create a client configured from `UNSEND_API_KEY` and `UNSEND_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if the API key is missing, or a URL
    /// error if the base URL override is malformed.
    pub fn from_env() -> Result<Self> {
        UnsendConfig::from_env().map(Self::new)
    }

    /// Create a client on a customized transport.
    ///
    /// The Unsend headers layer is appended to `builder`, so it runs after
    /// (inside) any layer already added.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use std::time::Duration;
    /// use unsend::{HyperClient, Unsend, UnsendConfig};
    ///
    /// let client = Unsend::with_http_client(
    ///     UnsendConfig::from_env()?,
    ///     HyperClient::builder()
    ///         .timeout(Duration::from_secs(5))
    ///         .with_debug_logging(),
    /// );
    /// ```
    #[must_use]
    pub fn with_http_client(config: UnsendConfig, builder: HyperClientBuilder) -> Self {
        let client = builder.with_unsend_headers(&config).build();
        Self { config, client }
    }
}

impl<C> Unsend<C> {
    /// Assemble a client from a configuration and a transport used verbatim.
    ///
    /// No header is added: the transport is responsible for authentication.
    #[must_use]
    pub const fn from_parts(config: UnsendConfig, client: C) -> Self {
        Self { config, client }
    }

    /// The API configuration.
    #[must_use]
    pub const fn config(&self) -> &UnsendConfig {
        &self.config
    }

    /// The underlying transport.
    #[must_use]
    pub const fn inner(&self) -> &C {
        &self.client
    }

    /// Consume the client and return the underlying transport.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.client
    }
}

impl<C: HttpClient> Unsend<C> {
    /// Contact and contact book operations.
    #[must_use]
    pub const fn contacts(&self) -> Contacts<'_, C> {
        Contacts::new(self)
    }

    /// Domain operations.
    #[must_use]
    pub const fn domains(&self) -> Domains<'_, C> {
        Domains::new(self)
    }

    /// Email sending and scheduling operations.
    #[must_use]
    pub const fn emails(&self) -> Emails<'_, C> {
        Emails::new(self)
    }

    /// Build a request for a path relative to the configured base URL.
    ///
    /// A present body is serialized to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidUrl`] if the joined URL is malformed and
    /// [`crate::Error::JsonSerialization`] if the body cannot be serialized.
    pub fn new_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Request<Bytes>>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.url_for(path)?;
        let builder = Request::builder(method, url);
        let builder = match body {
            Some(body) => builder.json(body)?,
            None => builder,
        };
        Ok(builder.build())
    }

    /// Send a request once and decode a 2xx JSON body into `T`.
    ///
    /// # Errors
    ///
    /// - Transport errors are returned unchanged.
    /// - [`crate::Error::Http`] carries the status and raw body of a non-2xx
    ///   response.
    /// - [`crate::Error::JsonDeserialization`] if a 2xx body does not decode.
    pub async fn execute<T: DeserializeOwned>(&self, request: Request<Bytes>) -> Result<T> {
        let response = self.client.execute(request).await?;
        tracing::trace!(status = response.status(), "decoding response");
        response.into_json()
    }

    /// Validate `request`, then build and execute the call.
    pub(crate) async fn call<R, B, T>(
        &self,
        request: &R,
        method: Method,
        path: impl FnOnce() -> String,
        body: Option<&B>,
    ) -> Result<T>
    where
        R: Validate,
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        if let Err(err) = request.validate() {
            tracing::debug!(request = R::NAME, error = %err, "request rejected before sending");
            return Err(err.into());
        }

        let path = path();
        let request = self.new_request(method, &path, body)?;
        self.execute(request).await
    }
}
