//! Unsend authentication and client-identification headers.
//!
//! Every request leaving the client carries:
//!
//! | Header | Value |
//! |--------|-------|
//! | `User-Agent` | `unsend/<version>` |
//! | `Version` | `<version>` |
//! | `Content-Type` | `application/json` |
//! | `Authorization` | `Bearer <api key>` |

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use bytes::Bytes;
use tower::{Layer, Service};

use crate::config::{PACKAGE_NAME, VERSION};
use crate::{ContentType, Error, Request, Response, Result, UnsendConfig};

/// Layer that stamps the Unsend headers onto every request.
///
/// # Example
///
/// ```ignore
/// use unsend::{HyperClient, UnsendConfig};
/// use unsend::middleware::UnsendHeadersLayer;
///
/// let config = UnsendConfig::new("us_secret")?;
/// let client = HyperClient::builder()
///     .layer(UnsendHeadersLayer::new(&config))
///     .build();
/// ```
#[derive(Clone)]
pub struct UnsendHeadersLayer {
    headers: Arc<[(&'static str, String)]>,
}

impl std::fmt::Debug for UnsendHeadersLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnsendHeadersLayer").finish_non_exhaustive()
    }
}

impl UnsendHeadersLayer {
    /// Create the layer for the API key held by `config`.
    #[must_use]
    pub fn new(config: &UnsendConfig) -> Self {
        Self::with_api_key(config.api_key())
    }

    /// Create the layer from a raw API key.
    #[must_use]
    pub fn with_api_key(api_key: &str) -> Self {
        let headers = vec![
            ("User-Agent", format!("{PACKAGE_NAME}/{VERSION}")),
            ("Version", VERSION.to_string()),
            ("Content-Type", ContentType::Json.as_str().to_string()),
            ("Authorization", format!("Bearer {api_key}")),
        ];
        Self {
            headers: Arc::from(headers),
        }
    }
}

impl<S> Layer<S> for UnsendHeadersLayer {
    type Service = UnsendHeaders<S>;

    fn layer(&self, inner: S) -> Self::Service {
        UnsendHeaders {
            inner,
            headers: Arc::clone(&self.headers),
        }
    }
}

/// Service that stamps the Unsend headers onto requests.
#[derive(Clone)]
pub struct UnsendHeaders<S> {
    inner: S,
    headers: Arc<[(&'static str, String)]>,
}

impl<S> std::fmt::Debug for UnsendHeaders<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnsendHeaders").finish_non_exhaustive()
    }
}

impl<S> Service<Request<Bytes>> for UnsendHeaders<S>
where
    S: Service<Request<Bytes>, Response = Response<Bytes>, Error = Error> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response<Bytes>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<()>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<Bytes>) -> Self::Future {
        let headers = request.headers_mut();
        for (name, value) in self.headers.iter() {
            headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
            headers.insert((*name).to_string(), value.clone());
        }

        let mut inner = self.inner.clone();
        Box::pin(async move { inner.call(request).await })
    }
}
