//! HTTP transport trait.
//!
//! [`HttpClient`] is the seam between the Unsend pipeline and the network.
//! The `unsend` crate ships a hyper-based implementation; tests or embedders
//! may supply their own.

use std::future::Future;

use bytes::Bytes;

use crate::{Request, Response, Result};

/// Core HTTP transport trait.
///
/// Implementations perform exactly one round-trip per call and return the
/// fully-buffered response whatever its status. Status interpretation is the
/// caller's job.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use std::collections::HashMap;
/// use unsend_core::{HttpClient, Request, Response, Result};
///
/// /// Answers every request with the same canned body.
/// struct Canned(&'static str);
///
/// impl HttpClient for Canned {
///     async fn execute(&self, _request: Request<Bytes>) -> Result<Response<Bytes>> {
///         Ok(Response::new(200, HashMap::new(), Bytes::from_static(self.0.as_bytes())))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the exchange could not be completed:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}

impl<C: HttpClient> HttpClient for std::sync::Arc<C> {
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        (**self).execute(request)
    }
}
