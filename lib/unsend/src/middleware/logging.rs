//! Request/response logging middleware.
//!
//! Logs every exchange with the `tracing` crate inside an `http_request` span.
//! The API key never reaches the logs: at debug level the `Authorization`
//! header value is replaced with `<redacted>`.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use bytes::Bytes;
use tower::{Layer, Service};
use tracing::{Instrument, Level, debug, info, span, warn};

use crate::{Error, Request, Response, Result};

const REDACTED: &str = "<redacted>";

/// Layer that adds request/response logging.
///
/// # Example
///
/// ```ignore
/// use unsend::middleware::LoggingLayer;
/// use tower::ServiceBuilder;
///
/// let service = ServiceBuilder::new()
///     .layer(LoggingLayer::new())
///     .service(client);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingLayer {
    level: LogLevel,
}

/// Log level for the logging middleware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Log at debug level (request headers and response bodies of failures).
    Debug,
    /// Log at info level (summary only).
    #[default]
    Info,
}

impl LoggingLayer {
    /// Create a new logging layer with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logging layer that logs at debug level.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            level: LogLevel::Debug,
        }
    }

    /// The configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = Logging<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Logging {
            inner,
            level: self.level,
        }
    }
}

/// Service that logs requests and responses.
#[derive(Debug, Clone)]
pub struct Logging<S> {
    inner: S,
    level: LogLevel,
}

/// Request headers safe to log, sorted by name.
fn loggable_headers(request: &Request<Bytes>) -> BTreeMap<&str, &str> {
    request
        .headers()
        .iter()
        .map(|(name, value)| {
            if name.eq_ignore_ascii_case("authorization") {
                (name.as_str(), REDACTED)
            } else {
                (name.as_str(), value.as_str())
            }
        })
        .collect()
}

impl<S> Service<Request<Bytes>> for Logging<S>
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

    fn call(&mut self, request: Request<Bytes>) -> Self::Future {
        let method = request.method();
        let url = request.url().to_string();
        let level = self.level;

        let span = span!(Level::INFO, "http_request", %method, %url);

        match level {
            LogLevel::Debug => {
                let headers = loggable_headers(&request);
                let _enter = span.enter();
                debug!(headers = ?headers, "sending request");
            }
            LogLevel::Info => {
                let _enter = span.enter();
                info!("sending request");
            }
        }

        let mut inner = self.inner.clone();
        Box::pin(
            async move {
                let start = Instant::now();
                let result = inner.call(request).await;

                // Saturating conversion to u64
                let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

                match &result {
                    Ok(response) if response.is_success() => {
                        info!(status = response.status(), elapsed_ms, "request completed");
                    }
                    Ok(response) => {
                        let status = response.status();
                        warn!(status, elapsed_ms, "request failed with HTTP error");
                        if level == LogLevel::Debug {
                            debug!(body = %response.text(), "error response body");
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, elapsed_ms, "request failed");
                    }
                }

                result
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use url::Url;

    use super::*;
    use crate::Method;

    #[test]
    fn logging_layer_default() {
        let layer = LoggingLayer::new();
        check!(layer.level() == LogLevel::Info);
    }

    #[test]
    fn logging_layer_debug() {
        let layer = LoggingLayer::debug();
        check!(layer.level() == LogLevel::Debug);
    }

    #[test]
    fn authorization_is_redacted() {
        let_assert!(Ok(url) = Url::parse("http://localhost/api/v1/domains"));
        let request = Request::builder(Method::Get, url)
            .header("Authorization", "Bearer us_secret")
            .header("Version", "0.1.0")
            .build();

        let headers = loggable_headers(&request);
        check!(headers.get("Authorization") == Some(&REDACTED));
        check!(headers.get("Version") == Some(&"0.1.0"));
        check!(!format!("{headers:?}").contains("us_secret"));
    }
}
