//! Client configuration types.
//!
//! - [`UnsendConfig`] - API key and base URL, shared by every operation
//! - [`ClientConfig`] - transport settings for [`crate::HyperClient`]

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::{Error, Result};

/// Production endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://app.unsend.dev/api";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "UNSEND_API_KEY";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "UNSEND_BASE_URL";

/// Library name sent in the `User-Agent` header.
pub const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");

/// Library version sent in the `User-Agent` and `Version` headers.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// API configuration
// ============================================================================

/// Credentials and endpoint for the Unsend API.
///
/// Immutable once built. Relative operation paths such as `api/v1/emails` are
/// resolved against the base URL with RFC 3986 reference resolution, so both
/// `https://app.unsend.dev/api` and `http://localhost:3000` work as bases.
///
/// # Example
///
/// ```
/// use unsend::UnsendConfig;
///
/// let config = UnsendConfig::new("us_secret")?
///     .with_base_url("http://localhost:3000")?;
/// assert_eq!(
///     config.url_for("api/v1/domains")?.as_str(),
///     "http://localhost:3000/api/v1/domains"
/// );
/// # Ok::<(), unsend::Error>(())
/// ```
#[derive(Clone)]
pub struct UnsendConfig {
    base_url: Url,
    api_key: Arc<str>,
}

impl fmt::Debug for UnsendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnsendConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl UnsendConfig {
    /// Create a configuration for the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the API key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::config("API key is empty"));
        }

        Ok(Self {
            base_url: Url::parse(DEFAULT_BASE_URL)?,
            api_key: Arc::from(api_key),
        })
    }

    /// Replace the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the URL cannot be parsed, or
    /// [`Error::Config`] if it cannot serve as a base (e.g. `mailto:`).
    pub fn with_base_url(self, base_url: impl AsRef<str>) -> Result<Self> {
        let url = Url::parse(base_url.as_ref())?;
        self.with_url(url)
    }

    /// Replace the base URL with an already-parsed one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the URL cannot serve as a base.
    pub fn with_url(mut self, base_url: Url) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "base URL cannot be used as a base: {base_url}"
            )));
        }
        self.base_url = base_url;
        Ok(self)
    }

    /// Read the configuration from `UNSEND_API_KEY` and, if set,
    /// `UNSEND_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the API key is missing or empty, and a URL
    /// error if the base URL override is malformed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable lookup.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(ENV_API_KEY)
            .ok_or_else(|| Error::config(format!("environment variable {ENV_API_KEY} is not set")))?;
        let config = Self::new(api_key)?;

        match lookup(ENV_BASE_URL).filter(|url| !url.is_empty()) {
            Some(base_url) => config.with_base_url(base_url),
            None => Ok(config),
        }
    }

    /// Base URL all operation paths are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// API key sent as the bearer token.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Resolve a relative operation path against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the joined URL is malformed.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(Error::InvalidUrl)
    }
}

// ============================================================================
// Transport configuration
// ============================================================================

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout duration.
    pub timeout: Duration,
    /// Connection timeout duration.
    pub connect_timeout: Duration,
    /// Maximum idle connections per host.
    pub pool_idle_per_host: usize,
    /// Idle connection timeout.
    pub pool_idle_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    pool_idle_per_host: Option<usize>,
    pool_idle_timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Set the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub const fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.pool_idle_per_host = Some(count);
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub const fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = Some(timeout);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            timeout: self.timeout.unwrap_or(defaults.timeout),
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
            pool_idle_per_host: self
                .pool_idle_per_host
                .unwrap_or(defaults.pool_idle_per_host),
            pool_idle_timeout: self.pool_idle_timeout.unwrap_or(defaults.pool_idle_timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert2::{check, let_assert};

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn new_uses_default_base_url() {
        let_assert!(Ok(config) = UnsendConfig::new("us_key"));
        check!(config.base_url().as_str() == DEFAULT_BASE_URL);
        check!(config.api_key() == "us_key");
    }

    #[test]
    fn new_rejects_empty_api_key() {
        let_assert!(Err(err) = UnsendConfig::new(""));
        check!(err.is_request_construction());
        check!(err.to_string() == "invalid configuration: API key is empty");
    }

    #[test]
    fn default_base_url_resolves_api_paths() {
        let_assert!(Ok(config) = UnsendConfig::new("us_key"));
        let_assert!(Ok(url) = config.url_for("api/v1/emails/em_1/cancel"));
        check!(url.as_str() == "https://app.unsend.dev/api/v1/emails/em_1/cancel");
    }

    #[test]
    fn host_only_base_url_resolves_api_paths() {
        let_assert!(Ok(config) = UnsendConfig::new("us_key"));
        let_assert!(Ok(config) = config.with_base_url("http://127.0.0.1:8080"));
        let_assert!(Ok(url) = config.url_for("api/v1/contactBooks/b/contacts/"));
        check!(url.as_str() == "http://127.0.0.1:8080/api/v1/contactBooks/b/contacts/");

        let_assert!(Ok(url) = config.url_for("/test"));
        check!(url.as_str() == "http://127.0.0.1:8080/test");
    }

    #[test]
    fn with_base_url_rejects_garbage() {
        let_assert!(Ok(config) = UnsendConfig::new("us_key"));
        let_assert!(Err(err) = config.clone().with_base_url("not a url"));
        check!(matches!(err, Error::InvalidUrl(_)));

        let_assert!(Err(err) = config.with_base_url("mailto:team@unsend.dev"));
        check!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn from_lookup_reads_key_and_override() {
        let_assert!(
            Ok(config) = UnsendConfig::from_lookup(lookup(&[
                (ENV_API_KEY, "test-api-key"),
                (ENV_BASE_URL, "https://api.example.com"),
            ]))
        );
        check!(config.api_key() == "test-api-key");
        check!(config.base_url().as_str() == "https://api.example.com/");
    }

    #[test]
    fn from_lookup_defaults_base_url() {
        let_assert!(
            Ok(config) = UnsendConfig::from_lookup(lookup(&[
                (ENV_API_KEY, "test-api-key"),
                (ENV_BASE_URL, ""),
            ]))
        );
        check!(config.base_url().as_str() == DEFAULT_BASE_URL);
    }

    #[test]
    fn from_lookup_requires_api_key() {
        let_assert!(Err(err) = UnsendConfig::from_lookup(lookup(&[])));
        check!(err.to_string() == "invalid configuration: environment variable UNSEND_API_KEY is not set");
    }

    #[test]
    fn debug_redacts_api_key() {
        let_assert!(Ok(config) = UnsendConfig::new("us_very_secret"));
        let debug = format!("{config:?}");
        check!(!debug.contains("us_very_secret"));
        check!(debug.contains("<redacted>"));
    }

    #[test]
    fn default_client_config() {
        let config = ClientConfig::default();
        check!(config.timeout == Duration::from_secs(30));
        check!(config.connect_timeout == Duration::from_secs(10));
        check!(config.pool_idle_per_host == 32);
    }

    #[test]
    fn client_config_builder_overrides() {
        let config = ClientConfig::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(5))
            .pool_idle_per_host(16)
            .build();

        check!(config.timeout == Duration::from_secs(60));
        check!(config.connect_timeout == Duration::from_secs(5));
        check!(config.pool_idle_per_host == 16);
        check!(config.pool_idle_timeout == Duration::from_secs(90));
    }
}
