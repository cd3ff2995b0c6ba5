//! Client configuration: where the API lives and how to authenticate.
//!
//! # Design
//! A `ClientConfig` is built once and shared read-only by every request the
//! client issues afterwards. Timeouts live here rather than in process-wide
//! state so two clients in one process never affect each other.

use std::fmt;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// Public endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.worldpay.com/v1";

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(61);
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(61);

pub const ENV_BASE_URL: &str = "PAYMENTS_BASE_URL";
pub const ENV_SERVICE_KEY: &str = "PAYMENTS_SERVICE_KEY";
pub const ENV_CONNECT_TIMEOUT_MS: &str = "PAYMENTS_CONNECT_TIMEOUT_MS";
pub const ENV_READ_TIMEOUT_MS: &str = "PAYMENTS_READ_TIMEOUT_MS";

/// Immutable transport settings.
#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    service_key: SecretString,
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with default timeouts.
    ///
    /// The base URL is kept verbatim; resource paths are appended to it as-is.
    pub fn new(base_url: &str, service_key: &str) -> Result<Self, Error> {
        if base_url.trim().is_empty() {
            return Err(Error::Config("base URL cannot be empty".to_string()));
        }
        if service_key.trim().is_empty() {
            return Err(Error::Config("service key cannot be empty".to_string()));
        }
        Ok(Self {
            base_url: base_url.to_string(),
            service_key: SecretString::from(service_key.to_string()),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        })
    }

    /// Load the configuration from `PAYMENTS_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let base_url = lookup(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let service_key = lookup(ENV_SERVICE_KEY)
            .ok_or_else(|| Error::Config(format!("{ENV_SERVICE_KEY} is not set")))?;

        let mut config = Self::new(&base_url, &service_key)?;
        if let Some(ms) = lookup(ENV_CONNECT_TIMEOUT_MS) {
            config.connect_timeout = parse_millis(ENV_CONNECT_TIMEOUT_MS, &ms)?;
        }
        if let Some(ms) = lookup(ENV_READ_TIMEOUT_MS) {
            config.read_timeout = parse_millis(ENV_READ_TIMEOUT_MS, &ms)?;
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    pub(crate) fn service_key(&self) -> &str {
        self.service_key.expose_secret()
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("service_key", &"[REDACTED]")
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .finish()
    }
}

fn parse_millis(name: &str, value: &str) -> Result<Duration, Error> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| Error::Config(format!("{name} must be a number of milliseconds: {e}")))
}
