//! Client configuration
//!
//! The base URL and request timeout are carried in an immutable value that is
//! handed to the client at construction.

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Public EmojiHub API root
pub const DEFAULT_BASE_URL: &str = "https://emojihub.yurace.pro/api";

/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "EMOJIHUB_BASE_URL";

/// Configuration for an `EmojiHubClient`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root; endpoint paths are appended to it
    pub base_url: Url,
    /// Timeout applied to each request
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for the given API root with the default timeout
    ///
    /// # Arguments
    /// * `base_url` - The API root (e.g., "https://emojihub.yurace.pro/api")
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::invalid_argument(format!("Invalid URL: {e}")))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::invalid_argument(format!(
                "Unsupported URL scheme: {}",
                base_url.scheme()
            )));
        }
        if base_url.cannot_be_a_base() {
            return Err(Error::invalid_argument("Base URL cannot have path segments"));
        }

        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// The public EmojiHub endpoint with a 10 second timeout
    pub fn emojihub() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Defaults, with the base URL taken from `EMOJIHUB_BASE_URL` when set
    pub fn from_env() -> Result<Self> {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::emojihub(),
        }
    }

    /// Set the request timeout (builder pattern)
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(Error::invalid_argument("Timeout must be greater than zero"));
        }
        self.timeout = timeout;
        Ok(self)
    }
}
