use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

use super::transport::{HttpTransport, RawResponse, Transport};

/// Client for the EmojiHub API
///
/// Each call issues exactly one GET; nothing is cached or retried.
pub struct EmojiHubClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl EmojiHubClient {
    /// Create a client that talks HTTP using the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client on top of an arbitrary transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the full URL for an endpoint
    ///
    /// Every element of `segments` becomes exactly one path segment; characters
    /// such as `/`, `?` or spaces inside a segment are percent-encoded. Empty,
    /// `.` and `..` segments are rejected since URL normalization would drop them.
    ///
    /// # Arguments
    /// * `segments` - Path segments below the API root (e.g., ["random", "category", name])
    pub fn api_url(&self, segments: &[&str]) -> Result<Url> {
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(Error::invalid_argument(format!("Invalid path segment: {bad:?}")));
        }

        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::invalid_argument("Base URL cannot have path segments"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `url` and decode a JSON body of type `T`
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(url = %url, "GET");

        let response = self.transport.get(url.clone()).await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "request did not complete");
            e
        })?;

        tracing::debug!(url = %url, status = response.status, "response received");
        self.handle_response(&url, response)
    }

    /// Check the status and decode the body
    fn handle_response<T: DeserializeOwned>(
        &self,
        url: &Url,
        response: RawResponse,
    ) -> Result<T> {
        if !response.is_success() {
            tracing::warn!(url = %url, status = response.status, "non-success status");
            return Err(Error::http(response.status).with_url(url.as_str()));
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "unexpected response body");
            Error::decode(format!("Failed to parse response: {e}")).with_url(url.as_str())
        })
    }
}
