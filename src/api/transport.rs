//! HTTP transport
//!
//! The client talks to the network only through `Transport`, so tests can
//! replace the reqwest-backed implementation with a stub.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{Error, Result};

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a single GET and returns whatever the server answered
///
/// Implementations fail only when no response was obtained; interpreting the
/// status is left to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: Url) -> Result<RawResponse>;
}

/// `Transport` backed by a reqwest client
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    /// Create a transport whose requests time out after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: Url) -> Result<RawResponse> {
        let response = self
            .http_client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(&url, e))?;

        Ok(RawResponse::new(status, body.to_vec()))
    }
}

fn transport_error(url: &Url, e: reqwest::Error) -> Error {
    let message = if e.is_timeout() {
        format!("GET request timed out: {e}")
    } else {
        format!("GET request failed: {e}")
    };
    Error::transport(message).with_url(url.as_str())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Accept one connection and answer it with `response` verbatim
    async fn serve_once(response: String) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        addr
    }

    fn url_for(addr: SocketAddr, path: &str) -> Url {
        Url::parse(&format!("http://{addr}{path}")).unwrap()
    }

    #[tokio::test]
    async fn test_success_returns_status_and_body() {
        let body = r#"["smileys and people"]"#;
        let addr = serve_once(format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\
             content-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        ))
        .await;

        let transport = HttpTransport::new(Duration::from_secs(5)).unwrap();
        let response = transport.get(url_for(addr, "/api/categories")).await.unwrap();

        assert!(response.is_success());
        assert_eq!(response.body, body.as_bytes());
    }

    #[tokio::test]
    async fn test_server_error_is_returned_not_raised() {
        let addr = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
                .to_string(),
        )
        .await;

        let transport = HttpTransport::new(Duration::from_secs(5)).unwrap();
        let response = transport.get(url_for(addr, "/api/random")).await.unwrap();

        assert_eq!(response.status, 500);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = HttpTransport::new(Duration::from_secs(5)).unwrap();
        let err = transport.get(url_for(addr, "/api/random")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::Transport);
        assert!(err.url().unwrap().ends_with("/api/random"));
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let transport = HttpTransport::new(Duration::from_millis(200)).unwrap();
        let err = transport.get(url_for(addr, "/api/random")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::Transport);
        assert!(err.message.contains("timed out"));
    }

    #[test]
    fn test_raw_response_success_range() {
        assert!(RawResponse::new(200, "").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(!RawResponse::new(301, "").is_success());
        assert!(!RawResponse::new(404, "").is_success());
    }
}
