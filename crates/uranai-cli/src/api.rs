//! Ranking API Client

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use uranai::{FetchError, RankingData, RankingProvider};

/// HTTP client for the daily ranking service
pub struct RankingClient {
    client: Client,
    base_url: String,
}

impl RankingClient {
    /// Create a new API client with a bounded request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn today_url(&self, lang: &str) -> String {
        format!(
            "{}/api/today?lang={}",
            self.base_url,
            urlencoding::encode(lang)
        )
    }
}

#[async_trait]
impl RankingProvider for RankingClient {
    async fn fetch_today(&self, lang: &str) -> Result<RankingData, FetchError> {
        let url = self.today_url(lang);
        debug!(url = %url, "Fetching today's ranking");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        resp.json()
            .await
            .map_err(|err| FetchError::Parse(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port, return its base URL
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}", addr)
    }

    #[test]
    fn test_today_url() {
        let client = RankingClient::new("https://rank.example/", Duration::from_secs(30)).unwrap();
        assert_eq!(client.today_url("ja"), "https://rank.example/api/today?lang=ja");
        assert_eq!(client.today_url("pt br"), "https://rank.example/api/today?lang=pt%20br");
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let client = RankingClient::new("http://127.0.0.1:9", Duration::from_secs(5)).unwrap();
        let err = client.fetch_today("ja").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[tokio::test]
    async fn test_server_error_is_status_error() {
        let base_url = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 4\r\nConnection: close\r\n\r\nboom",
        )
        .await;
        let client = RankingClient::new(&base_url, Duration::from_secs(5)).unwrap();

        let err = client.fetch_today("ja").await.unwrap_err();
        match err {
            FetchError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let base_url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 15\r\nConnection: close\r\n\r\n{\"date\": \"2026\"",
        )
        .await;
        let client = RankingClient::new(&base_url, Duration::from_secs(5)).unwrap();

        let err = client.fetch_today("ja").await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_valid_body_parses() {
        let base_url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 70\r\nConnection: close\r\n\r\n{\"date\":\"2026-10-14\",\"ranking\":[{\"rank\":1,\"sign\":\"leo\",\"comment\":\"\"}]}",
        )
        .await;
        let client = RankingClient::new(&base_url, Duration::from_secs(5)).unwrap();

        let data = client.fetch_today("ja").await.unwrap();
        assert_eq!(data.ranking.len(), 1);
        assert_eq!(data.ranking[0].sign, "leo");
    }
}
