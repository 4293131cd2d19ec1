//! HTTP retrieval of recipe pages.
//!
//! One request per extraction attempt, bounded timeout, no internal retry;
//! retry policy belongs to the caller.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Failure classification for a page fetch.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("server returned HTTP {0}")]
    Status(u16),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Connection(err.to_string())
        }
    }
}

/// Something that can turn a URL into page markup.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Default fetcher backed by a reqwest client with a realistic browser
/// user-agent; some recipe sites refuse obviously non-browser clients.
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::from)?;
        Ok(PageFetcher { client })
    }
}

#[async_trait]
impl Fetcher for PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/page")
            .with_status(200)
            .with_body("<html>hello</html>")
            .create_async()
            .await;

        let config = AppConfig::default();
        let fetcher =
            PageFetcher::new(Duration::from_secs(config.timeout_secs), &config.user_agent)
                .unwrap();
        let body = fetcher.fetch(&format!("{}/page", server.url())).await.unwrap();
        assert_eq!(body, "<html>hello</html>");
    }

    #[tokio::test]
    async fn test_http_error_classified_as_status() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let fetcher = PageFetcher::new(Duration::from_secs(5), "test-agent").unwrap();
        let err = fetcher
            .fetch(&format!("{}/missing", server.url()))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status(404)));
    }

    #[tokio::test]
    async fn test_unreachable_host_classified_as_connection() {
        let fetcher = PageFetcher::new(Duration::from_secs(5), "test-agent").unwrap();
        // reserved TLD, guaranteed not to resolve
        let err = fetcher.fetch("http://recipe.invalid/page").await.unwrap_err();
        assert!(matches!(err, FetchError::Connection(_)));
    }
}
