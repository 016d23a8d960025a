//! Document fetcher implementation using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CACHE_CONTROL;

use crate::domain::EnvError;
use crate::ports::{CacheMode, DocumentFetcher, FetchedDocument};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP implementation of the document fetcher port.
///
/// `CacheMode::Reload` is mapped to a `Cache-Control: no-cache` request
/// header, asking intermediate caches to revalidate with the origin.
#[derive(Debug, Clone)]
pub struct HttpDocumentFetcher {
    client: Client,
}

impl HttpDocumentFetcher {
    /// Create a fetcher with the default transport timeout.
    pub fn new() -> Result<Self, EnvError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("trovu-env/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| EnvError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl DocumentFetcher for HttpDocumentFetcher {
    async fn fetch(&self, url: &str, cache: CacheMode) -> Result<FetchedDocument, EnvError> {
        let mut request = self.client.get(url);
        if cache == CacheMode::Reload {
            request = request.header(CACHE_CONTROL, "no-cache");
        }

        let response = request
            .send()
            .await
            .map_err(|e| EnvError::Network { url: url.to_string(), details: e.to_string() })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| EnvError::Network { url: url.to_string(), details: e.to_string() })?;

        Ok(FetchedDocument { status, body })
    }
}
