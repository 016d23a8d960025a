use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::EnvError;
use crate::ports::{CacheMode, DocumentFetcher, FetchedDocument};

enum Canned {
    Document { status: u16, body: String },
    NetworkError(String),
}

/// In-memory document fetcher for tests: maps exact URLs to canned outcomes
/// and records every request with its cache mode.
#[derive(Default)]
pub struct MemoryFetcher {
    responses: BTreeMap<String, Canned>,
    requests: Mutex<Vec<(String, CacheMode)>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status 200 for `url`.
    pub fn with_document(mut self, url: &str, body: &str) -> Self {
        self.responses
            .insert(url.to_string(), Canned::Document { status: 200, body: body.to_string() });
        self
    }

    /// Serve an empty-bodied response with `status` for `url`.
    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses
            .insert(url.to_string(), Canned::Document { status, body: String::new() });
        self
    }

    /// Fail `url` at the transport level.
    pub fn with_network_error(mut self, url: &str) -> Self {
        self.responses
            .insert(url.to_string(), Canned::NetworkError("connection refused".to_string()));
        self
    }

    /// Every request made so far, in call order.
    pub fn requests(&self) -> Vec<(String, CacheMode)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentFetcher for MemoryFetcher {
    async fn fetch(&self, url: &str, cache: CacheMode) -> Result<FetchedDocument, EnvError> {
        self.requests.lock().unwrap().push((url.to_string(), cache));

        match self.responses.get(url) {
            Some(Canned::Document { status, body }) => {
                Ok(FetchedDocument { status: *status, body: body.clone() })
            }
            Some(Canned::NetworkError(details)) => {
                Err(EnvError::Network { url: url.to_string(), details: details.clone() })
            }
            None => Err(EnvError::Network {
                url: url.to_string(),
                details: "no canned response".to_string(),
            }),
        }
    }
}
