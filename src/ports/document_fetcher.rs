use async_trait::async_trait;

use crate::domain::EnvError;

/// Whether a fetch must bypass cached data or may reuse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMode {
    /// Use cached data when available.
    UseCache,
    /// Always revalidate with the origin.
    Reload,
}

impl CacheMode {
    /// Short label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            CacheMode::UseCache => "cache",
            CacheMode::Reload => "reload",
        }
    }
}

/// A fetched document: the final status code plus the response body.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub status: u16,
    pub body: String,
}

impl FetchedDocument {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-success response into the matching error.
    pub fn into_success(self, url: &str) -> Result<Self, EnvError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(EnvError::HttpStatus { url: url.to_string(), status: self.status })
        }
    }
}

/// Port for fetching remote documents.
///
/// Implementations own transport, caching, and timeouts; callers only choose
/// the cache mode. A transport-level failure is an `Err`; a response with any
/// status code, success or not, is `Ok`.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &str, cache: CacheMode) -> Result<FetchedDocument, EnvError>;
}
