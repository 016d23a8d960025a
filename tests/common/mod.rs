//! Shared test doubles for environment resolution integration tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use trovu_env::EnvError;
use trovu_env::ports::{CacheMode, DiagnosticSink, DocumentFetcher, FetchedDocument, LocaleSource};

enum Canned {
    Document { status: u16, body: String },
    NetworkError(String),
}

/// In-memory document fetcher: maps exact URLs to canned outcomes and records
/// every request with its cache mode.
#[derive(Default)]
pub struct FakeFetcher {
    responses: BTreeMap<String, Canned>,
    requests: Mutex<Vec<(String, CacheMode)>>,
}

#[allow(dead_code)]
impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, url: &str, body: &str) -> Self {
        self.responses
            .insert(url.to_string(), Canned::Document { status: 200, body: body.to_string() });
        self
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses
            .insert(url.to_string(), Canned::Document { status, body: String::new() });
        self
    }

    pub fn with_network_error(mut self, url: &str) -> Self {
        self.responses
            .insert(url.to_string(), Canned::NetworkError("connection refused".to_string()));
        self
    }

    pub fn requests(&self) -> Vec<(String, CacheMode)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentFetcher for FakeFetcher {
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

/// Locale source with a fixed answer.
pub struct FixedLocale(Option<String>);

#[allow(dead_code)]
impl FixedLocale {
    pub fn tag(tag: &str) -> Self {
        Self(Some(tag.to_string()))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl LocaleSource for FixedLocale {
    fn locale(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Diagnostic sink that collects every message for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    reports: Mutex<Vec<String>>,
    traces: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }

    pub fn traces(&self) -> Vec<String> {
        self.traces.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, message: &str) {
        self.reports.lock().unwrap().push(message.to_string());
    }

    fn trace(&self, message: &str) {
        self.traces.lock().unwrap().push(message.to_string());
    }
}

/// URL of a site namespace's shortcut document.
#[allow(dead_code)]
pub fn site_url(name: &str) -> String {
    format!("https://raw.githubusercontent.com/trovu/trovu-data/master/shortcuts/{}.yml", name)
}

/// URL of a user's personal shortcut document.
#[allow(dead_code)]
pub fn user_url(github: &str) -> String {
    format!("https://raw.githubusercontent.com/{}/trovu-data-user/master/shortcuts.yml", github)
}

/// URL of a user's personal configuration document.
#[allow(dead_code)]
pub fn config_url(github: &str) -> String {
    format!("https://raw.githubusercontent.com/{}/trovu-data-user/master/config.yml", github)
}
