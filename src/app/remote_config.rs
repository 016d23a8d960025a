//! Loading a user's remote personal configuration.

use crate::domain::{EnvError, EnvParams};
use crate::ports::{CacheMode, DiagnosticSink, DocumentFetcher};

fn user_config_url(github: &str) -> String {
    format!("https://raw.githubusercontent.com/{}/trovu-data-user/master/config.yml", github)
}

/// Fetch and parse `config.yml` from the user's data fork.
///
/// Always a best-effort cached fetch; the reload flag does not apply to the
/// configuration document. Any failure recovers to `None` ("no personal
/// configuration") after reporting a diagnostic, and the surrounding
/// resolution continues with explicit parameters and defaults.
pub async fn load_user_config<F, D>(github: &str, fetcher: &F, diagnostics: &D) -> Option<EnvParams>
where
    F: DocumentFetcher,
    D: DiagnosticSink,
{
    let url = user_config_url(github);
    match fetch_config(&url, fetcher).await {
        Ok(config) => Some(config),
        Err(err @ EnvError::Parse { .. }) => {
            diagnostics.report(&err.to_string());
            None
        }
        Err(err) => {
            diagnostics.report(&format!("Failed to fetch config for {}: {}", github, err));
            None
        }
    }
}

async fn fetch_config<F: DocumentFetcher>(url: &str, fetcher: &F) -> Result<EnvParams, EnvError> {
    let document = fetcher.fetch(url, CacheMode::UseCache).await?.into_success(url)?;

    if document.body.trim().is_empty() {
        return Err(EnvError::Network {
            url: url.to_string(),
            details: "empty response body".to_string(),
        });
    }

    serde_yaml::from_str(&document.body)
        .map_err(|err| EnvError::Parse { url: url.to_string(), details: err.to_string() })
}
