//! Concurrent retrieval of per-namespace shortcut tables.

use std::collections::BTreeMap;

use futures::future::join_all;

use crate::domain::shortcut::{self, ShortcutDef};
use crate::domain::{EnvError, Namespace};
use crate::ports::{CacheMode, DiagnosticSink, DocumentFetcher, FetchedDocument};

/// Fetches, parses, and normalizes the shortcut table of every namespace in
/// a resolved list, dropping namespaces that fail and preserving the
/// relative order of the rest.
pub struct ShortcutSetFetcher<'a, F, D> {
    fetcher: &'a F,
    diagnostics: &'a D,
}

impl<'a, F, D> ShortcutSetFetcher<'a, F, D>
where
    F: DocumentFetcher,
    D: DiagnosticSink,
{
    pub fn new(fetcher: &'a F, diagnostics: &'a D) -> Self {
        Self { fetcher, diagnostics }
    }

    /// Fetch every namespace's shortcut document concurrently and return the
    /// namespaces that yielded a table.
    ///
    /// All fetches are driven at a single join point; results line up with
    /// the input by index regardless of completion order, so diagnostics and
    /// the survivor list are deterministic. One namespace failing never
    /// affects another.
    pub async fn fetch(
        &self,
        namespaces: Vec<Namespace>,
        reload: bool,
        debug: bool,
    ) -> Vec<Namespace> {
        let cache = if reload { CacheMode::Reload } else { CacheMode::UseCache };

        let responses = join_all(
            namespaces.iter().map(|namespace| self.fetcher.fetch(&namespace.url, cache)),
        )
        .await;

        let mut survivors = Vec::with_capacity(namespaces.len());
        for (mut namespace, response) in namespaces.into_iter().zip(responses) {
            let raw = match parse_document(&namespace.url, response) {
                Ok(raw) => raw,
                Err(err @ EnvError::Parse { .. }) => {
                    self.diagnostics.report(&err.to_string());
                    self.trace_outcome(debug, false, &namespace, cache);
                    continue;
                }
                Err(err) => {
                    self.diagnostics.report(&format!(
                        "Failed to fetch namespace \"{}\" via {}: {}",
                        namespace.name,
                        cache.label(),
                        err
                    ));
                    self.trace_outcome(debug, false, &namespace, cache);
                    continue;
                }
            };

            let (table, malformed) = shortcut::normalize_table(raw);
            if !malformed.is_empty() {
                self.diagnostics.report(&format!(
                    "Malformed shortcut keys in namespace \"{}\": {}",
                    namespace.name,
                    malformed.join(", ")
                ));
            }

            namespace.shortcuts = table;
            self.trace_outcome(debug, true, &namespace, cache);
            survivors.push(namespace);
        }

        survivors
    }

    fn trace_outcome(&self, debug: bool, fetched: bool, namespace: &Namespace, cache: CacheMode) {
        if debug {
            let outcome = if fetched { "Fetched" } else { "Dropped" };
            self.diagnostics.trace(&format!(
                "{} {} via {}",
                outcome,
                namespace.url,
                cache.label()
            ));
        } else if fetched {
            self.diagnostics.trace(".");
        }
    }
}

fn parse_document(
    url: &str,
    response: Result<FetchedDocument, EnvError>,
) -> Result<BTreeMap<String, ShortcutDef>, EnvError> {
    let document = response?.into_success(url)?;
    serde_yaml::from_str(&document.body)
        .map_err(|err| EnvError::Parse { url: url.to_string(), details: err.to_string() })
}
