//! Orchestration of the full environment resolution cycle.

use crate::app::remote_config::load_user_config;
use crate::app::shortcut_fetcher::ShortcutSetFetcher;
use crate::domain::locale;
use crate::domain::{EnvParams, Environment, Namespace, NamespaceRef};
use crate::ports::{DiagnosticSink, DocumentFetcher, LocaleSource};

/// Builds a resolved [`Environment`] from caller parameters.
///
/// Resolution layers three sources, highest precedence first: explicit
/// parameters, the user's remote personal configuration (fetched when a
/// github handle is supplied), and computed defaults. Recoverable failures
/// along the way surface on the diagnostic sink; the builder itself never
/// fails, though in the worst case the environment carries no namespaces.
pub struct EnvironmentBuilder<'a, F, L, D> {
    fetcher: &'a F,
    locale: &'a L,
    diagnostics: &'a D,
}

impl<'a, F, L, D> EnvironmentBuilder<'a, F, L, D>
where
    F: DocumentFetcher,
    L: LocaleSource,
    D: DiagnosticSink,
{
    pub fn new(fetcher: &'a F, locale: &'a L, diagnostics: &'a D) -> Self {
        Self { fetcher, locale, diagnostics }
    }

    pub async fn resolve(&self, params: EnvParams) -> Environment {
        let merged = match params.github.as_deref().filter(|github| !github.is_empty()) {
            Some(github) => match load_user_config(github, self.fetcher, self.diagnostics).await {
                Some(config) => params.merge_over(config),
                None => params,
            },
            None => params,
        };

        let (default_language, default_country) = locale::default_language_and_country(self.locale);
        let language = merged.language.unwrap_or(default_language);
        let country = merged.country.unwrap_or(default_country);
        let github = merged.github.filter(|github| !github.is_empty());
        let debug = merged.debug.unwrap_or(false);
        let reload = merged.reload.unwrap_or(false);

        let references =
            merged.namespaces.unwrap_or_else(|| default_namespace_refs(&language, &country));
        let resolved = self.resolve_references(references, github.as_deref());

        let namespaces = ShortcutSetFetcher::new(self.fetcher, self.diagnostics)
            .fetch(resolved, reload, debug)
            .await;

        Environment { language, country, github, debug, reload, namespaces, extra: merged.extra }
    }

    fn resolve_references(
        &self,
        references: Vec<NamespaceRef>,
        owner_github: Option<&str>,
    ) -> Vec<Namespace> {
        let mut resolved = Vec::with_capacity(references.len());
        for reference in references {
            match reference.resolve(owner_github) {
                Ok(namespace) => resolved.push(namespace),
                Err(err) => {
                    self.diagnostics.report(&format!("Skipping namespace reference: {}", err));
                }
            }
        }
        resolved
    }
}

/// The namespaces an environment falls back to when none are configured:
/// the shared planet-wide set, the language set, and the country set.
pub fn default_namespace_refs(language: &str, country: &str) -> Vec<NamespaceRef> {
    vec![
        NamespaceRef::Name("o".to_string()),
        NamespaceRef::Name(language.to_string()),
        NamespaceRef::Name(format!(".{}", country)),
    ]
}
