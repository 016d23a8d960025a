//! trovu-env: Resolve the runtime environment of a keyword URL-expansion tool.
//!
//! An environment is built by merging explicit parameters, the user's remote
//! personal configuration, and locale-derived defaults, then resolving each
//! configured namespace to a concrete location and fetching its shortcut
//! table. Namespaces whose fetch or parse fails are dropped with a
//! diagnostic; resolution itself never aborts.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use services::{HttpDocumentFetcher, StderrDiagnostics, SystemLocaleSource};

pub use app::{EnvironmentBuilder, ShortcutSetFetcher, load_user_config};
pub use domain::{
    EnvError, EnvParams, Environment, Namespace, NamespaceKind, NamespaceRef, Shortcut,
    ShortcutTable,
};

/// Resolve an environment with the default wiring: HTTP fetching, locale from
/// the process environment, diagnostics to stderr.
///
/// Fails only if the HTTP client cannot be constructed; every recoverable
/// resolution failure is reported and absorbed instead.
pub async fn resolve_environment(params: EnvParams) -> Result<Environment, EnvError> {
    let fetcher = HttpDocumentFetcher::new()?;
    let locale = SystemLocaleSource::new();
    let diagnostics = StderrDiagnostics::new();

    Ok(EnvironmentBuilder::new(&fetcher, &locale, &diagnostics).resolve(params).await)
}
