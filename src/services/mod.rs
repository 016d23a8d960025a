mod http_fetcher;
mod stderr_diagnostics;
mod system_locale;

pub use http_fetcher::HttpDocumentFetcher;
pub use stderr_diagnostics::StderrDiagnostics;
pub use system_locale::SystemLocaleSource;
