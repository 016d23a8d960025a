mod diagnostics;
mod document_fetcher;
mod locale_source;

pub use diagnostics::DiagnosticSink;
pub use document_fetcher::{CacheMode, DocumentFetcher, FetchedDocument};
pub use locale_source::LocaleSource;
