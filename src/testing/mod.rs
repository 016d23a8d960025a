mod collecting_sink;
mod memory_fetcher;
mod static_locale;

pub use collecting_sink::CollectingSink;
pub use memory_fetcher::MemoryFetcher;
pub use static_locale::StaticLocale;
