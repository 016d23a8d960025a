mod environment_builder;
mod remote_config;
mod shortcut_fetcher;

pub use environment_builder::{EnvironmentBuilder, default_namespace_refs};
pub use remote_config::load_user_config;
pub use shortcut_fetcher::ShortcutSetFetcher;
