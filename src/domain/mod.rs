pub mod locale;
pub mod shortcut;

mod environment;
mod error;
mod namespace;

pub use environment::{EnvParams, Environment};
pub use error::EnvError;
pub use namespace::{Namespace, NamespaceKind, NamespaceRef, SELF_REFERENCE};
pub use shortcut::{Shortcut, ShortcutDef, ShortcutTable};
