//! Locale source backed by the POSIX locale environment variables.

use std::env;

use crate::ports::LocaleSource;

/// Reads the locale from `LC_ALL`, `LC_MESSAGES`, or `LANG`, in that order,
/// skipping the `C`/`POSIX` locales and stripping codeset and modifier
/// suffixes (`de_DE.UTF-8@euro` becomes `de_DE`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocaleSource;

impl SystemLocaleSource {
    pub fn new() -> Self {
        Self
    }
}

impl LocaleSource for SystemLocaleSource {
    fn locale(&self) -> Option<String> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|name| env::var(name).ok())
            .map(|value| strip_posix_suffixes(&value))
            .find(|tag| !tag.is_empty() && tag != "C" && tag != "POSIX")
    }
}

fn strip_posix_suffixes(value: &str) -> String {
    let end = value.find(['.', '@']).unwrap_or(value.len());
    value[..end].to_string()
}
