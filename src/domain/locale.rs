//! Default locale derivation.

use crate::ports::LocaleSource;

const FALLBACK_LANGUAGE: &str = "en";
const FALLBACK_COUNTRY: &str = "us";

/// Derive the default (language, country) pair from a locale source.
///
/// The source yields a tag such as `en-US`, `de_DE`, or `de`. Missing or
/// empty parts fall back to `en` / `us`; both parts are lowercased.
pub fn default_language_and_country<L: LocaleSource>(source: &L) -> (String, String) {
    let tag = source.locale().unwrap_or_default();
    let mut parts = tag.split(['-', '_']);

    let language = match parts.next() {
        Some(language) if !language.is_empty() => language.to_lowercase(),
        _ => FALLBACK_LANGUAGE.to_string(),
    };
    let country = match parts.next() {
        Some(country) if !country.is_empty() => country.to_lowercase(),
        _ => FALLBACK_COUNTRY.to_string(),
    };

    (language, country)
}
