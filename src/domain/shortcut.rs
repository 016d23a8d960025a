//! Shortcut tables and their normalization.
//!
//! A namespace document is a YAML mapping from `"<keyword> <argcount>"` keys
//! to either a bare URL template string or a record carrying the template
//! plus auxiliary fields. Normalization promotes the shorthand form and
//! flags keys that violate the key pattern without rejecting them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single keyword shortcut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shortcut {
    /// URL template the keyword expands into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Auxiliary fields (title, description, tests, …), passed through
    /// verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// A shortcut value as it appears in a namespace document: either the bare
/// URL template shorthand or a full record.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ShortcutDef {
    Url(String),
    Record(Shortcut),
}

impl From<ShortcutDef> for Shortcut {
    fn from(def: ShortcutDef) -> Self {
        match def {
            ShortcutDef::Url(url) => Shortcut { url: Some(url), extra: BTreeMap::new() },
            ShortcutDef::Record(record) => record,
        }
    }
}

/// Normalized shortcut table, keyed by `"<keyword> <argcount>"`.
pub type ShortcutTable = BTreeMap<String, Shortcut>;

/// Whether a table key matches the `<keyword> <argcount>` pattern: a
/// non-whitespace keyword, a single space, and a digit-only argument count.
pub fn is_well_formed_key(key: &str) -> bool {
    match key.split_once(' ') {
        Some((keyword, argcount)) => {
            !keyword.is_empty()
                && !keyword.chars().any(char::is_whitespace)
                && !argcount.is_empty()
                && argcount.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

/// Normalize a parsed document: promote bare-string values to records and
/// collect keys violating the key pattern. Malformed keys stay in the table;
/// the caller decides how to report them.
pub fn normalize_table(raw: BTreeMap<String, ShortcutDef>) -> (ShortcutTable, Vec<String>) {
    let mut malformed = Vec::new();
    let mut table = ShortcutTable::new();

    for (key, def) in raw {
        if !is_well_formed_key(&key) {
            malformed.push(key.clone());
        }
        table.insert(key, Shortcut::from(def));
    }

    (table, malformed)
}
