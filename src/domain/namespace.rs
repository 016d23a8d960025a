//! Namespace references and their resolution to fetchable descriptors.

use serde::{Deserialize, Serialize};

use crate::domain::{EnvError, ShortcutTable};

/// The literal handle meaning "the environment's own github handle".
pub const SELF_REFERENCE: &str = ".";

// Site shorthands are at most 3 characters ("o", "de", ".us"); any longer
// bare string is a github handle.
const MAX_SITE_NAME_CHARS: usize = 3;

fn site_shortcuts_url(name: &str) -> String {
    format!("https://raw.githubusercontent.com/trovu/trovu-data/master/shortcuts/{}.yml", name)
}

fn user_shortcuts_url(github: &str) -> String {
    format!("https://raw.githubusercontent.com/{}/trovu-data-user/master/shortcuts.yml", github)
}

/// How a namespace is referenced in parameters or a configuration document,
/// before resolution.
///
/// Deserialized untagged, so a YAML namespace list may mix all three shapes:
///
/// ```yaml
/// namespaces:
/// - o
/// - github: .
///   name: my
/// - name: corp
///   url: https://intranet.example.com/shortcuts.yml
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NamespaceRef {
    /// Bare string: a site name when short, otherwise a github handle.
    Name(String),
    /// A source with its own explicit URL.
    Custom { name: String, url: String },
    /// A user namespace referenced by github handle; `"."` means the
    /// environment's own handle.
    Handle {
        github: String,
        #[serde(default)]
        name: Option<String>,
    },
}

impl NamespaceRef {
    /// Resolve this reference into a concrete namespace descriptor.
    ///
    /// `owner_github` is the environment's own handle, substituted for the
    /// self-reference sentinel. Resolution is pure; the only failure mode is
    /// a self-reference without an owner handle.
    pub fn resolve(&self, owner_github: Option<&str>) -> Result<Namespace, EnvError> {
        match self {
            NamespaceRef::Name(name) if name.chars().count() <= MAX_SITE_NAME_CHARS => {
                Ok(resolve_site(name))
            }
            NamespaceRef::Name(github) => resolve_handle(github, None, owner_github),
            NamespaceRef::Custom { name, url } => Ok(resolve_custom(name, url)),
            NamespaceRef::Handle { github, name } => {
                resolve_handle(github, name.as_deref(), owner_github)
            }
        }
    }
}

fn resolve_site(name: &str) -> Namespace {
    Namespace {
        name: name.to_string(),
        kind: NamespaceKind::Site,
        url: site_shortcuts_url(name),
        github: None,
        shortcuts: ShortcutTable::new(),
    }
}

fn resolve_custom(name: &str, url: &str) -> Namespace {
    Namespace {
        name: name.to_string(),
        kind: NamespaceKind::User,
        url: url.to_string(),
        github: None,
        shortcuts: ShortcutTable::new(),
    }
}

fn resolve_handle(
    github: &str,
    name: Option<&str>,
    owner_github: Option<&str>,
) -> Result<Namespace, EnvError> {
    let github = if github == SELF_REFERENCE {
        owner_github.ok_or(EnvError::UnresolvedSelfReference)?.to_string()
    } else {
        github.to_string()
    };
    let name = name.unwrap_or(&github).to_string();

    Ok(Namespace {
        name,
        kind: NamespaceKind::User,
        url: user_shortcuts_url(&github),
        github: Some(github),
        shortcuts: ShortcutTable::new(),
    })
}

/// The resolution target kind of a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceKind {
    /// Shared curated dataset in the trovu data repository.
    Site,
    /// Personal dataset in a user's data fork.
    User,
}

/// A fully resolved namespace: a concrete fetch location plus, once its
/// document has been fetched and parsed, the shortcut table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NamespaceKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "ShortcutTable::is_empty")]
    pub shortcuts: ShortcutTable,
}
