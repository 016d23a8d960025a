//! Environment snapshot and the mergeable parameter shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Namespace, NamespaceRef};

/// Caller-supplied or remotely-configured parameters.
///
/// Every field is optional; resolution layers explicit parameters over the
/// remote personal configuration and fills the remaining gaps with computed
/// defaults. Fields this layer does not interpret (the original tool's
/// `defaultKeyword`, for example) land in `extra` and survive the merge
/// verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reload: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespaces: Option<Vec<NamespaceRef>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl EnvParams {
    /// Layer `self` over `base`: fields set on `self` win, unset fields fall
    /// back to `base`. Shallow, field-wise; `extra` keys from `self` override
    /// colliding keys from `base`.
    pub fn merge_over(self, base: EnvParams) -> EnvParams {
        let mut extra = base.extra;
        extra.extend(self.extra);

        EnvParams {
            language: self.language.or(base.language),
            country: self.country.or(base.country),
            github: self.github.or(base.github),
            debug: self.debug.or(base.debug),
            reload: self.reload.or(base.reload),
            namespaces: self.namespaces.or(base.namespaces),
            extra,
        }
    }
}

/// The resolved runtime environment: one immutable snapshot per resolution
/// cycle.
///
/// `namespaces` contains only namespaces whose shortcut document was fetched
/// and parsed, in the relative order they were supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub language: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    pub debug: bool,
    pub reload: bool,
    pub namespaces: Vec<Namespace>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}
