use thiserror::Error;

/// Library-wide error type for environment resolution.
///
/// Fetch- and parse-level failures are recovered at the namespace boundary
/// and surface as diagnostics; they never abort a resolution cycle.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The fetch produced no usable response (transport-level failure).
    #[error("Network request failed for {url}: {details}")]
    Network { url: String, details: String },

    /// The fetch completed but returned a non-success status code.
    #[error("Unexpected HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    /// A fetched document could not be parsed as a YAML mapping.
    #[error("Failed to parse {url}: {details}")]
    Parse { url: String, details: String },

    /// The self-reference sentinel `"."` was used while the environment has
    /// no github handle to substitute.
    #[error("Namespace reference \".\" requires a github handle on the environment")]
    UnresolvedSelfReference,

    /// Configuration or construction-time issue.
    #[error("{0}")]
    Configuration(String),
}

impl EnvError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        EnvError::Configuration(message.into())
    }
}
