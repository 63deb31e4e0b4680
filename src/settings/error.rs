use thiserror::Error;

/// Errors that can occur while loading and validating the build configuration.
///
/// Loading is all-or-nothing: every variant aborts the load and no partial
/// record is returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An enumerated option carried a value outside its accepted set.
    #[error("invalid value '{value}' for '{key}' (expected one of: {expected})")]
    InvalidOption {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A content glob failed to parse.
    #[error("invalid content glob '{pattern}'")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// An enabled plugin name did not resolve in the registry.
    #[error("unknown plugin '{name}'")]
    UnknownPlugin { name: String },

    /// The record was structurally invalid.
    #[error("malformed configuration record: {reason}")]
    MalformedRecord { reason: String },
}

impl ConfigError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            reason: reason.into(),
        }
    }
}
