//! Configuration loading errors.

use std::fmt::Display;
use std::path::PathBuf;

/// Error returned when a configuration patch or value cannot be read.
///
/// Style resolution itself never fails; these only surface at the edges
/// where text is turned into typed configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON source could not be parsed into a patch.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The YAML source could not be parsed into a patch.
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A configuration file could not be read.
    #[error("failed to read configuration file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not name a supported format.
    #[error("unsupported configuration format for '{}' (expected .json, .yaml or .yml)", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A string did not name a valid value of the expected kind.
    #[error("invalid {kind}: '{value}'")]
    InvalidValue { kind: &'static str, value: String },
}

impl ConfigError {
    pub(crate) fn invalid_value(kind: &'static str, value: impl Display) -> Self {
        ConfigError::InvalidValue {
            kind,
            value: value.to_string(),
        }
    }
}
