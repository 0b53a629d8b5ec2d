//! Configuration error types

use thiserror::Error;

/// Errors raised while loading or validating widget configuration.
///
/// Rendering and binding never fail; these only surface at the edges where
/// configuration documents are parsed or explicitly validated.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON document could not be decoded
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML document could not be decoded
    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Two options in one container share a value
    #[error("Container '{container}' has duplicate option value '{value}'")]
    DuplicateOptionValue { container: String, value: String },

    /// A stored value does not match its option's control kind
    #[error("Container '{container}' option '{option}' expects a {expected} value")]
    ValueTypeMismatch {
        container: String,
        option: String,
        expected: &'static str,
    },

    /// An option has no entry in the value map
    #[error("Container '{container}' has no value for option '{option}'")]
    MissingValue { container: String, option: String },

    /// The value map has a key no option declares
    #[error("Container '{container}' has a value for unknown option '{key}'")]
    ExtraneousValue { container: String, key: String },

    /// A select control declares no entries
    #[error("Container '{container}' option '{option}' is a select with no entries")]
    EmptySelectEntries { container: String, option: String },
}

/// Specialized Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    pub fn duplicate(container: impl Into<String>, value: impl Into<String>) -> Self {
        Self::DuplicateOptionValue {
            container: container.into(),
            value: value.into(),
        }
    }

    pub fn type_mismatch(
        container: impl Into<String>,
        option: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::ValueTypeMismatch {
            container: container.into(),
            option: option.into(),
            expected,
        }
    }

    pub fn missing(container: impl Into<String>, option: impl Into<String>) -> Self {
        Self::MissingValue {
            container: container.into(),
            option: option.into(),
        }
    }

    pub fn extraneous(container: impl Into<String>, key: impl Into<String>) -> Self {
        Self::ExtraneousValue {
            container: container.into(),
            key: key.into(),
        }
    }

    pub fn empty_select(container: impl Into<String>, option: impl Into<String>) -> Self {
        Self::EmptySelectEntries {
            container: container.into(),
            option: option.into(),
        }
    }

    /// True for errors produced by [`crate::config`] validation rather than decoding.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Json(_) | Self::Toml(_) | Self::Io(_))
    }
}
