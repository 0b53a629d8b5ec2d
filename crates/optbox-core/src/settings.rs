//! Render settings

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

fn default_grid_gap() -> u32 {
    8
}

fn default_text_block_rows() -> u32 {
    6
}

fn default_expand_icon() -> String {
    "▾".to_string()
}

/// Knobs that change rendered markup. Every field has a default, so an empty
/// document is a valid settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RenderSettings {
    /// Gutter between grid columns, in pixels.
    #[serde(default = "default_grid_gap")]
    pub grid_gap_px: u32,
    /// Rows for text-block cards that do not set their own.
    #[serde(default = "default_text_block_rows")]
    pub default_text_block_rows: u32,
    /// Glyph of the expand/collapse affordance.
    #[serde(default = "default_expand_icon")]
    pub expand_icon: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            grid_gap_px: default_grid_gap(),
            default_text_block_rows: default_text_block_rows(),
            expand_icon: default_expand_icon(),
        }
    }
}

impl RenderSettings {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded render settings");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(RenderSettings::from_toml_str("").unwrap(), RenderSettings::default());
    }

    #[test]
    fn partial_document_overrides_fields() {
        let settings = RenderSettings::from_toml_str("grid_gap_px = 12").unwrap();
        assert_eq!(settings.grid_gap_px, 12);
        assert_eq!(settings.default_text_block_rows, 6);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = RenderSettings::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
