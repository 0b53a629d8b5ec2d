//! Localized button captions.
//!
//! Only four captions are translated: the text-block import/export buttons
//! and the grid bulk-selection buttons.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    ImportFile,
    ExportFile,
    SelectAll,
    DeselectAll,
}

impl MessageKey {
    pub const ALL: [MessageKey; 4] = [
        MessageKey::ImportFile,
        MessageKey::ExportFile,
        MessageKey::SelectAll,
        MessageKey::DeselectAll,
    ];

    /// Catalog key.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::ImportFile => "importFile",
            MessageKey::ExportFile => "exportFile",
            MessageKey::SelectAll => "selectAll",
            MessageKey::DeselectAll => "deselectAll",
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            MessageKey::ImportFile => "Import file",
            MessageKey::ExportFile => "Export file",
            MessageKey::SelectAll => "Select all",
            MessageKey::DeselectAll => "Deselect all",
        }
    }
}

pub trait Translate {
    fn translate(&self, key: MessageKey) -> String;
}

impl<F> Translate for F
where
    F: Fn(MessageKey) -> String,
{
    fn translate(&self, key: MessageKey) -> String {
        (self)(key)
    }
}

/// Built-in English captions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCatalog;

impl Translate for DefaultCatalog {
    fn translate(&self, key: MessageKey) -> String {
        key.english().to_string()
    }
}

/// Caption table keyed by [`MessageKey::as_str`], e.g. loaded from TOML:
///
/// ```toml
/// importFile = "Datei importieren"
/// exportFile = "Datei exportieren"
/// ```
///
/// Keys missing from the table fall back to English.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: MessageKey, caption: impl Into<String>) -> Self {
        self.entries.insert(key.as_str().to_string(), caption.into());
        self
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

impl Translate for Catalog {
    fn translate(&self, key: MessageKey) -> String {
        self.entries
            .get(key.as_str())
            .cloned()
            .unwrap_or_else(|| key.english().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_english() {
        assert_eq!(DefaultCatalog.translate(MessageKey::SelectAll), "Select all");
    }

    #[test]
    fn catalog_falls_back_to_english() {
        let catalog = Catalog::from_toml_str(r#"importFile = "Datei importieren""#).unwrap();
        assert_eq!(catalog.translate(MessageKey::ImportFile), "Datei importieren");
        assert_eq!(catalog.translate(MessageKey::ExportFile), "Export file");
    }

    #[test]
    fn closures_translate() {
        let upper = |key: MessageKey| key.english().to_uppercase();
        assert_eq!(upper.translate(MessageKey::DeselectAll), "DESELECT ALL");
    }

    #[test]
    fn catalog_loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("captions.toml");
        std::fs::write(&path, "selectAll = \"Alle\"\n").unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.translate(MessageKey::SelectAll), "Alle");
    }
}
