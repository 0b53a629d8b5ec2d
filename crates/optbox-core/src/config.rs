//! Declarative widget configuration.
//!
//! Configurations are immutable input to the renderer. They deserialize from
//! camelCase JSON or TOML documents, mirroring the config objects callers
//! build by hand:
//!
//! ```
//! use optbox_core::config::{from_json_str, MultiChoiceConfig};
//!
//! let config: MultiChoiceConfig = from_json_str(r#"{
//!     "id": "features", "name": "features", "title": "Features",
//!     "options": [{ "value": "a", "label": "A" }],
//!     "values": { "a": true }
//! }"#).unwrap();
//! assert!(config.validate().is_ok());
//! ```

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec;
use crate::error::{ConfigError, Result};
use crate::value::{GridValues, StoredValue, ValueMap};

// ─────────────────────────────────────────────────────────────────────────────
// Shared shapes
// ─────────────────────────────────────────────────────────────────────────────

/// The control an option or value card is edited with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    #[default]
    Checkbox,
    Select,
    Switch,
    Text,
}

impl ControlKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ControlKind::Checkbox => "checkbox",
            ControlKind::Select => "select",
            ControlKind::Switch => "switch",
            ControlKind::Text => "text",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "checkbox" => Some(ControlKind::Checkbox),
            "select" => Some(ControlKind::Select),
            "switch" => Some(ControlKind::Switch),
            "text" => Some(ControlKind::Text),
            _ => None,
        }
    }

    /// Checkbox and switch carry a boolean checked state.
    pub fn is_toggle(self) -> bool {
        matches!(self, ControlKind::Checkbox | ControlKind::Switch)
    }

    /// Select and text hold a string value.
    pub fn stores_text(self) -> bool {
        !self.is_toggle()
    }
}

/// One entry of a select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectEntry {
    pub value: String,
    pub label: String,
}

impl SelectEntry {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A selectable option inside a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    /// Unique within its container.
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub control_kind: ControlKind,
    /// Entries for `select` options, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub select_options: Vec<SelectEntry>,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            control_kind: ControlKind::default(),
            select_options: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn kind(mut self, kind: ControlKind) -> Self {
        self.control_kind = kind;
        self
    }

    pub fn select_options(mut self, entries: impl IntoIterator<Item = SelectEntry>) -> Self {
        self.control_kind = ControlKind::Select;
        self.select_options = entries.into_iter().collect();
        self
    }
}

/// Fields every container variant shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerBase {
    /// Unique DOM anchor; every derived id starts with it.
    pub id: String,
    /// Grouping key.
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub expanded: bool,
}

impl ContainerBase {
    pub fn new(id: impl Into<String>, name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: title.into(),
            description: None,
            icon: String::new(),
            expanded: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Containers
// ─────────────────────────────────────────────────────────────────────────────

/// An option of an Exclusive-choice container, with the cards shown under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExclusiveOption {
    #[serde(flatten)]
    pub option: ChoiceOption,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nested_cards: Vec<NestedCard>,
}

impl ExclusiveOption {
    pub fn nested(mut self, card: impl Into<NestedCard>) -> Self {
        self.nested_cards.push(card.into());
        self
    }
}

impl From<ChoiceOption> for ExclusiveOption {
    fn from(option: ChoiceOption) -> Self {
        Self {
            option,
            nested_cards: Vec::new(),
        }
    }
}

/// Single-choice container: selecting one option deselects the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExclusiveChoiceConfig {
    #[serde(flatten)]
    pub base: ContainerBase,
    #[serde(default)]
    pub options: Vec<ExclusiveOption>,
    /// Should equal some option value; an unmatched value renders no selection.
    #[serde(default)]
    pub selected_value: String,
}

impl ExclusiveChoiceConfig {
    pub fn new(base: ContainerBase, selected_value: impl Into<String>) -> Self {
        Self {
            base,
            options: Vec::new(),
            selected_value: selected_value.into(),
        }
    }

    pub fn option(mut self, option: impl Into<ExclusiveOption>) -> Self {
        self.options.push(option.into());
        self
    }

    /// The option currently marked selected, if `selected_value` matches one.
    pub fn selected_option(&self) -> Option<&ChoiceOption> {
        self.options
            .iter()
            .map(|o| &o.option)
            .find(|o| o.value == self.selected_value)
    }

    pub fn validate(&self) -> Result<()> {
        check_unique(&self.base.id, self.options.iter().map(|o| &o.option))?;
        for option in &self.options {
            for card in &option.nested_cards {
                card.validate()?;
            }
        }
        Ok(())
    }
}

/// Container of independently editable options of mixed control kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiChoiceConfig {
    #[serde(flatten)]
    pub base: ContainerBase,
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
    #[serde(default)]
    pub values: ValueMap,
}

impl MultiChoiceConfig {
    pub fn new(base: ContainerBase) -> Self {
        Self {
            base,
            options: Vec::new(),
            values: ValueMap::new(),
        }
    }

    pub fn option(mut self, option: ChoiceOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn value(mut self, key: impl Into<String>, value: impl Into<StoredValue>) -> Self {
        self.values.insert(key, value);
        self
    }

    /// A value map with exactly one entry per option.
    ///
    /// Missing or mistyped entries become the kind's empty value and keys no
    /// option declares are dropped.
    pub fn normalized_values(&self) -> ValueMap {
        self.options
            .iter()
            .map(|option| {
                let value = match self.values.get(&option.value) {
                    Some(v) if codec::matches_kind(option.control_kind, v) => v.clone(),
                    _ => codec::empty_value(option.control_kind),
                };
                (option.value.clone(), value)
            })
            .collect()
    }

    /// Check that option values are unique, select options have entries and
    /// the value map holds exactly one entry per option of the right type.
    ///
    /// `select` and `text` options hold strings; `checkbox` and `switch`
    /// hold booleans. A boolean entry for a `text` option is a
    /// [`ConfigError::ValueTypeMismatch`], and `text` options never count
    /// toward the summary.
    pub fn validate(&self) -> Result<()> {
        let id = &self.base.id;
        check_unique(id, &self.options)?;
        for option in &self.options {
            check_select_entries(id, option)?;
            let value = self
                .values
                .get(&option.value)
                .ok_or_else(|| ConfigError::missing(id, &option.value))?;
            if !codec::matches_kind(option.control_kind, value) {
                return Err(ConfigError::type_mismatch(
                    id,
                    &option.value,
                    codec::expected_type(option.control_kind),
                ));
            }
        }
        check_no_extra(id, &self.options, self.values.keys())
    }
}

fn default_min_column_width() -> u32 {
    160
}

fn default_true() -> bool {
    true
}

/// Dense boolean options in an adaptive multi-column grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridChoiceConfig {
    #[serde(flatten)]
    pub base: ContainerBase,
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
    #[serde(default)]
    pub values: GridValues,
    /// Minimum column width in pixels.
    #[serde(default = "default_min_column_width")]
    pub min_column_width: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_columns: Option<u32>,
    /// False when nested: renders only the grid and its bulk actions.
    #[serde(default = "default_true")]
    pub show_header: bool,
}

impl GridChoiceConfig {
    pub fn new(base: ContainerBase) -> Self {
        Self {
            base,
            options: Vec::new(),
            values: GridValues::new(),
            min_column_width: default_min_column_width(),
            max_columns: None,
            show_header: true,
        }
    }

    pub fn option(mut self, option: ChoiceOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn value(mut self, key: impl Into<String>, checked: bool) -> Self {
        self.values.insert(key.into(), checked);
        self
    }

    pub fn min_column_width(mut self, width: u32) -> Self {
        self.min_column_width = width;
        self
    }

    pub fn max_columns(mut self, columns: u32) -> Self {
        self.max_columns = Some(columns);
        self
    }

    pub fn show_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    pub fn is_checked(&self, value: &str) -> bool {
        self.values.get(value).copied().unwrap_or(false)
    }

    pub fn validate(&self) -> Result<()> {
        let id = &self.base.id;
        check_unique(id, &self.options)?;
        for option in &self.options {
            if !self.values.contains_key(&option.value) {
                return Err(ConfigError::missing(id, &option.value));
            }
        }
        check_no_extra(id, &self.options, self.values.keys().map(String::as_str))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Cards
// ─────────────────────────────────────────────────────────────────────────────

/// A single standalone control with a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueCardConfig {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub control_kind: ControlKind,
    #[serde(default)]
    pub value: StoredValue,
    /// Entries for `select` cards.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl ValueCardConfig {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: ControlKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            control_kind: kind,
            value: codec::empty_value(kind),
            options: Vec::new(),
            placeholder: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn value(mut self, value: impl Into<StoredValue>) -> Self {
        self.value = value.into();
        self
    }

    pub fn options(mut self, entries: impl IntoIterator<Item = SelectEntry>) -> Self {
        self.options = entries.into_iter().collect();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.control_kind == ControlKind::Select && self.options.is_empty() {
            return Err(ConfigError::empty_select(&self.id, &self.id));
        }
        if !codec::matches_kind(self.control_kind, &self.value) {
            return Err(ConfigError::type_mismatch(
                &self.id,
                &self.id,
                codec::expected_type(self.control_kind),
            ));
        }
        Ok(())
    }
}

/// A multi-line text control with optional import/export buttons.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlockCardConfig {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Visible rows; the render settings supply a default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(default)]
    pub show_import_export: bool,
}

impl TextBlockCardConfig {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn import_export(mut self) -> Self {
        self.show_import_export = true;
        self
    }
}

/// A card nested under an Exclusive-choice option.
///
/// Loose config objects are classified by precedence: a `"type":
/// "grid-choice"` marker wins, then text-block-only fields (`rows`,
/// `showImportExport`), and anything else is a value card. Serialization
/// always writes the explicit `type` discriminant.
#[derive(Debug, Clone, PartialEq)]
pub enum NestedCard {
    Value(ValueCardConfig),
    TextBlock(TextBlockCardConfig),
    Grid(GridChoiceConfig),
}

impl NestedCard {
    pub const VALUE_TAG: &'static str = "value";
    pub const TEXT_BLOCK_TAG: &'static str = "text-block";
    pub const GRID_TAG: &'static str = "grid-choice";

    pub fn validate(&self) -> Result<()> {
        match self {
            NestedCard::Value(card) => card.validate(),
            NestedCard::TextBlock(_) => Ok(()),
            NestedCard::Grid(grid) => grid.validate(),
        }
    }
}

impl From<ValueCardConfig> for NestedCard {
    fn from(card: ValueCardConfig) -> Self {
        NestedCard::Value(card)
    }
}

impl From<TextBlockCardConfig> for NestedCard {
    fn from(card: TextBlockCardConfig) -> Self {
        NestedCard::TextBlock(card)
    }
}

impl From<GridChoiceConfig> for NestedCard {
    fn from(grid: GridChoiceConfig) -> Self {
        NestedCard::Grid(grid)
    }
}

impl<'de> Deserialize<'de> for NestedCard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        let tag = raw.get("type").and_then(serde_json::Value::as_str);
        let text_block_fields = raw.get("rows").is_some() || raw.get("showImportExport").is_some();

        let decoded = if tag == Some(Self::GRID_TAG) {
            serde_json::from_value(raw.clone()).map(NestedCard::Grid)
        } else if tag == Some(Self::TEXT_BLOCK_TAG) || text_block_fields {
            serde_json::from_value(raw.clone()).map(NestedCard::TextBlock)
        } else {
            if tag != Some(Self::VALUE_TAG) {
                tracing::debug!(tag = ?tag, "nested card has no recognised shape, reading as value card");
            }
            serde_json::from_value(raw.clone()).map(NestedCard::Value)
        };

        Ok(decoded.unwrap_or_else(|err| {
            tracing::debug!(error = %err, "malformed nested card, reading as value card");
            NestedCard::Value(ValueCardConfig::salvage(&raw))
        }))
    }
}

impl ValueCardConfig {
    /// Best-effort value card from a loose object: every field that decodes
    /// is kept, the rest take their defaults.
    fn salvage(raw: &serde_json::Value) -> Self {
        fn field<T: DeserializeOwned>(raw: &serde_json::Value, key: &str) -> Option<T> {
            raw.get(key)
                .and_then(|value| serde_json::from_value(value.clone()).ok())
        }

        let kind: ControlKind = field(raw, "controlKind").unwrap_or_default();
        Self {
            id: field(raw, "id").unwrap_or_default(),
            title: field(raw, "title").unwrap_or_default(),
            description: field(raw, "description"),
            control_kind: kind,
            value: field(raw, "value").unwrap_or_else(|| codec::empty_value(kind)),
            options: field(raw, "options").unwrap_or_default(),
            placeholder: field(raw, "placeholder"),
        }
    }
}

impl Serialize for NestedCard {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(tag = "type", rename_all = "kebab-case")]
        enum Tagged<'a> {
            Value(&'a ValueCardConfig),
            TextBlock(&'a TextBlockCardConfig),
            GridChoice(&'a GridChoiceConfig),
        }

        match self {
            NestedCard::Value(card) => Tagged::Value(card),
            NestedCard::TextBlock(card) => Tagged::TextBlock(card),
            NestedCard::Grid(grid) => Tagged::GridChoice(grid),
        }
        .serialize(serializer)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading and validation helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Decode any configuration type from a JSON document.
pub fn from_json_str<T: DeserializeOwned>(source: &str) -> Result<T> {
    Ok(serde_json::from_str(source)?)
}

/// Decode any configuration type from a TOML document.
pub fn from_toml_str<T: DeserializeOwned>(source: &str) -> Result<T> {
    Ok(toml::from_str(source)?)
}

fn check_unique<'a>(
    container: &str,
    options: impl IntoIterator<Item = &'a ChoiceOption>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for option in options {
        if !seen.insert(option.value.as_str()) {
            return Err(ConfigError::duplicate(container, &option.value));
        }
    }
    Ok(())
}

fn check_select_entries(container: &str, option: &ChoiceOption) -> Result<()> {
    if option.control_kind == ControlKind::Select && option.select_options.is_empty() {
        return Err(ConfigError::empty_select(container, &option.value));
    }
    Ok(())
}

fn check_no_extra<'a>(
    container: &str,
    options: &[ChoiceOption],
    keys: impl IntoIterator<Item = &'a str>,
) -> Result<()> {
    for key in keys {
        if !options.iter().any(|o| o.value == key) {
            return Err(ConfigError::extraneous(container, key));
        }
    }
    Ok(())
}
