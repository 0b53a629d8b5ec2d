//! Markup Renderer: configuration in, markup tree out.
//!
//! Rendering is total, pure and deterministic. Nothing here touches a host;
//! the only coupling with the binder is the id/class/attribute contract in
//! [`crate::ids`].
//!
//! ## Example
//!
//! ```
//! use optbox_core::config::{ChoiceOption, ContainerBase, ExclusiveChoiceConfig};
//! use optbox_core::ids;
//! use optbox_core::render::render_exclusive_choice;
//!
//! let config = ExclusiveChoiceConfig::new(ContainerBase::new("theme", "theme", "Theme"), "dark")
//!     .option(ChoiceOption::new("light", "Light"))
//!     .option(ChoiceOption::new("dark", "Dark"));
//!
//! let tree = render_exclusive_choice(&config);
//! let summary = tree.find_by_id(&ids::summary("theme")).unwrap();
//! assert_eq!(summary.text_content(), "Dark");
//! ```

mod card;
mod chrome;
mod controls;
mod exclusive;
mod grid;
mod multi;

use crate::config::{
    ExclusiveChoiceConfig, GridChoiceConfig, MultiChoiceConfig, NestedCard, TextBlockCardConfig,
    ValueCardConfig,
};
use crate::i18n::{DefaultCatalog, MessageKey, Translate};
use crate::node::Node;
use crate::settings::RenderSettings;

/// Renders configurations with a fixed set of settings and captions.
pub struct Renderer {
    settings: RenderSettings,
    translator: Box<dyn Translate>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            settings: RenderSettings::default(),
            translator: Box::new(DefaultCatalog),
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_translator(mut self, translator: impl Translate + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn caption(&self, key: MessageKey) -> String {
        self.translator.translate(key)
    }

    /// Render a nested card by its variant.
    pub fn nested_card(&self, card: &NestedCard) -> Node {
        match card {
            NestedCard::Value(card) => self.value_card(card),
            NestedCard::TextBlock(card) => self.text_block(card),
            NestedCard::Grid(grid) => self.grid_choice(grid),
        }
    }
}

/// Anything that renders to a markup tree.
pub trait Render {
    fn render(&self, renderer: &Renderer) -> Node;
}

impl Render for ExclusiveChoiceConfig {
    fn render(&self, renderer: &Renderer) -> Node {
        renderer.exclusive_choice(self)
    }
}

impl Render for MultiChoiceConfig {
    fn render(&self, renderer: &Renderer) -> Node {
        renderer.multi_choice(self)
    }
}

impl Render for GridChoiceConfig {
    fn render(&self, renderer: &Renderer) -> Node {
        renderer.grid_choice(self)
    }
}

impl Render for ValueCardConfig {
    fn render(&self, renderer: &Renderer) -> Node {
        renderer.value_card(self)
    }
}

impl Render for TextBlockCardConfig {
    fn render(&self, renderer: &Renderer) -> Node {
        renderer.text_block(self)
    }
}

impl Render for NestedCard {
    fn render(&self, renderer: &Renderer) -> Node {
        renderer.nested_card(self)
    }
}

pub fn render_exclusive_choice(config: &ExclusiveChoiceConfig) -> Node {
    Renderer::default().exclusive_choice(config)
}

pub fn render_multi_choice(config: &MultiChoiceConfig) -> Node {
    Renderer::default().multi_choice(config)
}

pub fn render_grid_choice(config: &GridChoiceConfig) -> Node {
    Renderer::default().grid_choice(config)
}

pub fn render_value_card(config: &ValueCardConfig) -> Node {
    Renderer::default().value_card(config)
}

pub fn render_text_block(config: &TextBlockCardConfig) -> Node {
    Renderer::default().text_block(config)
}
