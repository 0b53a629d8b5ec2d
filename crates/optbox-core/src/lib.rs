//! Option containers: configuration model, value codec and markup renderer.
//!
//! Five widget kinds share one markup contract ([`ids`]): Exclusive-choice,
//! Multi-choice and Grid-choice containers, plus Value and Text-block cards
//! that stand alone or nest under an exclusive option. Rendering here is
//! pure; the `optbox-bind` crate attaches behavior on a host.

pub mod codec;
pub mod config;
pub mod error;
pub mod html;
pub mod i18n;
pub mod ids;
pub mod layout;
pub mod node;
pub mod render;
pub mod settings;
pub mod value;

pub use config::{
    ChoiceOption, ContainerBase, ControlKind, ExclusiveChoiceConfig, ExclusiveOption,
    GridChoiceConfig, MultiChoiceConfig, NestedCard, SelectEntry, TextBlockCardConfig,
    ValueCardConfig,
};
pub use error::{ConfigError, Result};
pub use i18n::{Catalog, DefaultCatalog, MessageKey, Translate};
pub use node::{Element, Node};
pub use render::{
    render_exclusive_choice, render_grid_choice, render_multi_choice, render_text_block,
    render_value_card, Render, Renderer,
};
pub use settings::RenderSettings;
pub use value::{GridValues, StoredValue, ValueMap};
