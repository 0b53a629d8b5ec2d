use super::chrome;
use super::controls::ControlSpec;
use super::Renderer;
use crate::config::{TextBlockCardConfig, ValueCardConfig};
use crate::i18n::MessageKey;
use crate::ids::{self, attr, class, widget};
use crate::node::{el, Node};

impl Renderer {
    pub fn value_card(&self, card: &ValueCardConfig) -> Node {
        let control = ControlSpec {
            id: ids::card_control(&card.id),
            kind: card.control_kind,
            value: Some(&card.value),
            entries: &card.options,
            placeholder: card.placeholder.as_deref(),
            data_value: None,
        };

        el("div")
            .id(&card.id)
            .class(class::CARD)
            .class("optbox-value-card")
            .attr(attr::WIDGET, widget::VALUE_CARD)
            .attr(attr::CONTROL, card.control_kind.as_str())
            .child(chrome::card_text(&card.title, card.description.as_ref()))
            .child(el("div").class("optbox-card-control").child(control.build()))
            .into_node()
    }

    /// Multi-line text card. Import/export buttons are rendered only when
    /// the card asks for them; their behavior is supplied at bind time.
    pub fn text_block(&self, card: &TextBlockCardConfig) -> Node {
        let rows = card.rows.unwrap_or(self.settings.default_text_block_rows);

        let actions = card.show_import_export.then(|| {
            el("div")
                .class("optbox-card-actions")
                .child(
                    el("button")
                        .id(ids::import_button(&card.id))
                        .attr("type", "button")
                        .class("optbox-action")
                        .text(self.caption(MessageKey::ImportFile)),
                )
                .child(
                    el("button")
                        .id(ids::export_button(&card.id))
                        .attr("type", "button")
                        .class("optbox-action")
                        .text(self.caption(MessageKey::ExportFile)),
                )
        });

        let textarea = el("textarea")
            .id(ids::card_control(&card.id))
            .class("optbox-textarea")
            .attr("rows", rows.to_string())
            .attr_opt("placeholder", card.placeholder.as_deref())
            .text(&card.value);

        el("div")
            .id(&card.id)
            .class(class::CARD)
            .class("optbox-text-block")
            .attr(attr::WIDGET, widget::TEXT_BLOCK)
            .child(chrome::card_text(&card.title, card.description.as_ref()))
            .child(actions)
            .child(textarea)
            .into_node()
    }
}
