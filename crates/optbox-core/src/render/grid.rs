use super::chrome;
use super::Renderer;
use crate::codec;
use crate::config::{ChoiceOption, GridChoiceConfig};
use crate::i18n::MessageKey;
use crate::ids::{self, attr, class, widget};
use crate::layout::GridLayout;
use crate::node::{el, Element, Node};

impl Renderer {
    /// Checkbox grid with bulk actions.
    ///
    /// Without a header (the nested form) the body is always visible and the
    /// container carries `optbox-embedded`.
    pub fn grid_choice(&self, config: &GridChoiceConfig) -> Node {
        let base = &config.base;
        let id = &base.id;
        let layout = GridLayout::for_config(config, self.settings.grid_gap_px);

        let actions = el("div")
            .class("optbox-grid-actions")
            .child(
                el("button")
                    .id(ids::select_all(id))
                    .attr("type", "button")
                    .class("optbox-action")
                    .text(self.caption(MessageKey::SelectAll)),
            )
            .child(
                el("button")
                    .id(ids::deselect_all(id))
                    .attr("type", "button")
                    .class("optbox-action")
                    .text(self.caption(MessageKey::DeselectAll)),
            );

        let grid = el("div")
            .class("optbox-grid")
            .attr("style", layout.style())
            .children(
                config
                    .options
                    .iter()
                    .map(|o| grid_cell(id, o, config.is_checked(&o.value))),
            );

        let header = config.show_header.then(|| {
            let count = codec::count_checked(&config.options, &config.values);
            chrome::header(base, &codec::summary_text(count), &self.settings.expand_icon)
        });

        chrome::container(base, widget::GRID_CHOICE, base.expanded || !config.show_header)
            .class_if("optbox-embedded", !config.show_header)
            .child(header)
            .child(chrome::body(id).child(actions).child(grid))
            .into_node()
    }
}

fn grid_cell(container: &str, option: &ChoiceOption, checked: bool) -> Element {
    el("div")
        .id(ids::item(container, &option.value))
        .class(class::CELL)
        .class_if(class::SELECTED, checked)
        .attr(attr::VALUE, &option.value)
        .attr(attr::SELECTED, checked.to_string())
        .child(
            el("input")
                .id(ids::control(container, &option.value))
                .attr("type", "checkbox")
                .class("optbox-checkbox")
                .attr(attr::VALUE, &option.value)
                .flag("checked", checked),
        )
        .child(
            el("span")
                .id(ids::label(container, &option.value))
                .class("optbox-cell-label")
                .attr_opt("title", option.description.as_deref())
                .text(&option.label),
        )
}
