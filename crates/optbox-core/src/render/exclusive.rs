use super::chrome;
use super::Renderer;
use crate::config::{ExclusiveChoiceConfig, ExclusiveOption};
use crate::ids::{self, attr, class, widget};
use crate::node::{el, Element, Node};

impl Renderer {
    /// Radio list whose summary is the selected option's label.
    ///
    /// An unmatched `selected_value` renders an empty summary and no marker.
    pub fn exclusive_choice(&self, config: &ExclusiveChoiceConfig) -> Node {
        let base = &config.base;
        let summary = config
            .selected_option()
            .map(|o| o.label.as_str())
            .unwrap_or_default();

        let list = el("ul")
            .class("optbox-list")
            .children(config.options.iter().map(|o| self.exclusive_row(config, o)));

        chrome::container(base, widget::EXCLUSIVE_CHOICE, base.expanded)
            .child(chrome::header(base, summary, &self.settings.expand_icon))
            .child(chrome::body(&base.id).child(list))
            .into_node()
    }

    fn exclusive_row(&self, config: &ExclusiveChoiceConfig, entry: &ExclusiveOption) -> Element {
        let container = &config.base.id;
        let option = &entry.option;
        let selected = option.value == config.selected_value;

        el("li")
            .id(ids::item(container, &option.value))
            .class(class::OPTION)
            .class_if(class::SELECTED, selected)
            .attr(attr::VALUE, &option.value)
            .attr(attr::SELECTED, selected.to_string())
            .child(
                el("input")
                    .id(ids::control(container, &option.value))
                    .attr("type", "radio")
                    .attr("name", &config.base.name)
                    .attr("value", &option.value)
                    .attr(attr::VALUE, &option.value)
                    .flag("checked", selected),
            )
            .child(chrome::option_text(container, option))
            .when(!entry.nested_cards.is_empty(), |row| {
                row.child(self.nested_region(container, entry))
            })
    }

    /// Nested cards in declaration order, separated by dividers.
    fn nested_region(&self, container: &str, entry: &ExclusiveOption) -> Element {
        let mut region = el("div")
            .id(ids::nested(container, &entry.option.value))
            .class(class::NESTED);
        for (i, card) in entry.nested_cards.iter().enumerate() {
            if i > 0 {
                region = region.child(el("hr").class("optbox-divider"));
            }
            region = region.child(self.nested_card(card));
        }
        region
    }
}
