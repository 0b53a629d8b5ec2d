use super::chrome;
use super::controls::ControlSpec;
use super::Renderer;
use crate::codec;
use crate::config::{ChoiceOption, MultiChoiceConfig};
use crate::ids::{self, attr, class, widget};
use crate::node::{el, Element, Node};
use crate::value::StoredValue;

impl Renderer {
    /// List of independently editable options; each control is seeded from
    /// the value map and the summary counts truthy entries.
    pub fn multi_choice(&self, config: &MultiChoiceConfig) -> Node {
        let base = &config.base;
        let count = codec::count_truthy(&config.options, &config.values);

        let list = el("ul").class("optbox-list").children(
            config
                .options
                .iter()
                .map(|o| self.multi_row(&base.id, o, config.values.get(&o.value))),
        );

        chrome::container(base, widget::MULTI_CHOICE, base.expanded)
            .child(chrome::header(
                base,
                &codec::summary_text(count),
                &self.settings.expand_icon,
            ))
            .child(chrome::body(&base.id).child(list))
            .into_node()
    }

    fn multi_row(
        &self,
        container: &str,
        option: &ChoiceOption,
        value: Option<&StoredValue>,
    ) -> Element {
        let truthy = value.is_some_and(|v| codec::is_truthy(option.control_kind, v));
        let control = ControlSpec {
            id: ids::control(container, &option.value),
            kind: option.control_kind,
            value,
            entries: &option.select_options,
            placeholder: None,
            data_value: Some(&option.value),
        };

        el("li")
            .id(ids::item(container, &option.value))
            .class(class::OPTION)
            .class_if(class::SELECTED, truthy)
            .attr(attr::VALUE, &option.value)
            .attr(attr::CONTROL, option.control_kind.as_str())
            .attr(attr::SELECTED, truthy.to_string())
            .child(chrome::option_text(container, option))
            .child(control.build())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ChoiceOption, ContainerBase, ControlKind, MultiChoiceConfig, SelectEntry};
    use crate::ids::{self, attr};
    use crate::render::render_multi_choice;

    fn mixed() -> MultiChoiceConfig {
        MultiChoiceConfig::new(ContainerBase::new("opts", "opts", "Options"))
            .option(ChoiceOption::new("a", "A"))
            .option(ChoiceOption::new("b", "B").select_options([
                SelectEntry::new("x", "X"),
                SelectEntry::new("y", "Y"),
            ]))
            .option(ChoiceOption::new("c", "C").kind(ControlKind::Switch))
    }

    fn summary(config: &MultiChoiceConfig) -> String {
        render_multi_choice(config)
            .find_by_id(&ids::summary("opts"))
            .unwrap()
            .text_content()
    }

    #[test]
    fn summary_counts_truthy_entries() {
        assert_eq!(summary(&mixed().value("a", false).value("b", "").value("c", false)), "No items selected");
        assert_eq!(summary(&mixed().value("a", true).value("b", "").value("c", false)), "1 item selected");
        assert_eq!(summary(&mixed().value("a", true).value("b", "y").value("c", false)), "2 items selected");
    }

    #[test]
    fn controls_are_seeded_from_values() {
        let tree = render_multi_choice(&mixed().value("a", true).value("b", "y").value("c", true));

        let a = tree.find_by_id(&ids::control("opts", "a")).unwrap();
        assert_eq!(a.get_attr("type"), Some("checkbox"));
        assert!(a.has_attr("checked"));

        let b = tree.find_by_id(&ids::control("opts", "b")).unwrap();
        assert_eq!(b.tag, "select");
        let selected: Vec<_> = b
            .children
            .iter()
            .filter_map(|c| match c {
                crate::node::Node::Element(o) if o.has_attr("selected") => o.get_attr("value"),
                _ => None,
            })
            .collect();
        assert_eq!(selected, vec!["y"]);

        let c = tree.find_by_id(&ids::control("opts", "c")).unwrap();
        assert_eq!(c.get_attr("role"), Some("switch"));
        assert!(c.has_attr("checked"));
    }

    #[test]
    fn empty_select_gets_a_blank_entry() {
        let tree = render_multi_choice(&mixed().value("b", ""));
        let b = tree.find_by_id(&ids::control("opts", "b")).unwrap();
        assert_eq!(b.children.len(), 3);
    }

    #[test]
    fn rows_carry_kind_and_marker() {
        let tree = render_multi_choice(&mixed().value("b", "x"));
        let row = tree.find_by_id(&ids::item("opts", "b")).unwrap();
        assert_eq!(row.get_attr(attr::CONTROL), Some("select"));
        assert_eq!(row.get_attr(attr::SELECTED), Some("true"));

        let row = tree.find_by_id(&ids::item("opts", "a")).unwrap();
        assert_eq!(row.get_attr(attr::SELECTED), Some("false"));
    }
}
