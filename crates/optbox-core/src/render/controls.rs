use crate::codec;
use crate::config::{ControlKind, SelectEntry};
use crate::ids::attr;
use crate::node::{el, Element};
use crate::value::StoredValue;

/// One bound control, pre-seeded from `value`.
pub(crate) struct ControlSpec<'a> {
    pub id: String,
    pub kind: ControlKind,
    pub value: Option<&'a StoredValue>,
    pub entries: &'a [SelectEntry],
    pub placeholder: Option<&'a str>,
    /// Option value carried on grouped controls.
    pub data_value: Option<&'a str>,
}

impl ControlSpec<'_> {
    pub(crate) fn build(&self) -> Element {
        match self.kind {
            ControlKind::Checkbox => self
                .input("checkbox")
                .class("optbox-checkbox")
                .flag("checked", codec::read_checked(self.value)),
            ControlKind::Switch => el("span")
                .class("optbox-switch")
                .child(
                    self.input("checkbox")
                        .class("optbox-switch-input")
                        .attr("role", "switch")
                        .flag("checked", codec::read_checked(self.value)),
                )
                .child(el("span").class("optbox-switch-slider")),
            ControlKind::Select => self.select(),
            ControlKind::Text => self
                .input("text")
                .class("optbox-text-input")
                .attr("value", codec::read_text(self.value))
                .attr_opt("placeholder", self.placeholder),
        }
    }

    fn input(&self, input_type: &str) -> Element {
        el("input")
            .id(&self.id)
            .attr("type", input_type)
            .attr_opt(attr::VALUE, self.data_value)
    }

    /// A blank entry is prepended only when the current value matches none of
    /// the entries, so the control always shows what the value map holds.
    fn select(&self) -> Element {
        let current = codec::read_text(self.value);
        let matched = self.entries.iter().any(|e| e.value == current);

        el("select")
            .id(&self.id)
            .class("optbox-select")
            .attr_opt(attr::VALUE, self.data_value)
            .when(!matched, |e| {
                e.child(el("option").attr("value", "").flag("selected", true))
            })
            .children(self.entries.iter().map(|entry| {
                el("option")
                    .attr("value", &entry.value)
                    .flag("selected", entry.value == current)
                    .text(&entry.label)
            }))
    }
}
