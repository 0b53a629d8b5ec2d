//! Container frame shared by every container kind: root, header, body.

use crate::config::{ChoiceOption, ContainerBase};
use crate::ids::{self, attr, class};
use crate::node::{el, Element};

pub(crate) fn container(base: &ContainerBase, widget: &str, expanded: bool) -> Element {
    el("div")
        .id(&base.id)
        .class(class::CONTAINER)
        .class(format!("optbox-{widget}"))
        .class_if(class::EXPANDED, expanded)
        .attr(attr::WIDGET, widget)
        .attr("data-name", &base.name)
}

/// Title, description, icon, live summary and the expand affordance.
pub(crate) fn header(base: &ContainerBase, summary: &str, expand_icon: &str) -> Element {
    el("div")
        .id(ids::header(&base.id))
        .class(class::HEADER)
        .attr("role", "button")
        .attr(attr::EXPANDED, base.expanded.to_string())
        .when(!base.icon.is_empty(), |h| {
            h.child(el("span").class("optbox-icon").text(&base.icon))
        })
        .child(
            el("div")
                .class("optbox-heading")
                .child(el("span").class("optbox-title").text(&base.title))
                .child(
                    base.description
                        .as_ref()
                        .map(|d| el("span").class("optbox-description").text(d)),
                ),
        )
        .child(
            el("span")
                .id(ids::summary(&base.id))
                .class(class::SUMMARY)
                .text(summary),
        )
        .child(el("span").class("optbox-expander").text(expand_icon))
}

pub(crate) fn body(container: &str) -> Element {
    el("div").id(ids::body(container)).class(class::BODY)
}

/// Label and description of one list option.
pub(crate) fn option_text(container: &str, option: &ChoiceOption) -> Element {
    el("div")
        .class("optbox-option-text")
        .child(
            el("span")
                .id(ids::label(container, &option.value))
                .class("optbox-option-label")
                .text(&option.label),
        )
        .child(
            option
                .description
                .as_ref()
                .map(|d| el("span").class("optbox-option-description").text(d)),
        )
}

/// Title and description of a standalone card.
pub(crate) fn card_text(title: &str, description: Option<&String>) -> Element {
    el("div")
        .class("optbox-card-text")
        .child(el("span").class("optbox-card-title").text(title))
        .child(description.map(|d| el("span").class("optbox-card-description").text(d)))
}
