//! Control Binder: wires a mounted container to a host and reports changes.
//!
//! Controls are located through the id contract in [`optbox_core::ids`];
//! nothing from the renderer is carried over besides the mounted markup.
//! Binding a container that is not mounted is a silent no-op; binding one
//! twice is refused with a warning.

mod card;
mod exclusive;
mod grid;
mod multi;

pub use card::{
    bind_text_block, bind_value_card, set_text_block_value, text_block_value, TextBlockHooks,
};
pub use exclusive::bind_exclusive_choice;
pub use grid::bind_grid_choice;
pub use multi::bind_multi_choice;

use optbox_core::config::ControlKind;
use optbox_core::ids::{self, attr, class};
use optbox_core::value::StoredValue;

use crate::host::{listener, Event, EventKind, Host, NodeHandle};
use crate::selector::Selector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindOptions {
    /// Keep the header summary in sync with the current state.
    pub update_header: bool,
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            update_header: true,
        }
    }
}

impl BindOptions {
    pub fn without_header_updates() -> Self {
        Self {
            update_header: false,
        }
    }
}

/// Locate `container_id` and mark it bound.
pub(crate) fn claim(host: &dyn Host, container_id: &str) -> Option<NodeHandle> {
    let Some(root) = host.find(container_id) else {
        tracing::debug!(container_id = %container_id, "container not mounted, skipping bind");
        return None;
    };
    if host.attribute(root, attr::BOUND).is_some() {
        tracing::warn!(container_id = %container_id, "container is already bound, ignoring");
        return None;
    }
    host.set_attribute(root, attr::BOUND, "true");
    Some(root)
}

/// Locate a card and its control, marking the card bound only when both
/// are present.
pub(crate) fn claim_card(host: &dyn Host, card_id: &str) -> Option<(NodeHandle, NodeHandle)> {
    let control_id = ids::card_control(card_id);
    if host.find(card_id).is_some() && host.find(&control_id).is_none() {
        tracing::debug!(container_id = %card_id, control_id = %control_id, "card has no control, skipping bind");
        return None;
    }
    let root = claim(host, card_id)?;
    let control = host.find(&control_id)?;
    Some((root, control))
}

/// Header clicks flip the container's expanded state. Purely visual.
pub(crate) fn wire_expander(host: &dyn Host, container_id: &str) {
    let Some(header) = host.find(&ids::header(container_id)) else {
        return;
    };
    let id = container_id.to_string();
    host.listen(
        header,
        EventKind::Click,
        listener(move |host, _| toggle_expanded(host, &id)),
    );
}

fn toggle_expanded(host: &dyn Host, container_id: &str) {
    let (Some(root), Some(header)) = (
        host.find(container_id),
        host.find(&ids::header(container_id)),
    ) else {
        return;
    };
    let expanded = !host.has_class(root, class::EXPANDED);
    host.set_class(root, class::EXPANDED, expanded);
    host.set_attribute(header, attr::EXPANDED, &expanded.to_string());
}

/// Controls whose own activation handles a click.
pub(crate) fn interactive() -> Selector {
    Selector::tag("input")
        .or(Selector::tag("select"))
        .or(Selector::tag("textarea"))
        .or(Selector::tag("button"))
}

/// Whether the event's path from its target up to, but excluding, the node
/// whose listener runs crosses a node matching `stop`.
pub(crate) fn path_crosses(host: &dyn Host, event: &Event, stop: &Selector) -> bool {
    let mut current = Some(event.target);
    while let Some(node) = current {
        if node == event.current_target {
            return false;
        }
        if host.matches(node, stop) {
            return true;
        }
        current = host.parent(node);
    }
    false
}

/// Set an item's selection marker class and attribute together.
pub(crate) fn mark_selected(host: &dyn Host, item: NodeHandle, selected: bool) {
    host.set_class(item, class::SELECTED, selected);
    host.set_attribute(item, attr::SELECTED, &selected.to_string());
}

pub(crate) fn write_summary(host: &dyn Host, container_id: &str, summary: &str) {
    if let Some(node) = host.find(&ids::summary(container_id)) {
        host.set_text(node, summary);
    }
}

/// Rows of `root` with the given class, paired with their option value.
pub(crate) fn items(host: &dyn Host, root: NodeHandle, item_class: &str) -> Vec<(NodeHandle, String)> {
    host.query_all(Some(root), &Selector::class(item_class))
        .into_iter()
        .filter_map(|item| host.attribute(item, attr::VALUE).map(|v| (item, v)))
        .collect()
}

/// Control kind recorded on a rendered row or card.
pub(crate) fn control_kind(host: &dyn Host, node: NodeHandle) -> ControlKind {
    host.attribute(node, attr::CONTROL)
        .and_then(|k| ControlKind::parse(&k))
        .unwrap_or_default()
}

/// Read a control's live state as a typed value.
pub(crate) fn read_control(host: &dyn Host, control: NodeHandle, kind: ControlKind) -> StoredValue {
    if kind.is_toggle() {
        StoredValue::Bool(host.checked(control))
    } else {
        StoredValue::Text(host.value(control))
    }
}

/// The event a control of `kind` reports edits with.
pub(crate) fn trigger(kind: ControlKind) -> EventKind {
    match kind {
        ControlKind::Text => EventKind::Input,
        _ => EventKind::Change,
    }
}
